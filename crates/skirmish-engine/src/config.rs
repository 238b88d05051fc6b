//! Battlefield configuration, validation, and error types.
//!
//! [`BattlefieldConfig`] is the builder-input for constructing a
//! [`VirtualBattlefield`](crate::VirtualBattlefield);
//! [`validate()`](BattlefieldConfig::validate) checks every structural
//! invariant up front so the constructor can rely on them.

use std::error::Error;
use std::fmt;

use skirmish_grid::GridError;

/// Errors detected during [`BattlefieldConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The grid derived from the theater is invalid.
    Grid(GridError),
    /// A bubble or visual radius is not finite and non-negative.
    InvalidRadius {
        /// Which radius ("air", "mud", or "visual").
        name: &'static str,
        /// The offending value, meters.
        value: f32,
    },
    /// The per-walker work quantum is zero — no walk would ever progress.
    ZeroWalkQuantum,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::InvalidRadius { name, value } => {
                write!(f, "{name} radius must be finite and non-negative, got {value}")
            }
            Self::ZeroWalkQuantum => write!(f, "walk quantum must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Complete configuration for constructing a battlefield.
#[derive(Clone, Debug)]
pub struct BattlefieldConfig {
    /// Grid columns (east-west cell count).
    pub cols: u32,
    /// Grid rows (north-south cell count).
    pub rows: u32,
    /// Cell edge length, meters. Default: 1000.
    pub cell_size_m: f32,
    /// Radius of the air bubble a human unit projects, meters.
    pub air_bubble_radius_m: f32,
    /// Radius of the mud bubble a human unit projects, meters.
    pub mud_bubble_radius_m: f32,
    /// Camera distance within which an in-bubble cell is shown, meters.
    pub visual_radius_m: f32,
    /// Maximum elements each walker advances per `update` call.
    pub walk_quantum: usize,
}

impl Default for BattlefieldConfig {
    fn default() -> Self {
        Self {
            cols: 64,
            rows: 64,
            cell_size_m: 1000.0,
            air_bubble_radius_m: 40_000.0,
            mud_bubble_radius_m: 5_000.0,
            visual_radius_m: 20_000.0,
            walk_quantum: 2,
        }
    }
}

impl BattlefieldConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Grid construction performs the dimension and cell-size checks.
        skirmish_grid::BattleGrid::new(self.cols, self.rows, self.cell_size_m)?;

        for (name, value) in [
            ("air", self.air_bubble_radius_m),
            ("mud", self.mud_bubble_radius_m),
            ("visual", self.visual_radius_m),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidRadius { name, value });
            }
        }
        if self.walk_quantum == 0 {
            return Err(ConfigError::ZeroWalkQuantum);
        }
        Ok(())
    }
}

//! Error types for grid construction.

use std::error::Error;
use std::fmt;

/// Errors detected while constructing a [`BattleGrid`](crate::BattleGrid).
///
/// Out-of-range *queries* are not represented here: mapping a position
/// outside the configured bounds is a caller bug and panics (see
/// [`BattleGrid::cell_at`](crate::BattleGrid::cell_at)).
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// One of the grid dimensions is zero.
    EmptyGrid,
    /// A dimension exceeds the supported maximum.
    DimensionTooLarge {
        /// Which axis ("cols" or "rows").
        name: &'static str,
        /// The offending value.
        value: u32,
        /// The supported maximum.
        max: u32,
    },
    /// Cell size is not finite and positive.
    InvalidCellSize {
        /// The offending value, meters.
        value: f32,
    },
    /// `cols * rows` does not fit in a `u32` cell index.
    CellCountOverflow {
        /// The computed cell count.
        value: u64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid has zero cells"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
            Self::InvalidCellSize { value } => {
                write!(f, "cell size must be finite and positive, got {value}")
            }
            Self::CellCountOverflow { value } => {
                write!(f, "cell count {value} exceeds u32::MAX")
            }
        }
    }
}

impl Error for GridError {}

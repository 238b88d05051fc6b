//! World-space geometry primitives.

use std::fmt;

/// A position on the battlefield ground plane, in meters.
///
/// The scheduler partitions space in two dimensions only; altitude is the
/// business of the terrain and flight-model collaborators. `x` grows east,
/// `y` grows north from the theater origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldPos {
    /// East offset from the theater origin, meters.
    pub x: f32,
    /// North offset from the theater origin, meters.
    pub y: f32,
}

impl WorldPos {
    /// Construct a position from east/north offsets in meters.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`, meters.
    pub fn distance(&self, other: WorldPos) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for WorldPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

//! Strongly-typed identifiers used across the battlefield crates.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Index of a cell within the dense battlefield grid.
///
/// Cells are laid out row-major: `CellIndex(row * cols + col)`. The grid
/// assigns indices at construction time and they never change for the
/// lifetime of the battlefield.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex(pub u32);

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CellIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a dynamic entity registered with the battlefield.
///
/// Allocated by the external object registry; the battlefield never mints
/// unit IDs itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(pub u64);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UnitId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Monotonically increasing simulation tick counter.
///
/// Incremented once per `VirtualBattlefield::on_update` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Counter for unique [`SceneNodeId`] allocation.
static SCENE_NODE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Opaque handle to a scene-graph node.
///
/// Allocated from a monotonic atomic counter via [`SceneNodeId::next`].
/// The scheduler only ever passes these handles back to the [`Scene`]
/// collaborator; it never interprets them. Two distinct allocations always
/// yield different IDs within one process, so a detached node handle can
/// never be confused with a later attachment.
///
/// [`Scene`]: crate::traits::Scene
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneNodeId(u64);

impl SceneNodeId {
    /// Allocate a fresh, unique node ID. Thread-safe.
    pub fn next() -> Self {
        Self(SCENE_NODE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SceneNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Skirmish: an incremental battlefield aggregation scheduler.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Skirmish sub-crates. For most users, adding `skirmish` as a single
//! dependency is sufficient.
//!
//! The engine partitions a theater into a dense grid of cells and keeps
//! every cell cheap until a human observer's "bubble" approaches. Cells
//! inside a bubble progressively deaggregate their contents into
//! fully-simulated objects; cells left behind progressively collapse them
//! back. All transitions are spread over ticks in bounded quanta, so the
//! per-frame cost stays flat no matter how many entities change state.
//!
//! # Quick start
//!
//! ```rust
//! use skirmish::prelude::*;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! // Minimal host collaborators: a scene that ignores everything and a
//! // flat terrain.
//! struct NullScene;
//! impl Scene for NullScene {
//!     fn add_node(&mut self, _node: SceneNodeId) {}
//!     fn remove_node(&mut self, _node: SceneNodeId) {}
//!     fn set_near_object(&mut self, _unit: UnitId, _near: bool) {}
//! }
//! struct FlatGround;
//! impl Terrain for FlatGround {
//!     fn elevation(&self, _x: f32, _y: f32) -> Option<f32> { Some(0.0) }
//! }
//!
//! // A trivial unit the scheduler can aggregate and deaggregate.
//! struct Jeep { aggregated: bool }
//! impl Unit for Jeep {
//!     fn id(&self) -> UnitId { UnitId(1) }
//!     fn position(&self) -> WorldPos { WorldPos::new(500.0, 500.0) }
//!     fn detail_class(&self) -> DetailClass { DetailClass::Mud }
//!     fn is_human(&self) -> bool { true }
//!     fn is_aggregated(&self) -> bool { self.aggregated }
//!     fn aggregate(&mut self) { self.aggregated = true; }
//!     fn deaggregate(&mut self) { self.aggregated = false; }
//! }
//!
//! let mut battlefield = VirtualBattlefield::new(
//!     BattlefieldConfig::default(),
//!     Box::new(NullScene),
//!     Box::new(FlatGround),
//! )
//! .unwrap();
//!
//! let driver = Rc::new(RefCell::new(Jeep { aggregated: true }));
//! battlefield.add_unit(driver.clone()).unwrap();
//! battlefield.on_update(1.0 / 20.0);
//!
//! // The human observer projects bubbles around itself.
//! let home = battlefield.grid().cell_at(WorldPos::new(500.0, 500.0));
//! assert!(battlefield.in_air_bubble(home));
//! assert!(battlefield.in_mud_bubble(home));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `skirmish-core` | IDs, geometry, collaborator traits |
//! | [`grid`] | `skirmish-grid` | Dense cell grid and bubble footprints |
//! | [`engine`] | `skirmish-engine` | Walkers, active cells, the battlefield |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`skirmish-core`).
///
/// Contains the collaborator traits the host implements
/// ([`types::Unit`], [`types::FeatureGroup`], [`types::Scene`],
/// [`types::Terrain`]) and the shared id and geometry types.
pub use skirmish_core as types;

/// Dense battlefield grid (`skirmish-grid`).
///
/// [`grid::BattleGrid`] maps world positions to cells and computes bubble
/// footprints.
pub use skirmish_grid as grid;

/// The scheduling engine (`skirmish-engine`).
///
/// [`engine::VirtualBattlefield`] is the main entry point;
/// [`engine::ListWalker`] and [`engine::ActiveCell`] are the incremental
/// primitives underneath it.
pub use skirmish_engine as engine;

/// Common imports for typical Skirmish usage.
///
/// ```rust
/// use skirmish::prelude::*;
/// ```
///
/// This imports the battlefield, its configuration, the collaborator
/// traits, and the shared id and geometry types.
pub mod prelude {
    pub use skirmish_core::{
        CellIndex, DetailClass, FeatureGroup, FeatureHandle, Scene, SceneNodeId, Terrain, TickId,
        Unit, UnitHandle, UnitId, WorldPos,
    };
    pub use skirmish_engine::{
        ActiveCell, BattlefieldConfig, BattlefieldError, Cell, ConfigError, ListWalker, Theater,
        UpdateMetrics, VirtualBattlefield, WalkStats,
    };
    pub use skirmish_grid::{BattleGrid, GridError};
}

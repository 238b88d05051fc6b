//! Core types and capability traits for the Skirmish battlefield scheduler.
//!
//! This crate defines the identifiers, the world-position type, and the
//! narrow collaborator interfaces ([`Unit`], [`FeatureGroup`], [`Terrain`],
//! [`Scene`]) through which the scheduling engine talks to the rest of a
//! simulation. It carries no scheduling logic of its own.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod geom;
pub mod id;
pub mod traits;

pub use geom::WorldPos;
pub use id::{CellIndex, SceneNodeId, TickId, UnitId};
pub use traits::{
    DetailClass, FeatureGroup, FeatureHandle, Scene, Terrain, Unit, UnitHandle,
};

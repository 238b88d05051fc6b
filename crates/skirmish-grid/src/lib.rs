//! Dense battlefield grid for the Skirmish scheduler.
//!
//! Defines [`BattleGrid`], the fixed-size spatial partition covering a
//! theater: a deterministic, injective mapping from world coordinates to
//! [`CellIndex`](skirmish_core::CellIndex) values, cell-center queries, and
//! radius footprints used for bubble projection.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

pub use error::GridError;
pub use grid::BattleGrid;

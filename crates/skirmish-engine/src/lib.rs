//! Incremental aggregation scheduler for the Skirmish battlefield.
//!
//! The engine keeps a dense grid of [`Cell`]s cheap to simulate while no
//! observer is nearby, and progressively deaggregates their contents into
//! fully-simulated objects as observer bubbles approach. All transition
//! work is amortized: each tick advances every [`ActiveCell`]'s walkers by
//! a bounded element quantum, so per-tick cost stays flat regardless of how
//! much total work is outstanding.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod active;
pub mod battlefield;
pub mod cell;
pub mod config;
pub mod metrics;
pub mod walker;

pub use active::{ActiveCell, WalkStats};
pub use battlefield::{BattlefieldError, Theater, VirtualBattlefield};
pub use cell::Cell;
pub use config::{BattlefieldConfig, ConfigError};
pub use metrics::UpdateMetrics;
pub use walker::ListWalker;

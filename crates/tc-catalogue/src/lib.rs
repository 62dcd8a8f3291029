//! `tc-catalogue`: the stop/route store behind every query.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`model`]     | `Stop`, `Route`                                       |
//! | [`catalogue`] | `Catalogue` (arenas, name indices, distance table)    |
//! | [`stats`]     | `RouteStat`, `StopStat`                               |
//!
//! # Lifecycle
//!
//! A catalogue is filled first (stops, routes, distances) and then read.
//! Entities are never removed: stops are updated in place when re-added, and
//! ids handed out by [`Catalogue::add_stop`] stay valid for the catalogue's
//! lifetime.

pub mod catalogue;
pub mod model;
pub mod stats;


pub use catalogue::Catalogue;
pub use model::{Route, Stop};
pub use stats::{RouteStat, StopStat};

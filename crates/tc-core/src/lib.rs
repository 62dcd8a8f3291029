//! `tc-core`: foundational types for the transit catalogue workspace.
//!
//! Every other `tc-*` crate depends on this one.  It has no `tc-*`
//! dependencies and a single external one (`thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                         |
//! |-----------|--------------------------------------------------|
//! | [`ids`]   | `StopId`, `RouteId`, `VertexId`, `EdgeId`        |
//! | [`geo`]   | `GeoPoint`, great-circle distance                |
//! | [`error`] | `CoreError`, `CoreResult`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |

pub mod error;
pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{EdgeId, RouteId, StopId, VertexId};

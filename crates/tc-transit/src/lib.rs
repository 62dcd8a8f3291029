//! `tc-transit`: itineraries over a [`Catalogue`](tc_catalogue::Catalogue).
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`settings`]  | `RoutingSettings` (wait time, bus velocity)              |
//! | [`router`]    | `TransitRouter`, vertex mapping helpers                  |
//! | [`planner`]   | `TransitPlanner` (configuration generations)             |
//! | [`itinerary`] | `Itinerary`, `Segment`                                   |
//! | [`error`]     | `TransitError`, `TransitResult<T>`                       |
//!
//! # Graph model
//!
//! Every stop contributes two vertices:
//!
//! ```text
//!            wait edge (bus_wait_time)
//! wait(S) ─────────────────────────────▶ board(S)
//!
//!            bus edge (road metres / velocity), tagged {route, span_count}
//! board(S_i) ──────────────────────────▶ wait(S_j)     for every i < j on a route
//! ```
//!
//! An itinerary from `X` to `Y` is the shortest path `wait(X) → wait(Y)`.
//! All times are in minutes.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.      |
//! | `parallel` | Builds the all-pairs table with Rayon.                  |

pub mod error;
pub mod itinerary;
pub mod planner;
pub mod router;
pub mod settings;


pub use error::{TransitError, TransitResult};
pub use itinerary::{Itinerary, Segment};
pub use planner::TransitPlanner;
pub use router::{TransitRouter, board_vertex, stop_of_vertex, wait_vertex};
pub use settings::RoutingSettings;

//! `tc-graph`: generic directed weighted graph and all-pairs routing.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`graph`]  | `DirectedWeightedGraph<W>`, `Edge<W>`, `Weight` trait     |
//! | [`router`] | `AllPairsRouter<W>`, `RouteInfo<W>`                       |
//! | [`error`]  | `GraphError`, `GraphResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Relaxes table rows concurrently with Rayon.             |

pub mod error;
pub mod graph;
pub mod router;


pub use error::{GraphError, GraphResult};
pub use graph::{DirectedWeightedGraph, Edge, Weight};
pub use router::{AllPairsRouter, RouteInfo};

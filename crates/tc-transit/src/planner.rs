//! Configuration generations over a frozen catalogue.
//!
//! Each [`TransitPlanner::configure`] call builds a complete new
//! [`TransitRouter`] and swaps it in only once it is ready.  Callers that took
//! a [`snapshot`](TransitPlanner::snapshot) keep querying the generation they
//! hold; later queries on the planner see the new one.

use std::sync::Arc;

use log::info;

use tc_catalogue::Catalogue;

use crate::itinerary::Itinerary;
use crate::router::TransitRouter;
use crate::settings::RoutingSettings;
use crate::TransitResult;

/// Entry point for itinerary queries.
///
/// # Example
///
/// ```
/// use tc_catalogue::Catalogue;
/// use tc_core::GeoPoint;
/// use tc_transit::{RoutingSettings, Segment, TransitPlanner};
///
/// let mut catalogue = Catalogue::new();
/// catalogue.add_stop("A", GeoPoint::new(0.0, 0.0));
/// catalogue.add_stop("B", GeoPoint::new(0.0, 0.01));
/// catalogue.set_distance("A", "B", 1000);
/// catalogue.add_route("1", &["A", "B"], false);
///
/// let planner = TransitPlanner::new(&catalogue, RoutingSettings::new(5, 60.0)).unwrap();
/// let trip = planner.build_route("A", "B").unwrap();
/// assert_eq!(trip.total_time, 6.0);
/// assert!(matches!(trip.segments[0], Segment::Wait { .. }));
/// ```
pub struct TransitPlanner<'c> {
    catalogue:  &'c Catalogue,
    current:    Arc<TransitRouter<'c>>,
    generation: u64,
}

impl<'c> TransitPlanner<'c> {
    /// Build the first generation.
    pub fn new(catalogue: &'c Catalogue, settings: RoutingSettings) -> TransitResult<Self> {
        let current = Arc::new(TransitRouter::build(catalogue, settings)?);
        Ok(Self { catalogue, current, generation: 0 })
    }

    /// Rebuild the graph and router with new settings.
    ///
    /// On error the previous generation stays active.
    pub fn configure(&mut self, settings: RoutingSettings) -> TransitResult<()> {
        let next = TransitRouter::build(self.catalogue, settings)?;
        self.current = Arc::new(next);
        self.generation += 1;
        info!("routing generation {} active", self.generation);
        Ok(())
    }

    /// The active generation.
    pub fn snapshot(&self) -> Arc<TransitRouter<'c>> {
        Arc::clone(&self.current)
    }

    /// Number of successful [`configure`](Self::configure) calls so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn settings(&self) -> RoutingSettings {
        self.current.settings()
    }

    /// Fastest itinerary between two named stops under the active
    /// generation.  See [`TransitRouter::build_route`].
    pub fn build_route(&self, from: &str, to: &str) -> Option<Itinerary> {
        self.current.build_route(from, to)
    }
}

//! The `Catalogue` store.
//!
//! # Data layout
//!
//! Stops and routes live in two arenas (`Vec<Stop>`, `Vec<Route>`) addressed
//! by `StopId` / `RouteId`.  Every index holds ids, never references:
//!
//! | Index            | Maps                                   |
//! |------------------|----------------------------------------|
//! | `stop_index`     | stop name → `StopId`                   |
//! | `route_index`    | route name → `RouteId`                 |
//! | `routes_by_stop` | `StopId` → routes visiting the stop    |
//! | `distances`      | `(from, to)` → road metres, directed   |
//!
//! # Distances
//!
//! The distance table is directed and asymmetric.  [`Catalogue::distance`]
//! resolves `(A, B)` by trying, in order:
//!
//! 1. the entry `(A, B)`;
//! 2. the reverse entry `(B, A)`;
//! 3. the great-circle distance between the two positions, rounded to whole
//!    metres.

use std::collections::BTreeSet;

use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};

use tc_core::{GeoPoint, RouteId, StopId};

use crate::model::{Route, Stop};
use crate::stats::{RouteStat, StopStat};

/// Owner of all stops, routes, and road distances.
#[derive(Clone, Debug, Default)]
pub struct Catalogue {
    stops:          Vec<Stop>,
    routes:         Vec<Route>,
    stop_index:     FxHashMap<String, StopId>,
    route_index:    FxHashMap<String, RouteId>,
    routes_by_stop: Vec<FxHashSet<RouteId>>,
    distances:      FxHashMap<(StopId, StopId), u32>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Stops ─────────────────────────────────────────────────────────────

    /// Add a stop, or move an existing stop with the same name to
    /// `position`.  Returns the stop's id either way.
    pub fn add_stop(&mut self, name: &str, position: GeoPoint) -> StopId {
        match self.stop_index.get(name) {
            Some(&id) => {
                self.stops[id.index()].position = position;
                id
            }
            None => self.insert_stop(name, position),
        }
    }

    fn insert_stop(&mut self, name: &str, position: GeoPoint) -> StopId {
        let id = StopId::from_index(self.stops.len());
        self.stops.push(Stop { name: name.to_owned(), position });
        self.routes_by_stop.push(FxHashSet::default());
        self.stop_index.insert(name.to_owned(), id);
        id
    }

    /// Id of `name`, creating a placeholder at `(0, 0)` if it is unknown.
    fn resolve_or_placeholder(&mut self, name: &str) -> StopId {
        if let Some(&id) = self.stop_index.get(name) {
            return id;
        }
        trace!("placeholder stop {name:?} created");
        self.insert_stop(name, GeoPoint::default())
    }

    pub fn find_stop(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    /// # Panics
    /// Panics if `id` was not issued by this catalogue.
    #[inline]
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// All stops in id order.
    pub fn stops(&self) -> impl Iterator<Item = (StopId, &Stop)> + '_ {
        self.stops
            .iter()
            .enumerate()
            .map(|(i, s)| (StopId::from_index(i), s))
    }

    // ── Routes ────────────────────────────────────────────────────────────

    /// Add a route over the named stops.
    ///
    /// Unknown stop names become placeholder stops.  Routes that are not
    /// roundtrips are expanded to include the way back.  An empty stop list
    /// adds nothing and returns `None`.
    ///
    /// Re-adding an existing name replaces that route's stops in place and
    /// keeps its id.
    pub fn add_route<S: AsRef<str>>(
        &mut self,
        name: &str,
        stop_names: &[S],
        is_roundtrip: bool,
    ) -> Option<RouteId> {
        if stop_names.is_empty() {
            debug!("route {name:?} has no stops, ignored");
            return None;
        }

        let listed: Vec<StopId> = stop_names
            .iter()
            .map(|s| self.resolve_or_placeholder(s.as_ref()))
            .collect();
        let stops = Route::expand(listed, is_roundtrip);

        let id = match self.route_index.get(name) {
            Some(&id) => {
                for stop in &self.routes[id.index()].stops {
                    self.routes_by_stop[stop.index()].remove(&id);
                }
                let route = &mut self.routes[id.index()];
                route.stops = stops;
                route.is_roundtrip = is_roundtrip;
                id
            }
            None => {
                let id = RouteId::from_index(self.routes.len());
                self.routes.push(Route { name: name.to_owned(), stops, is_roundtrip });
                self.route_index.insert(name.to_owned(), id);
                id
            }
        };

        for stop in &self.routes[id.index()].stops {
            self.routes_by_stop[stop.index()].insert(id);
        }
        Some(id)
    }

    pub fn find_route(&self, name: &str) -> Option<RouteId> {
        self.route_index.get(name).copied()
    }

    /// # Panics
    /// Panics if `id` was not issued by this catalogue.
    #[inline]
    pub fn route(&self, id: RouteId) -> &Route {
        &self.routes[id.index()]
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// All routes in id order.
    pub fn routes(&self) -> impl Iterator<Item = (RouteId, &Route)> + '_ {
        self.routes
            .iter()
            .enumerate()
            .map(|(i, r)| (RouteId::from_index(i), r))
    }

    // ── Distances ─────────────────────────────────────────────────────────

    /// Record the road distance `from → to`.  Does not touch `to → from`.
    ///
    /// Ignored if either name is unknown.
    pub fn set_distance(&mut self, from: &str, to: &str, meters: u32) {
        match (self.find_stop(from), self.find_stop(to)) {
            (Some(a), Some(b)) => self.set_distance_ids(a, b, meters),
            _ => debug!("distance {from:?} -> {to:?} names an unknown stop, ignored"),
        }
    }

    pub fn set_distance_ids(&mut self, from: StopId, to: StopId, meters: u32) {
        self.distances.insert((from, to), meters);
    }

    /// Road distance `from → to` in metres.  Never fails; see the module
    /// docs for the lookup order.
    pub fn distance(&self, from: StopId, to: StopId) -> u32 {
        if let Some(&d) = self.distances.get(&(from, to)) {
            return d;
        }
        if let Some(&d) = self.distances.get(&(to, from)) {
            return d;
        }
        let a = self.stops[from.index()].position;
        let b = self.stops[to.index()].position;
        a.distance_m(b).round() as u32
    }

    /// Name-based [`distance`](Self::distance); `0` if either name is
    /// unknown.
    pub fn distance_by_name(&self, from: &str, to: &str) -> u32 {
        match (self.find_stop(from), self.find_stop(to)) {
            (Some(a), Some(b)) => self.distance(a, b),
            _ => 0,
        }
    }

    // ── Statistics ────────────────────────────────────────────────────────

    /// Statistics for the named route, or `None` if it is unknown or empty.
    pub fn route_stat(&self, name: &str) -> Option<RouteStat> {
        let route = self.route(self.find_route(name)?);
        if route.stops.is_empty() {
            return None;
        }

        let (road, straight) = route.legs().fold((0u64, 0.0f64), |(road, straight), (a, b)| {
            let pa = self.stops[a.index()].position;
            let pb = self.stops[b.index()].position;
            (road + u64::from(self.distance(a, b)), straight + pa.distance_m(pb))
        });

        let curvature = if straight.abs() < f64::EPSILON {
            1.0
        } else {
            road as f64 / straight
        };

        Some(RouteStat {
            stop_count: route.stop_count(),
            unique_stop_count: route.unique_stop_count(),
            route_length: road,
            curvature,
        })
    }

    /// Names of the routes visiting `stop`, sorted.  Empty if the stop is
    /// unknown.
    pub fn buses_by_stop(&self, stop: &str) -> BTreeSet<&str> {
        self.stop_stat(stop).map(|s| s.buses).unwrap_or_default()
    }

    /// Routes serving the named stop, or `None` if the stop is unknown.
    ///
    /// A known stop that no route visits yields an empty set.
    pub fn stop_stat(&self, name: &str) -> Option<StopStat<'_>> {
        let id = self.find_stop(name)?;
        let buses = self.routes_by_stop[id.index()]
            .iter()
            .map(|r| self.routes[r.index()].name.as_str())
            .collect();
        Some(StopStat { buses })
    }
}

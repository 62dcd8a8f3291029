//! One configuration generation: the transit graph, its all-pairs router, and
//! the side tables that turn edge ids back into itinerary segments.

use log::{debug, info};
use rustc_hash::FxHashSet;

use tc_catalogue::Catalogue;
use tc_core::{EdgeId, RouteId, StopId, VertexId};
use tc_graph::{AllPairsRouter, DirectedWeightedGraph};

use crate::itinerary::{Itinerary, Segment};
use crate::settings::RoutingSettings;
use crate::TransitResult;

// ── Vertex mapping ────────────────────────────────────────────────────────────

/// Vertex where a passenger waits at `stop` (itineraries start and end here).
#[inline]
pub fn wait_vertex(stop: StopId) -> VertexId {
    VertexId(stop.0 * 2)
}

/// Vertex where a passenger has boarded at `stop`.
#[inline]
pub fn board_vertex(stop: StopId) -> VertexId {
    VertexId(stop.0 * 2 + 1)
}

/// The stop a vertex belongs to.
#[inline]
pub fn stop_of_vertex(vertex: VertexId) -> StopId {
    StopId(vertex.0 / 2)
}

// ── TransitRouter ─────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug)]
struct BusSpan {
    route:      RouteId,
    span_count: u32,
}

/// Immutable routing snapshot built from a catalogue and one set of
/// [`RoutingSettings`].
///
/// Borrows the catalogue, so the catalogue cannot change while a snapshot
/// exists; stop-derived vertex ids therefore never go stale.
pub struct TransitRouter<'c> {
    catalogue:  &'c Catalogue,
    settings:   RoutingSettings,
    router:     AllPairsRouter<f64>,
    wait_edges: FxHashSet<EdgeId>,
    /// Indexed by `EdgeId`; `None` for wait edges.
    bus_edges:  Vec<Option<BusSpan>>,
}

impl<'c> TransitRouter<'c> {
    /// Build the graph for the current catalogue state and precompute all
    /// shortest paths.
    ///
    /// Cost is dominated by the O(V³) router build, V = 2 × stop count.
    pub fn build(catalogue: &'c Catalogue, settings: RoutingSettings) -> TransitResult<Self> {
        settings.validate()?;

        let stop_count = catalogue.stop_count();
        let bus_edge_estimate: usize = catalogue
            .routes()
            .map(|(_, r)| r.stops.len() * r.stops.len().saturating_sub(1) / 2)
            .sum();

        let mut graph = DirectedWeightedGraph::with_capacity(stop_count * 2, stop_count + bus_edge_estimate);
        let mut wait_edges = FxHashSet::default();
        let mut bus_edges = Vec::with_capacity(stop_count + bus_edge_estimate);

        // ── Wait edges: one per stop ──────────────────────────────────────
        for (stop, _) in catalogue.stops() {
            let id = graph.add_edge(wait_vertex(stop), board_vertex(stop), settings.wait_minutes());
            wait_edges.insert(id);
            bus_edges.push(None);
        }

        // ── Bus edges: one per ordered stop pair along each route ────────
        let m_per_min = settings.velocity_m_per_min();
        for (route, r) in catalogue.routes() {
            for (i, &origin) in r.stops.iter().enumerate() {
                let mut meters = 0u64;
                for j in i + 1..r.stops.len() {
                    meters += u64::from(catalogue.distance(r.stops[j - 1], r.stops[j]));
                    let id = graph.add_edge(
                        board_vertex(origin),
                        wait_vertex(r.stops[j]),
                        meters as f64 / m_per_min,
                    );
                    debug_assert_eq!(id.index(), bus_edges.len());
                    bus_edges.push(Some(BusSpan { route, span_count: (j - i) as u32 }));
                }
            }
        }

        info!(
            "transit graph: {stop_count} stops, {} vertices, {} wait edges, {} bus edges \
             (wait {} min, velocity {} km/h)",
            graph.vertex_count(),
            wait_edges.len(),
            graph.edge_count() - wait_edges.len(),
            settings.bus_wait_time,
            settings.bus_velocity,
        );

        let router = AllPairsRouter::new(graph)?;

        Ok(Self { catalogue, settings, router, wait_edges, bus_edges })
    }

    pub fn settings(&self) -> RoutingSettings {
        self.settings
    }

    pub fn catalogue(&self) -> &'c Catalogue {
        self.catalogue
    }

    pub fn graph(&self) -> &DirectedWeightedGraph<f64> {
        self.router.graph()
    }

    /// Fastest itinerary between two named stops.
    ///
    /// `None` if either name is unknown or `to` cannot be reached.  A stop to
    /// itself is a trivial itinerary with no segments.
    pub fn build_route(&self, from: &str, to: &str) -> Option<Itinerary> {
        let from = self.catalogue.find_stop(from)?;
        let to = self.catalogue.find_stop(to)?;
        self.build_route_ids(from, to)
    }

    /// Id-based [`build_route`](Self::build_route).
    ///
    /// # Panics
    /// Panics if either id was not issued by the catalogue this router was
    /// built from.
    pub fn build_route_ids(&self, from: StopId, to: StopId) -> Option<Itinerary> {
        let Some(path) = self.router.build_route(wait_vertex(from), wait_vertex(to)) else {
            debug!("no itinerary {from} -> {to}");
            return None;
        };

        let segments = path.edges.iter().map(|&e| self.decode(e)).collect();
        Some(Itinerary { total_time: path.weight, segments })
    }

    fn decode(&self, id: EdgeId) -> Segment {
        let edge = self.router.graph().edge(id);

        if self.wait_edges.contains(&id) {
            let stop = self.catalogue.stop(stop_of_vertex(edge.from));
            return Segment::Wait {
                stop_name: stop.name.clone(),
                time:      self.settings.wait_minutes(),
            };
        }

        match self.bus_edges[id.index()] {
            Some(span) => Segment::Bus {
                route_name: self.catalogue.route(span.route).name.clone(),
                span_count: span.span_count,
                time:       edge.weight,
            },
            None => unreachable!("{id} is neither a wait edge nor a bus edge"),
        }
    }
}

//! Precomputed all-pairs shortest-path router.
//!
//! # Algorithm
//!
//! Floyd–Warshall over a dense `V × V` table of optional
//! `{ weight, prev_edge }` entries.  Entry `(i, j)` is present iff `j` is
//! reachable from `i`; `prev_edge` is the last edge of the best known path
//! `i → j`, or `None` for the trivial path `i → i`.
//!
//! Construction is O(V³) time and O(V²) memory.  In exchange every query is a
//! table lookup plus an O(path length) walk back along `prev_edge`:
//!
//! ```text
//! to ──prev_edge(from, to)──▶ e_n.from ──prev_edge(from, e_n.from)──▶ … ▶ from
//! ```
//!
//! The router owns its graph and is immutable once built.  There is no
//! partially-built state visible to callers: [`AllPairsRouter::new`] either
//! returns a complete router or an error.

use log::debug;

use tc_core::{EdgeId, VertexId};

use crate::graph::{DirectedWeightedGraph, Weight};
use crate::{GraphError, GraphResult};

// ── RouteInfo ─────────────────────────────────────────────────────────────────

/// A shortest path: its total weight and the edges to traverse in order.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteInfo<W> {
    pub weight: W,
    pub edges:  Vec<EdgeId>,
}

impl<W> RouteInfo<W> {
    /// `true` if source and destination are the same vertex.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }
}

// ── AllPairsRouter ────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug)]
struct Entry<W> {
    weight:    W,
    prev_edge: Option<EdgeId>,
}

type Row<W> = Vec<Option<Entry<W>>>;

/// Shortest paths between every ordered vertex pair of a graph.
pub struct AllPairsRouter<W: Weight> {
    graph: DirectedWeightedGraph<W>,
    table: Vec<Row<W>>,
}

impl<W: Weight> AllPairsRouter<W> {
    /// Take ownership of `graph` and precompute all shortest paths.
    ///
    /// Fails with [`GraphError::NegativeWeight`] if any edge weight is
    /// negative (or NaN); this is checked for every edge before relaxation
    /// starts.
    pub fn new(graph: DirectedWeightedGraph<W>) -> GraphResult<Self> {
        let n = graph.vertex_count();
        debug!(
            "building all-pairs router: {n} vertices, {} edges",
            graph.edge_count()
        );

        for (id, edge) in graph.edges() {
            if !edge.weight.is_non_negative() {
                return Err(GraphError::NegativeWeight { edge: id, weight: edge.weight.as_f64() });
            }
        }

        let mut table = initial_table(&graph);

        for k in 0..n {
            // Row k does not change during round k (dist(k, k) = 0 and all
            // weights are non-negative), so a snapshot is equivalent to
            // reading it in place.
            let row_k = table[k].clone();

            #[cfg(not(feature = "parallel"))]
            {
                for row in table.iter_mut() {
                    relax_row(row, k, &row_k);
                }
            }

            #[cfg(feature = "parallel")]
            {
                use rayon::prelude::*;
                table.par_iter_mut().for_each(|row| relax_row(row, k, &row_k));
            }
        }

        debug!("all-pairs router ready");
        Ok(Self { graph, table })
    }

    /// The graph this router was built over.
    pub fn graph(&self) -> &DirectedWeightedGraph<W> {
        &self.graph
    }

    pub fn vertex_count(&self) -> usize {
        self.table.len()
    }

    /// Shortest path `from → to`, or `None` if `to` is unreachable.
    ///
    /// `from == to` always yields a zero-weight route with no edges.
    ///
    /// # Panics
    /// Panics if either vertex is out of range.
    pub fn build_route(&self, from: VertexId, to: VertexId) -> Option<RouteInfo<W>> {
        let row = &self.table[from.index()];
        let entry = row[to.index()]?;

        let mut edges = Vec::new();
        let mut prev = entry.prev_edge;
        while let Some(edge) = prev {
            edges.push(edge);
            prev = row[self.graph.edge(edge).from.index()].and_then(|e| e.prev_edge);
        }
        edges.reverse();

        Some(RouteInfo { weight: entry.weight, edges })
    }
}

// ── Construction internals ────────────────────────────────────────────────────

/// Zero-weight diagonal plus the cheapest direct edge for every `(v, to)`.
fn initial_table<W: Weight>(graph: &DirectedWeightedGraph<W>) -> Vec<Row<W>> {
    let n = graph.vertex_count();
    let mut table: Vec<Row<W>> = vec![vec![None; n]; n];

    for (v, row) in table.iter_mut().enumerate() {
        row[v] = Some(Entry { weight: W::ZERO, prev_edge: None });

        for id in graph.incident_edges(VertexId::from_index(v)) {
            let edge = graph.edge(id);
            let cheaper = match row[edge.to.index()] {
                Some(existing) => edge.weight < existing.weight,
                None => true,
            };
            if cheaper {
                row[edge.to.index()] = Some(Entry { weight: edge.weight, prev_edge: Some(id) });
            }
        }
    }

    table
}

/// Relax row `i` through intermediate vertex `k`.
///
/// The new predecessor is the last edge of the `k → j` leg when that leg is
/// non-empty, otherwise the last edge of the `i → k` leg.
fn relax_row<W: Weight>(row: &mut [Option<Entry<W>>], k: usize, row_k: &[Option<Entry<W>>]) {
    let Some(ik) = row[k] else {
        return;
    };

    for (j, kj) in row_k.iter().enumerate() {
        let Some(kj) = kj else {
            continue;
        };
        let candidate = ik.weight + kj.weight;
        let improves = match row[j] {
            None => true,
            Some(ij) => candidate < ij.weight,
        };
        if improves {
            row[j] = Some(Entry {
                weight:    candidate,
                prev_edge: kj.prev_edge.or(ik.prev_edge),
            });
        }
    }
}

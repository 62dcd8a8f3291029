//! Append-only directed weighted graph.
//!
//! # Data layout
//!
//! Edges live in one global `Vec<Edge<W>>` indexed by `EdgeId`, so an edge id
//! is simply its insertion index and never changes.  Each vertex owns an
//! incidence list of the `EdgeId`s leaving it, in insertion order:
//!
//! ```text
//! edges:      [ e0 e1 e2 e3 ... ]
//! incidence:  v0 → [e0, e2]
//!             v1 → [e1]
//!             v2 → [e3]
//! ```
//!
//! Unlike a CSR layout this accepts edges in any order with O(1) amortised
//! appends, at the cost of one small `Vec` per vertex.  The graph only grows:
//! there is no edge removal, and the vertex count is fixed at construction.

use std::fmt::Debug;
use std::ops::Add;

use tc_core::{EdgeId, VertexId};

// ── Weight ────────────────────────────────────────────────────────────────────

/// Numeric edge weight.
///
/// The router only needs addition, a total-enough order, and a zero.
/// `is_non_negative` must return `false` for anything the router cannot
/// accept, including NaN.
pub trait Weight: Copy + PartialOrd + Add<Output = Self> + Debug + Send + Sync + 'static {
    const ZERO: Self;

    fn is_non_negative(self) -> bool;

    /// Lossy conversion used in error messages and logs.
    fn as_f64(self) -> f64;
}

macro_rules! float_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            const ZERO: Self = 0.0;
            #[inline]
            fn is_non_negative(self) -> bool {
                self >= 0.0
            }
            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

macro_rules! int_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            const ZERO: Self = 0;
            #[inline]
            #[allow(unused_comparisons)]
            fn is_non_negative(self) -> bool {
                self >= 0
            }
            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

float_weight!(f32, f64);
int_weight!(u32, u64, i32, i64);

// ── Edge ──────────────────────────────────────────────────────────────────────

/// A directed edge `from → to`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge<W> {
    pub from:   VertexId,
    pub to:     VertexId,
    pub weight: W,
}

// ── DirectedWeightedGraph ─────────────────────────────────────────────────────

/// Directed graph with a fixed vertex set and an append-only edge list.
///
/// # Example
///
/// ```
/// use tc_core::VertexId;
/// use tc_graph::DirectedWeightedGraph;
///
/// let mut g = DirectedWeightedGraph::new(3);
/// let e = g.add_edge(VertexId(0), VertexId(2), 1.5);
/// assert_eq!(e.index(), 0);
/// assert_eq!(g.edge(e).to, VertexId(2));
/// assert_eq!(g.incident_edges(VertexId(0)).collect::<Vec<_>>(), vec![e]);
/// ```
#[derive(Clone, Debug)]
pub struct DirectedWeightedGraph<W> {
    edges:     Vec<Edge<W>>,
    incidence: Vec<Vec<EdgeId>>,
}

impl<W: Weight> DirectedWeightedGraph<W> {
    /// Create a graph with `vertex_count` vertices (`VertexId(0)` ..
    /// `VertexId(vertex_count - 1)`) and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self::with_capacity(vertex_count, 0)
    }

    /// Like [`new`](Self::new), pre-allocating room for `edges` edges.
    pub fn with_capacity(vertex_count: usize, edges: usize) -> Self {
        Self {
            edges:     Vec::with_capacity(edges),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Append a directed edge and return its id (= insertion index).
    ///
    /// # Panics
    /// Panics if either endpoint is not a vertex of this graph.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: W) -> EdgeId {
        assert!(
            to.index() < self.vertex_count(),
            "{to} out of range for graph with {} vertices",
            self.vertex_count()
        );
        let id = EdgeId::from_index(self.edges.len());
        self.incidence[from.index()].push(id);
        self.edges.push(Edge { from, to, weight });
        id
    }

    /// The edge with id `id`.
    ///
    /// # Panics
    /// Panics if `id` was not returned by [`add_edge`](Self::add_edge) on
    /// this graph.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge<W> {
        &self.edges[id.index()]
    }

    /// Ids of the edges leaving `vertex`, in insertion order.
    ///
    /// The iterator borrows the graph and can be re-created at any time.
    #[inline]
    pub fn incident_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.incidence[vertex.index()].iter().copied()
    }

    /// All edges in id order, paired with their ids.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<W>)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, e)| (EdgeId::from_index(i), e))
    }
}

//! Directed weighted graph and builder.
//!
//! # Data layout
//!
//! Edges are stored in **insertion order** and indexed by `EdgeId`, so the
//! id returned by [`GraphBuilder::add_edge`] stays valid in the built graph.
//! Callers key their own per-edge metadata by that id.
//!
//! Outgoing adjacency uses **Compressed Sparse Row (CSR)** over a permutation
//! of edge ids.  Given a `VertexId v`, its outgoing edges are:
//!
//! ```text
//! out_edge_ids[ out_start[v] .. out_start[v+1] ]
//! ```
//!
//! The permutation is built with a stable sort, so edges leaving the same
//! vertex keep their insertion order.  Dijkstra's inner loop is therefore a
//! contiguous scan and its tie-breaking is deterministic.

use tc_core::{EdgeId, VertexId};

use crate::{GraphError, GraphResult};

/// One directed edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub from:   VertexId,
    pub to:     VertexId,
    /// Non-negative cost.
    pub weight: f64,
}

// ── DirectedWeightedGraph ─────────────────────────────────────────────────────

/// Immutable directed graph with non-negative `f64` weights.
///
/// Do not construct directly; use [`GraphBuilder`].
#[derive(Debug, Clone)]
pub struct DirectedWeightedGraph {
    vertex_count: usize,

    /// All edges, indexed by `EdgeId`.
    edges: Vec<Edge>,

    /// CSR row pointer.  Length = `vertex_count + 1`.
    out_start: Vec<u32>,

    /// Edge ids grouped by source vertex.
    out_edge_ids: Vec<EdgeId>,
}

impl DirectedWeightedGraph {
    /// A graph with no vertices.  Every routing request against it fails.
    pub fn empty() -> Self {
        GraphBuilder::new(0).build()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// The edge with id `edge`, or `None` if out of range.
    #[inline]
    pub fn edge(&self, edge: EdgeId) -> Option<&Edge> {
        self.edges.get(edge.index())
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// `EdgeId`s of all outgoing edges from `vertex`, in insertion order.
    #[inline]
    pub fn out_edges(&self, vertex: VertexId) -> &[EdgeId] {
        let start = self.out_start[vertex.index()] as usize;
        let end   = self.out_start[vertex.index() + 1] as usize;
        &self.out_edge_ids[start..end]
    }

    #[inline]
    pub fn out_degree(&self, vertex: VertexId) -> usize {
        self.out_edges(vertex).len()
    }

    /// `Ok(())` if `vertex` belongs to this graph.
    pub fn check_vertex(&self, vertex: VertexId) -> GraphResult<()> {
        if vertex.index() < self.vertex_count {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange { vertex, vertex_count: self.vertex_count })
        }
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`DirectedWeightedGraph`] edge by edge, then call
/// [`build`](Self::build).
///
/// # Example
///
/// ```
/// use tc_core::VertexId;
/// use tc_graph::GraphBuilder;
///
/// let mut b = GraphBuilder::new(2);
/// let e = b.add_edge(VertexId(0), VertexId(1), 2.5).unwrap();
/// let g = b.build();
/// assert_eq!(g.edge_count(), 1);
/// assert_eq!(g.edge(e).unwrap().weight, 2.5);
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    vertex_count: usize,
    edges:        Vec<Edge>,
}

impl GraphBuilder {
    /// Start a graph with a fixed vertex set `0..vertex_count`.
    pub fn new(vertex_count: usize) -> Self {
        Self { vertex_count, edges: Vec::new() }
    }

    /// Pre-allocate for the expected number of edges.
    pub fn with_capacity(vertex_count: usize, edges: usize) -> Self {
        Self { vertex_count, edges: Vec::with_capacity(edges) }
    }

    /// Add a directed edge and return its id (sequential from 0).
    ///
    /// Fails if either endpoint is out of range or `weight` is negative or
    /// not finite.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: f64) -> GraphResult<EdgeId> {
        for vertex in [from, to] {
            if vertex.index() >= self.vertex_count {
                return Err(GraphError::VertexOutOfRange { vertex, vertex_count: self.vertex_count });
            }
        }
        let id = EdgeId::from_index(self.edges.len());
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight { edge: id, weight });
        }
        self.edges.push(Edge { from, to, weight });
        Ok(id)
    }

    pub fn vertex_count(&self) -> usize { self.vertex_count }
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Consume the builder and produce the CSR graph.
    ///
    /// Time complexity: O(V + E) (counting sort by source vertex).
    pub fn build(self) -> DirectedWeightedGraph {
        let vertex_count = self.vertex_count;

        let mut out_start = vec![0u32; vertex_count + 1];
        for e in &self.edges {
            out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=vertex_count {
            out_start[i] += out_start[i - 1];
        }
        debug_assert_eq!(out_start[vertex_count] as usize, self.edges.len());

        // Counting-sort placement keeps insertion order within each row.
        let mut cursor: Vec<u32> = out_start[..vertex_count].to_vec();
        let mut out_edge_ids = vec![EdgeId::INVALID; self.edges.len()];
        for (i, e) in self.edges.iter().enumerate() {
            let slot = &mut cursor[e.from.index()];
            out_edge_ids[*slot as usize] = EdgeId::from_index(i);
            *slot += 1;
        }

        DirectedWeightedGraph {
            vertex_count,
            edges: self.edges,
            out_start,
            out_edge_ids,
        }
    }
}

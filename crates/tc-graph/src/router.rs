//! Routing trait and default Dijkstra implementation.
//!
//! # Contract
//!
//! Given a graph with non-negative weights and a `(from, to)` pair, a
//! [`Router`] returns the total weight and the ordered edge ids of a
//! minimum-weight path, or [`GraphError::NoRoute`] when `to` is unreachable.
//! Ties must resolve the same way every time for a fixed graph.
//!
//! `tc-router` depends only on this contract, so an A* or contraction
//! hierarchy implementation can replace [`DijkstraRouter`] without touching
//! the itinerary code.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tc_core::{EdgeId, VertexId};

use crate::graph::DirectedWeightedGraph;
use crate::{GraphError, GraphResult};

// ── PathInfo ──────────────────────────────────────────────────────────────────

/// A minimum-weight path: edges in travel order plus their summed weight.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathInfo {
    pub weight: f64,
    pub edges:  Vec<EdgeId>,
}

impl PathInfo {
    /// The zero-weight path from a vertex to itself.
    pub fn trivial() -> Self {
        Self { weight: 0.0, edges: Vec::new() }
    }

    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
pub trait Router: Send + Sync {
    fn route(
        &self,
        graph: &DirectedWeightedGraph,
        from: VertexId,
        to: VertexId,
    ) -> GraphResult<PathInfo>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Single-pair Dijkstra over the CSR graph.
///
/// Stateless: each query allocates its own `O(V)` distance table, so one
/// router can serve any number of graphs.
#[derive(Debug, Default, Clone, Copy)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(
        &self,
        graph: &DirectedWeightedGraph,
        from: VertexId,
        to: VertexId,
    ) -> GraphResult<PathInfo> {
        dijkstra(graph, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Heap entry ordered by `(cost, vertex)`.  `f64::total_cmp` gives a total
/// order; weights are validated finite at insertion so NaN never appears.
#[derive(Copy, Clone, Debug)]
struct Candidate {
    cost:   f64,
    vertex: VertexId,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

fn dijkstra(graph: &DirectedWeightedGraph, from: VertexId, to: VertexId) -> GraphResult<PathInfo> {
    graph.check_vertex(from)?;
    graph.check_vertex(to)?;

    if from == to {
        return Ok(PathInfo::trivial());
    }

    let n = graph.vertex_count();
    // dist[v] = best known cost to reach v.
    let mut dist      = vec![f64::INFINITY; n];
    // prev_edge[v] = EdgeId that reached v; INVALID for unreached vertices.
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[from.index()] = 0.0;

    let mut heap: BinaryHeap<Reverse<Candidate>> = BinaryHeap::new();
    heap.push(Reverse(Candidate { cost: 0.0, vertex: from }));

    while let Some(Reverse(Candidate { cost, vertex })) = heap.pop() {
        if vertex == to {
            return Ok(reconstruct(graph, &prev_edge, from, to, cost));
        }

        // Skip stale heap entries.
        if cost > dist[vertex.index()] {
            continue;
        }

        for &edge_id in graph.out_edges(vertex) {
            let edge = &graph.edges()[edge_id.index()];
            let new_cost = cost + edge.weight;

            if new_cost < dist[edge.to.index()] {
                dist[edge.to.index()] = new_cost;
                prev_edge[edge.to.index()] = edge_id;
                heap.push(Reverse(Candidate { cost: new_cost, vertex: edge.to }));
            }
        }
    }

    Err(GraphError::NoRoute { from, to })
}

fn reconstruct(
    graph: &DirectedWeightedGraph,
    prev_edge: &[EdgeId],
    from: VertexId,
    to: VertexId,
    weight: f64,
) -> PathInfo {
    let mut edges = Vec::new();
    let mut cur = to;
    while cur != from {
        let e = prev_edge[cur.index()];
        if !e.is_valid() {
            break;
        }
        edges.push(e);
        cur = graph.edges()[e.index()].from;
    }
    edges.reverse();
    PathInfo { weight, edges }
}

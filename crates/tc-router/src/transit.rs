//! Transit graph construction.
//!
//! The graph is built once from a frozen [`Catalogue`] and never modified.
//! Edge metadata lives in a `Vec<EdgeTag>` indexed by the `EdgeId`s the
//! graph builder hands out, so the solver's edge list maps straight back to
//! waits and rides.

use tc_catalogue::Catalogue;
use tc_core::{BusId, EdgeId, RoutingSettings, StopId, VertexId};
use tc_graph::{DirectedWeightedGraph, GraphBuilder};

use crate::RouterResult;

// ── EdgeTag ───────────────────────────────────────────────────────────────────

/// What a transit-graph edge stands for.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EdgeTag {
    /// Boarding delay at `stop` (arrival → departure).
    Wait { stop: StopId },
    /// Staying aboard `bus` for `span_count` consecutive hops.
    Ride { bus: BusId, span_count: usize, time: f64 },
}

/// The vertex pair owned by one stop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StopVertices {
    pub arrival:   VertexId,
    pub departure: VertexId,
}

impl StopVertices {
    #[inline]
    pub fn of(stop: StopId) -> Self {
        Self { arrival: VertexId::arrival(stop), departure: VertexId::departure(stop) }
    }
}

// ── TransitGraph ──────────────────────────────────────────────────────────────

/// Immutable transit graph plus its per-edge tags.
#[derive(Debug)]
pub struct TransitGraph {
    graph:    DirectedWeightedGraph,
    tags:     Vec<EdgeTag>,
    settings: RoutingSettings,
}

impl TransitGraph {
    pub fn graph(&self) -> &DirectedWeightedGraph {
        &self.graph
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    /// Tag of `edge`, or `None` for an id outside this graph.
    #[inline]
    pub fn tag(&self, edge: EdgeId) -> Option<&EdgeTag> {
        self.tags.get(edge.index())
    }

    /// All tags, indexed by `EdgeId`.
    pub fn tags(&self) -> &[EdgeTag] {
        &self.tags
    }

    #[inline]
    pub fn vertices(&self, stop: StopId) -> StopVertices {
        StopVertices::of(stop)
    }

    /// Stop owning `vertex`, whether arrival or departure.
    #[inline]
    pub fn stop_of_vertex(&self, vertex: VertexId) -> StopId {
        vertex.stop()
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

// ── TransitGraphBuilder ───────────────────────────────────────────────────────

/// One-shot builder of a [`TransitGraph`] from a frozen catalogue.
pub struct TransitGraphBuilder<'a> {
    catalogue: &'a Catalogue,
    settings:  RoutingSettings,
}

impl<'a> TransitGraphBuilder<'a> {
    pub fn new(catalogue: &'a Catalogue, settings: RoutingSettings) -> Self {
        Self { catalogue, settings }
    }

    /// Build the graph.
    ///
    /// Produces `2 × stops` vertices, one wait edge per stop, and
    /// `n(n-1)/2` ride edges for a bus walk of length `n`.  Fails if the
    /// settings are invalid.
    pub fn build(self) -> RouterResult<TransitGraph> {
        self.settings.validate()?;

        let cat = self.catalogue;
        let vertex_count = cat.stops().len() * 2;
        let ride_edges: usize = cat
            .buses()
            .iter()
            .map(|b| b.stops.len() * b.stops.len().saturating_sub(1) / 2)
            .sum();

        let mut graph = GraphBuilder::with_capacity(vertex_count, cat.stops().len() + ride_edges);
        let mut tags = Vec::with_capacity(cat.stops().len() + ride_edges);

        // ── Wait edges ────────────────────────────────────────────────────
        let wait = self.settings.wait_minutes();
        for stop in cat.stops() {
            let v = StopVertices::of(stop.id);
            let edge = graph.add_edge(v.arrival, v.departure, wait)?;
            debug_assert_eq!(edge.index(), tags.len());
            tags.push(EdgeTag::Wait { stop: stop.id });
        }

        // ── Ride edges ────────────────────────────────────────────────────
        for bus in cat.buses() {
            let walk = &bus.stops;
            for i in 0..walk.len().saturating_sub(1) {
                let departure = VertexId::departure(walk[i]);
                let mut distance_m = 0.0;
                for j in i + 1..walk.len() {
                    distance_m += cat.distance(walk[j - 1], walk[j]);
                    let time = self.settings.travel_minutes(distance_m);
                    let edge = graph.add_edge(departure, VertexId::arrival(walk[j]), time)?;
                    debug_assert_eq!(edge.index(), tags.len());
                    tags.push(EdgeTag::Ride { bus: bus.id, span_count: j - i, time });
                }
            }
            log::debug!("bus {:?}: {} stops on walk", bus.name, walk.len());
        }

        let graph = graph.build();
        log::info!(
            "transit graph built: {} vertices, {} edges (wait {} min, velocity {} km/h)",
            graph.vertex_count(),
            graph.edge_count(),
            self.settings.bus_wait_time,
            self.settings.bus_velocity
        );

        Ok(TransitGraph { graph, tags, settings: self.settings })
    }
}

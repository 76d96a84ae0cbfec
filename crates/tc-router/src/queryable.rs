//! The query-phase catalogue: frozen entities plus their transit graph.

use tc_catalogue::{Catalogue, MutableCatalogue, RouteInfo, StopInfo};
use tc_core::RoutingSettings;
use tc_graph::{DijkstraRouter, Router};

use crate::{Itinerary, ItineraryResolver, RouterResult, TransitGraph, TransitGraphBuilder};

/// Frozen catalogue with a transit graph built from exactly its contents.
///
/// There is no way back to a mutable catalogue, so the graph cannot fall
/// out of date.
///
/// # Type parameter
///
/// `R` is the shortest-path engine, [`DijkstraRouter`] unless replaced via
/// [`with_router`](Self::with_router).
pub struct QueryableCatalogue<R: Router = DijkstraRouter> {
    catalogue: Catalogue,
    transit:   TransitGraph,
    router:    R,
}

impl QueryableCatalogue<DijkstraRouter> {
    pub fn new(catalogue: Catalogue, settings: RoutingSettings) -> RouterResult<Self> {
        Self::with_router(catalogue, settings, DijkstraRouter)
    }
}

impl<R: Router> QueryableCatalogue<R> {
    pub fn with_router(catalogue: Catalogue, settings: RoutingSettings, router: R) -> RouterResult<Self> {
        let transit = TransitGraphBuilder::new(&catalogue, settings).build()?;
        Ok(Self { catalogue, transit, router })
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn transit(&self) -> &TransitGraph {
        &self.transit
    }

    pub fn settings(&self) -> &RoutingSettings {
        self.transit.settings()
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    /// See [`Catalogue::route_info`].
    pub fn route_info(&self, bus_name: &str) -> Option<RouteInfo> {
        self.catalogue.route_info(bus_name)
    }

    /// See [`Catalogue::stop_info`].
    pub fn stop_info(&self, stop_name: &str) -> Option<StopInfo<'_>> {
        self.catalogue.stop_info(stop_name)
    }

    pub fn resolver(&self) -> ItineraryResolver<'_, R> {
        ItineraryResolver::new(&self.catalogue, &self.transit, &self.router)
    }

    /// See [`ItineraryResolver::build_route`].
    pub fn build_route(&self, from: &str, to: &str) -> Option<Itinerary<'_>> {
        self.resolver().build_route(from, to)
    }
}

// ── BuildGraph ────────────────────────────────────────────────────────────────

/// Move a catalogue into the query phase in one step.
pub trait BuildGraph {
    fn build_graph(self, settings: RoutingSettings) -> RouterResult<QueryableCatalogue>;
}

impl BuildGraph for Catalogue {
    fn build_graph(self, settings: RoutingSettings) -> RouterResult<QueryableCatalogue> {
        QueryableCatalogue::new(self, settings)
    }
}

impl BuildGraph for MutableCatalogue {
    fn build_graph(self, settings: RoutingSettings) -> RouterResult<QueryableCatalogue> {
        self.freeze().build_graph(settings)
    }
}

//! Build-phase and query-phase views of the catalogue.

use tc_core::{BusId, GeoPoint, StopId};

use crate::stats::{self, RouteInfo};
use crate::stop_index::{self, StopInfo};
use crate::{Bus, CatalogueError, CatalogueResult, DistanceModel, EntityStore, Stop};

// ── MutableCatalogue ──────────────────────────────────────────────────────────

/// The catalogue while it is being populated.
///
/// Expected call order: every [`add_stop`](Self::add_stop) first, then
/// distances and routes, then [`freeze`](Self::freeze).
#[derive(Debug, Default)]
pub struct MutableCatalogue {
    store:     EntityStore,
    distances: DistanceModel,
}

impl MutableCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`EntityStore::add_stop`].
    pub fn add_stop(&mut self, name: &str, position: GeoPoint) -> StopId {
        self.store.add_stop(name, position)
    }

    /// See [`EntityStore::add_route`].
    pub fn add_route<I, S>(&mut self, name: &str, stop_names: I, is_roundtrip: bool) -> CatalogueResult<BusId>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.store.add_route(name, stop_names, is_roundtrip)
    }

    /// Record the road distance `from → to` by stop name.  See
    /// [`DistanceModel::set`] for the mirroring rules.
    ///
    /// `meters` must be finite and non-negative; nothing is stored otherwise.
    pub fn set_distance(&mut self, from: &str, to: &str, meters: f64) -> CatalogueResult<()> {
        let from_id = self.resolve(from)?;
        let to_id = self.resolve(to)?;
        if !meters.is_finite() || meters < 0.0 {
            return Err(CatalogueError::InvalidDistance {
                from: from.to_owned(),
                to: to.to_owned(),
                meters,
            });
        }
        self.distances.set(from_id, to_id, meters);
        Ok(())
    }

    pub fn find_stop(&self, name: &str) -> Option<StopId> {
        self.store.find_stop(name)
    }

    pub fn find_route(&self, name: &str) -> Option<BusId> {
        self.store.find_route(name)
    }

    pub fn stop_count(&self) -> usize { self.store.stop_count() }
    pub fn bus_count(&self) -> usize { self.store.bus_count() }

    /// End the build phase.
    pub fn freeze(self) -> Catalogue {
        log::info!(
            "catalogue frozen: {} stops, {} buses, {} stored distances",
            self.store.stop_count(),
            self.store.bus_count(),
            self.distances.len()
        );
        Catalogue { store: self.store, distances: self.distances }
    }

    fn resolve(&self, name: &str) -> CatalogueResult<StopId> {
        self.store
            .find_stop(name)
            .ok_or_else(|| CatalogueError::UnknownStop(name.to_owned()))
    }
}

// ── Catalogue ─────────────────────────────────────────────────────────────────

/// A frozen, read-only catalogue.
///
/// Queries by name return `None` for unknown names; they never fail.
#[derive(Debug)]
pub struct Catalogue {
    store:     EntityStore,
    distances: DistanceModel,
}

impl Catalogue {
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn distances(&self) -> &DistanceModel {
        &self.distances
    }

    pub fn find_stop(&self, name: &str) -> Option<StopId> {
        self.store.find_stop(name)
    }

    pub fn find_route(&self, name: &str) -> Option<BusId> {
        self.store.find_route(name)
    }

    #[inline]
    pub fn stop(&self, id: StopId) -> &Stop {
        self.store.stop(id)
    }

    #[inline]
    pub fn bus(&self, id: BusId) -> &Bus {
        self.store.bus(id)
    }

    #[inline]
    pub fn stop_name(&self, id: StopId) -> &str {
        &self.store.stop(id).name
    }

    pub fn stops(&self) -> &[Stop] {
        self.store.stops()
    }

    pub fn buses(&self) -> &[Bus] {
        self.store.buses()
    }

    /// Road distance `from → to` in metres, with great-circle fallback.
    #[inline]
    pub fn distance(&self, from: StopId, to: StopId) -> f64 {
        self.distances.get(&self.store, from, to)
    }

    /// [`distance`](Self::distance) by stop name; `None` if either is unknown.
    pub fn distance_between(&self, from: &str, to: &str) -> Option<f64> {
        Some(self.distance(self.find_stop(from)?, self.find_stop(to)?))
    }

    /// Statistics for the route named `bus_name`.
    pub fn route_info(&self, bus_name: &str) -> Option<RouteInfo> {
        let bus = self.store.bus(self.store.find_route(bus_name)?);
        Some(stats::route_info(&self.store, &self.distances, bus))
    }

    /// Sorted bus names serving the stop named `stop_name`.
    pub fn stop_info(&self, stop_name: &str) -> Option<StopInfo<'_>> {
        let stop = self.store.stop(self.store.find_stop(stop_name)?);
        Some(stop_index::stop_info(&self.store, stop))
    }
}

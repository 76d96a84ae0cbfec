//! Canonical stop and bus records.
//!
//! # Storage
//!
//! Stops and buses live in append-only `Vec`s indexed by [`StopId`] /
//! [`BusId`].  Records are never removed or reordered, so an id issued once
//! resolves to the same record for the store's lifetime, and registration
//! order is recoverable from the id alone (the transit graph relies on
//! this to number its vertices).
//!
//! Name lookup goes through `FxHashMap<String, Id>` side indices: O(1) and
//! free of borrowed keys into the arenas.

use rustc_hash::{FxHashMap, FxHashSet};

use tc_core::{BusId, GeoPoint, StopId};

use crate::{CatalogueError, CatalogueResult};

// ── Records ───────────────────────────────────────────────────────────────────

/// A named stop.
#[derive(Debug, Clone)]
pub struct Stop {
    pub id:       StopId,
    pub name:     String,
    pub position: GeoPoint,
    /// Buses visiting this stop.  Grows as routes are added; never shrinks.
    pub buses:    FxHashSet<BusId>,
}

/// A bus route, stored as a closed walk over stops.
///
/// A non-roundtrip route arrives already expanded to
/// `forward ++ reverse(forward[..n-1])`, so `stops` always describes the full
/// trip the bus drives.
#[derive(Debug, Clone)]
pub struct Bus {
    pub id:           BusId,
    pub name:         String,
    pub stops:        Vec<StopId>,
    pub is_roundtrip: bool,
}

// ── EntityStore ───────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct EntityStore {
    stops:      Vec<Stop>,
    buses:      Vec<Bus>,
    stop_index: FxHashMap<String, StopId>,
    bus_index:  FxHashMap<String, BusId>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stop and return its id.
    ///
    /// Idempotent by name: if `name` already exists the existing id is
    /// returned and `position` is ignored (first write wins).
    pub fn add_stop(&mut self, name: &str, position: GeoPoint) -> StopId {
        if let Some(&id) = self.stop_index.get(name) {
            let existing = self.stops[id.index()].position;
            if existing != position {
                log::warn!(
                    "stop {name:?} already registered at {existing}; ignoring new position {position}"
                );
            } else {
                log::debug!("stop {name:?} registered twice");
            }
            return id;
        }

        let id = StopId::from_index(self.stops.len());
        self.stops.push(Stop {
            id,
            name: name.to_owned(),
            position,
            buses: FxHashSet::default(),
        });
        self.stop_index.insert(name.to_owned(), id);
        id
    }

    /// Register a route over already-registered stops and return its id.
    ///
    /// Idempotent by name: an existing route is returned unchanged.
    /// Otherwise every stop name is resolved before anything is written, so
    /// an [`CatalogueError::UnknownStop`] leaves the store untouched.  On
    /// success the bus is added to the back-reference set of every stop it
    /// visits.
    pub fn add_route<I, S>(&mut self, name: &str, stop_names: I, is_roundtrip: bool) -> CatalogueResult<BusId>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Some(&id) = self.bus_index.get(name) {
            log::debug!("bus {name:?} registered twice; keeping the first definition");
            return Ok(id);
        }

        let stops = stop_names
            .into_iter()
            .map(|s| {
                let s = s.as_ref();
                self.find_stop(s)
                    .ok_or_else(|| CatalogueError::UnknownStop(s.to_owned()))
            })
            .collect::<CatalogueResult<Vec<StopId>>>()?;

        let id = BusId::from_index(self.buses.len());
        for stop in &stops {
            self.stops[stop.index()].buses.insert(id);
        }
        self.buses.push(Bus {
            id,
            name: name.to_owned(),
            stops,
            is_roundtrip,
        });
        self.bus_index.insert(name.to_owned(), id);
        Ok(id)
    }

    #[inline]
    pub fn find_stop(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    #[inline]
    pub fn find_route(&self, name: &str) -> Option<BusId> {
        self.bus_index.get(name).copied()
    }

    /// The record for `id`.  Ids are only issued by this store, so a foreign
    /// id is a caller bug and panics on the index.
    #[inline]
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    #[inline]
    pub fn bus(&self, id: BusId) -> &Bus {
        &self.buses[id.index()]
    }

    /// All stops in registration order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All buses in registration order.
    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    pub fn stop_count(&self) -> usize { self.stops.len() }
    pub fn bus_count(&self) -> usize { self.buses.len() }
}

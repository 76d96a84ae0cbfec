//! Directed road distances between stops.
//!
//! Road distances are not symmetric in general (one-way streets, loops), so
//! each `(from, to)` slot is stored separately.  Input usually lists a pair
//! once, so [`DistanceModel::set`] also fills the reverse slot when it is
//! empty.  The slot remembers whether its value was given or mirrored:
//!
//! | Existing forward slot | `set(from, to, d)` writes forward? |
//! |-----------------------|------------------------------------|
//! | empty                 | yes                                |
//! | mirrored              | yes (explicit beats mirrored)      |
//! | explicit              | no (first explicit value wins)     |
//!
//! The reverse slot is written only when it is empty.
//!
//! Pairs with no stored value fall back to the great-circle distance between
//! the two stops.

use rustc_hash::FxHashMap;

use tc_core::StopId;

use crate::EntityStore;

/// How a stored distance came to be.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DistanceSource {
    Explicit,
    Mirrored,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoadDistance {
    pub meters: f64,
    pub source: DistanceSource,
}

#[derive(Debug, Default)]
pub struct DistanceModel {
    distances: FxHashMap<(StopId, StopId), RoadDistance>,
}

impl DistanceModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the road distance `from → to` in metres.  `meters` is taken
    /// as given; [`MutableCatalogue::set_distance`](crate::MutableCatalogue::set_distance)
    /// rejects negative and non-finite values before they get here.
    pub fn set(&mut self, from: StopId, to: StopId, meters: f64) {
        match self.distances.get(&(from, to)) {
            Some(existing) if existing.source == DistanceSource::Explicit => {
                if existing.meters != meters {
                    log::warn!(
                        "distance {from} -> {to} already set to {} m; ignoring {meters} m",
                        existing.meters
                    );
                }
            }
            _ => {
                self.distances.insert(
                    (from, to),
                    RoadDistance { meters, source: DistanceSource::Explicit },
                );
            }
        }

        self.distances
            .entry((to, from))
            .or_insert(RoadDistance { meters, source: DistanceSource::Mirrored });
    }

    /// The stored distance for `from → to`, explicit or mirrored.
    #[inline]
    pub fn stored(&self, from: StopId, to: StopId) -> Option<RoadDistance> {
        self.distances.get(&(from, to)).copied()
    }

    /// Road distance `from → to` in metres, falling back to the great-circle
    /// distance between the stops' positions.
    pub fn get(&self, stops: &EntityStore, from: StopId, to: StopId) -> f64 {
        match self.stored(from, to) {
            Some(d) => d.meters,
            None => stops.stop(from).position.distance_m(stops.stop(to).position),
        }
    }

    /// Number of stored directed slots.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

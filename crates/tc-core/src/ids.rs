//! Strongly typed index wrappers.
//!
//! Stops and buses live in append-only `Vec`s inside the catalogue, so an id
//! handed out once stays valid for the catalogue's lifetime.  Graph vertices
//! and edges are dense indices assigned by the graph builder.
//!
//! All ids are `Copy + Ord + Hash`.  The inner integer is `pub`; prefer
//! `.index()` when indexing a `Vec`.

use std::fmt;

/// Generate a typed id wrapper around `u32`.
///
/// Ids are only minted by the arena or graph builder that owns the storage,
/// via `from_index`, so there are no integer conversions in the public API.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Sentinel for "no id" in dense per-vertex tables.
            pub const INVALID: $name = $name(u32::MAX);

            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Id of the record at `index` in its owning `Vec`.
            #[inline(always)]
            pub fn from_index(index: usize) -> Self {
                debug_assert!(index < u32::MAX as usize, "{} overflow", stringify!($name));
                $name(index as u32)
            }

            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Position of a stop in registration order.
    pub struct StopId;
}

typed_id! {
    /// Position of a bus route in registration order.
    pub struct BusId;
}

typed_id! {
    /// Vertex of the transit graph.  Stop `k` owns vertices `2k` (arrival)
    /// and `2k + 1` (departure).
    pub struct VertexId;
}

typed_id! {
    /// Edge of a directed weighted graph, numbered in insertion order.
    pub struct EdgeId;
}

impl VertexId {
    /// Arrival vertex of `stop`.
    #[inline]
    pub fn arrival(stop: StopId) -> VertexId {
        VertexId(stop.0 * 2)
    }

    /// Departure vertex of `stop`.
    #[inline]
    pub fn departure(stop: StopId) -> VertexId {
        VertexId(stop.0 * 2 + 1)
    }

    /// The stop owning this vertex, for either half of the pair.
    #[inline]
    pub fn stop(self) -> StopId {
        StopId(self.0 / 2)
    }

    #[inline]
    pub fn is_arrival(self) -> bool {
        self.0 % 2 == 0
    }
}

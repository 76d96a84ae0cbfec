//! Aggregate statistics for one bus route.

use rustc_hash::FxHashSet;

use crate::{Bus, DistanceModel, EntityStore};

/// Statistics of a stored route (its full closed walk).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteInfo {
    /// Length of the stored walk, repeats included.
    pub stop_count:        usize,
    /// Distinct stops on the walk.
    pub unique_stop_count: usize,
    /// Sum of road distances over consecutive stops, metres.
    pub route_length:      f64,
    /// `route_length` divided by the great-circle length of the same walk.
    /// 1.0 for a geometrically direct route, and for degenerate routes.
    pub curvature:         f64,
}

/// Compute [`RouteInfo`] for `bus`.  Nothing is cached; each call walks the
/// route again.
pub fn route_info(stops: &EntityStore, distances: &DistanceModel, bus: &Bus) -> RouteInfo {
    let walk = &bus.stops;

    let unique_stop_count = walk.iter().collect::<FxHashSet<_>>().len();

    let mut route_length = 0.0;
    let mut geo_length = 0.0;
    for pair in walk.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        route_length += distances.get(stops, from, to);
        geo_length += stops.stop(from).position.distance_m(stops.stop(to).position);
    }

    // Empty, single-stop and zero-extent walks have nothing to compare.
    let curvature = if geo_length > 0.0 { route_length / geo_length } else { 1.0 };

    RouteInfo {
        stop_count: walk.len(),
        unique_stop_count,
        route_length,
        curvature,
    }
}

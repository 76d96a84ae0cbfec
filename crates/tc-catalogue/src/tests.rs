//! Unit tests for tc-catalogue.

#[cfg(test)]
mod helpers {
    use tc_core::GeoPoint;

    pub const EPS: f64 = 1e-6;

    pub fn p1() -> GeoPoint { GeoPoint::new(55.611087, 37.208290) }
    pub fn p2() -> GeoPoint { GeoPoint::new(55.595884, 37.209755) }
    pub fn p3() -> GeoPoint { GeoPoint::new(55.632761, 37.333324) }
}

// ── EntityStore ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod store {
    use tc_core::{BusId, GeoPoint, StopId};
    use super::helpers::{p1, p2, p3};
    use crate::{CatalogueError, EntityStore};

    #[test]
    fn add_and_find_stop() {
        let mut s = EntityStore::new();
        let id = s.add_stop("stop_name", p1());
        assert_eq!(id, StopId(0));
        assert_eq!(s.find_stop("stop_name"), Some(id));
        assert_eq!(s.stop(id).name, "stop_name");
        assert_eq!(s.stop(id).position, p1());
        assert_eq!(s.find_stop("stop_name2"), None);
    }

    #[test]
    fn add_stop_first_write_wins() {
        let mut s = EntityStore::new();
        let a = s.add_stop("stop1", p1());
        let b = s.add_stop("stop1", p3());
        assert_eq!(a, b);
        assert_eq!(s.stop_count(), 1);
        assert_eq!(s.stop(a).position, p1());
    }

    #[test]
    fn ids_follow_registration_order() {
        let mut s = EntityStore::new();
        let a = s.add_stop("a", p1());
        let b = s.add_stop("b", p2());
        let c = s.add_stop("c", p3());
        assert_eq!([a, b, c], [StopId(0), StopId(1), StopId(2)]);
        let names: Vec<_> = s.stops().iter().map(|st| st.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn add_route_resolves_stops_and_back_references() {
        let mut s = EntityStore::new();
        let a = s.add_stop("stop1", p1());
        let b = s.add_stop("stop2", p2());
        let c = s.add_stop("stop3", p3());
        let bus = s.add_route("Bus", ["stop1", "stop2", "stop3"], true).unwrap();
        assert_eq!(bus, BusId(0));
        assert_eq!(s.find_route("Bus"), Some(bus));
        assert_eq!(s.bus(bus).stops, vec![a, b, c]);
        assert!(s.bus(bus).is_roundtrip);
        for stop in [a, b, c] {
            assert!(s.stop(stop).buses.contains(&bus));
        }
    }

    #[test]
    fn add_route_is_idempotent_by_name() {
        let mut s = EntityStore::new();
        s.add_stop("a", p1());
        s.add_stop("b", p2());
        let first = s.add_route("1", ["a", "b"], true).unwrap();
        let second = s.add_route("1", ["b", "a", "b"], false).unwrap();
        assert_eq!(first, second);
        assert_eq!(s.bus_count(), 1);
        assert_eq!(s.bus(first).stops.len(), 2);
    }

    #[test]
    fn add_route_unknown_stop_changes_nothing() {
        let mut s = EntityStore::new();
        let a = s.add_stop("a", p1());
        let err = s.add_route("1", ["a", "ghost"], true).unwrap_err();
        assert!(matches!(err, CatalogueError::UnknownStop(ref n) if n == "ghost"));
        assert_eq!(s.bus_count(), 0);
        assert!(s.find_route("1").is_none());
        assert!(s.stop(a).buses.is_empty());
    }

    #[test]
    fn repeated_stop_registers_bus_once() {
        let mut s = EntityStore::new();
        let a = s.add_stop("a", GeoPoint::new(0.0, 0.0));
        s.add_stop("b", GeoPoint::new(0.0, 1.0));
        s.add_route("1", ["a", "b", "a"], true).unwrap();
        assert_eq!(s.stop(a).buses.len(), 1);
    }
}

// ── DistanceModel ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod distance {
    use super::helpers::{p1, p2, p3, EPS};
    use crate::{DistanceModel, DistanceSource, EntityStore};

    fn three_stops() -> (EntityStore, [tc_core::StopId; 3]) {
        let mut s = EntityStore::new();
        let a = s.add_stop("a", p1());
        let b = s.add_stop("b", p2());
        let c = s.add_stop("c", p3());
        (s, [a, b, c])
    }

    #[test]
    fn forward_value_is_mirrored() {
        let (s, [a, b, _]) = three_stops();
        let mut d = DistanceModel::new();
        d.set(a, b, 1_200.0);
        assert_eq!(d.get(&s, a, b), 1_200.0);
        assert_eq!(d.get(&s, b, a), 1_200.0);
        assert_eq!(d.stored(b, a).unwrap().source, DistanceSource::Mirrored);
    }

    #[test]
    fn explicit_reverse_beats_mirror() {
        let (s, [a, b, _]) = three_stops();
        let mut d = DistanceModel::new();
        d.set(a, b, 1_200.0);
        d.set(b, a, 1_500.0);
        assert_eq!(d.get(&s, a, b), 1_200.0);
        assert_eq!(d.get(&s, b, a), 1_500.0);
    }

    #[test]
    fn explicit_reverse_set_first_is_kept() {
        let (s, [a, b, _]) = three_stops();
        let mut d = DistanceModel::new();
        d.set(b, a, 1_500.0);
        d.set(a, b, 1_200.0);
        assert_eq!(d.get(&s, a, b), 1_200.0);
        assert_eq!(d.get(&s, b, a), 1_500.0);
    }

    #[test]
    fn first_explicit_value_per_direction_wins() {
        let (s, [a, b, _]) = three_stops();
        let mut d = DistanceModel::new();
        d.set(a, b, 1_000.0);
        d.set(a, b, 9_999.0);
        assert_eq!(d.get(&s, a, b), 1_000.0);
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn missing_pair_falls_back_to_great_circle() {
        let (s, [a, b, c]) = three_stops();
        let mut d = DistanceModel::new();
        d.set(a, b, 1_000.0);
        assert!(d.stored(a, c).is_none());
        assert!((d.get(&s, a, c) - p1().distance_m(p3())).abs() < EPS);
        assert!((d.get(&s, c, b) - p3().distance_m(p2())).abs() < EPS);
    }

    #[test]
    fn self_distance_can_be_set() {
        let (s, [a, ..]) = three_stops();
        let mut d = DistanceModel::new();
        assert_eq!(d.get(&s, a, a), 0.0);
        d.set(a, a, 300.0);
        assert_eq!(d.get(&s, a, a), 300.0);
    }
}

// ── RouteStats ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stats {
    use tc_core::GeoPoint;
    use super::helpers::{p1, p2, p3, EPS};
    use crate::MutableCatalogue;

    #[test]
    fn unknown_route_is_none() {
        let cat = MutableCatalogue::new().freeze();
        assert!(cat.route_info("750").is_none());
    }

    #[test]
    fn empty_route() {
        let mut cat = MutableCatalogue::new();
        cat.add_route("empty", Vec::<&str>::new(), true).unwrap();
        let info = cat.freeze().route_info("empty").unwrap();
        assert_eq!(info.stop_count, 0);
        assert_eq!(info.unique_stop_count, 0);
        assert_eq!(info.route_length, 0.0);
        assert_eq!(info.curvature, 1.0);
    }

    #[test]
    fn single_stop_route() {
        let mut cat = MutableCatalogue::new();
        cat.add_stop("only", p1());
        cat.add_route("solo", ["only"], true).unwrap();
        let info = cat.freeze().route_info("solo").unwrap();
        assert_eq!(info.stop_count, 1);
        assert_eq!(info.unique_stop_count, 1);
        assert_eq!(info.route_length, 0.0);
        assert_eq!(info.curvature, 1.0);
    }

    #[test]
    fn geographic_fallback_gives_unit_curvature() {
        let mut cat = MutableCatalogue::new();
        cat.add_stop("stop1", p1());
        cat.add_stop("stop2", p2());
        cat.add_stop("stop3", p3());
        cat.add_route("Bus", ["stop1", "stop2", "stop3"], true).unwrap();
        let info = cat.freeze().route_info("Bus").unwrap();

        let expected = p1().distance_m(p2()) + p2().distance_m(p3());
        assert_eq!(info.stop_count, 3);
        assert_eq!(info.unique_stop_count, 3);
        assert!((info.route_length - expected).abs() < EPS);
        assert!((info.curvature - 1.0).abs() < EPS);
    }

    #[test]
    fn unique_stops_count_names_not_positions() {
        let mut cat = MutableCatalogue::new();
        cat.add_stop("stop1", p1());
        cat.add_stop("stop1", p1());
        cat.add_stop("stop2", p3());
        cat.add_route("Bus", ["stop1", "stop1", "stop2"], true).unwrap();
        let info = cat.freeze().route_info("Bus").unwrap();

        assert_eq!(info.stop_count, 3);
        assert_eq!(info.unique_stop_count, 2);
        // stop1 → stop1 contributes zero.
        assert!((info.route_length - p1().distance_m(p3())).abs() < EPS);
    }

    #[test]
    fn road_distances_and_curvature() {
        let mut cat = MutableCatalogue::new();
        cat.add_stop("a", GeoPoint::new(55.0, 37.0));
        cat.add_stop("b", GeoPoint::new(55.0, 37.01));
        cat.set_distance("a", "b", 1_000.0).unwrap();
        cat.set_distance("b", "a", 1_100.0).unwrap();
        // Non-roundtrip a - b, expanded by the caller.
        cat.add_route("1", ["a", "b", "a"], false).unwrap();
        let cat = cat.freeze();
        let info = cat.route_info("1").unwrap();

        let geo = 2.0 * GeoPoint::new(55.0, 37.0).distance_m(GeoPoint::new(55.0, 37.01));
        assert_eq!(info.stop_count, 3);
        assert_eq!(info.unique_stop_count, 2);
        assert!((info.route_length - 2_100.0).abs() < EPS);
        assert!((info.curvature - 2_100.0 / geo).abs() < EPS);
        assert!(info.curvature > 1.0);
    }

    #[test]
    fn straight_line_with_accurate_roads() {
        let a = GeoPoint::new(10.0, 20.0);
        let b = GeoPoint::new(10.1, 20.0);
        let c = GeoPoint::new(10.2, 20.0);
        let mut cat = MutableCatalogue::new();
        cat.add_stop("a", a);
        cat.add_stop("b", b);
        cat.add_stop("c", c);
        cat.set_distance("a", "b", a.distance_m(b)).unwrap();
        cat.set_distance("b", "c", b.distance_m(c)).unwrap();
        cat.add_route("line", ["a", "b", "c"], true).unwrap();
        let info = cat.freeze().route_info("line").unwrap();
        assert!((info.curvature - 1.0).abs() < EPS);
    }

    #[test]
    fn coincident_stops_guard_zero_geography() {
        let mut cat = MutableCatalogue::new();
        cat.add_stop("a", GeoPoint::new(0.0, 0.0));
        cat.add_stop("b", GeoPoint::new(0.0, 0.0));
        cat.set_distance("a", "b", 500.0).unwrap();
        cat.add_route("1", ["a", "b"], true).unwrap();
        let info = cat.freeze().route_info("1").unwrap();
        assert_eq!(info.route_length, 500.0);
        assert_eq!(info.curvature, 1.0);
    }
}

// ── StopIndex ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stop_index {
    use super::helpers::{p1, p2};
    use crate::MutableCatalogue;

    #[test]
    fn unknown_stop_is_none() {
        let cat = MutableCatalogue::new().freeze();
        assert!(cat.stop_info("nowhere").is_none());
    }

    #[test]
    fn stop_without_buses_is_empty() {
        let mut cat = MutableCatalogue::new();
        cat.add_stop("lonely", p1());
        let cat = cat.freeze();
        let info = cat.stop_info("lonely").unwrap();
        assert!(info.is_empty());
    }

    #[test]
    fn buses_sorted_and_deduplicated() {
        let mut cat = MutableCatalogue::new();
        cat.add_stop("x", p1());
        cat.add_stop("y", p2());
        cat.add_route("B2", ["x", "y", "x"], false).unwrap();
        cat.add_route("B1", ["x", "y"], true).unwrap();
        cat.add_route("B3", ["y", "x", "x"], true).unwrap();
        let cat = cat.freeze();
        assert_eq!(cat.stop_info("x").unwrap().buses, ["B1", "B2", "B3"]);
    }

    #[test]
    fn byte_wise_order() {
        let mut cat = MutableCatalogue::new();
        cat.add_stop("x", p1());
        for name in ["b", "B", "10", "9", "a"] {
            cat.add_route(name, ["x"], true).unwrap();
        }
        let cat = cat.freeze();
        assert_eq!(cat.stop_info("x").unwrap().buses, ["10", "9", "B", "a", "b"]);
    }
}

// ── Catalogue ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod catalogue {
    use tc_core::GeoPoint;
    use super::helpers::{p1, p2, EPS};
    use crate::{CatalogueError, MutableCatalogue};

    #[test]
    fn set_distance_requires_known_stops() {
        let mut cat = MutableCatalogue::new();
        cat.add_stop("a", p1());
        let err = cat.set_distance("a", "b", 10.0).unwrap_err();
        assert!(matches!(err, CatalogueError::UnknownStop(ref n) if n == "b"));
    }

    #[test]
    fn set_distance_rejects_bad_meters() {
        let mut cat = MutableCatalogue::new();
        cat.add_stop("a", p1());
        cat.add_stop("b", p2());
        for meters in [-5.0, f64::NAN, f64::INFINITY] {
            let err = cat.set_distance("a", "b", meters).unwrap_err();
            assert!(
                matches!(err, CatalogueError::InvalidDistance { ref from, ref to, .. } if from == "a" && to == "b"),
                "got {err:?}"
            );
        }
        cat.set_distance("a", "b", 0.0).unwrap();
        let cat = cat.freeze();
        assert_eq!(cat.distance_between("a", "b"), Some(0.0));
        assert_eq!(cat.distance_between("b", "a"), Some(0.0));
    }

    #[test]
    fn antipodal_route_has_finite_stats() {
        // The haversine term rounds to just above 1.0 for this pair.
        let mut cat = MutableCatalogue::new();
        cat.add_stop("x", GeoPoint::new(-66.468_354_430_379_75, -179.876_543_3));
        cat.add_stop("y", GeoPoint::new(66.468_354_430_379_75, -359.876_543_3));
        cat.add_route("1", ["x", "y"], true).unwrap();
        let cat = cat.freeze();

        let info = cat.route_info("1").unwrap();
        let half = std::f64::consts::PI * GeoPoint::EARTH_RADIUS_M;
        assert!(info.route_length.is_finite());
        assert!((info.route_length - half).abs() < 1.0);
        assert!((info.curvature - 1.0).abs() < EPS);
    }

    #[test]
    fn distance_between_by_name() {
        let mut cat = MutableCatalogue::new();
        cat.add_stop("a", p1());
        cat.add_stop("b", p2());
        cat.set_distance("a", "b", 3_900.0).unwrap();
        let cat = cat.freeze();
        assert_eq!(cat.distance_between("a", "b"), Some(3_900.0));
        assert_eq!(cat.distance_between("b", "a"), Some(3_900.0));
        assert!(cat.distance_between("a", "zzz").is_none());
    }

    #[test]
    fn unset_distance_matches_great_circle() {
        let mut cat = MutableCatalogue::new();
        cat.add_stop("a", p1());
        cat.add_stop("b", p2());
        let cat = cat.freeze();
        let d = cat.distance_between("a", "b").unwrap();
        assert!((d - p1().distance_m(p2())).abs() < EPS);
    }

    #[test]
    fn freeze_keeps_everything() {
        let mut cat = MutableCatalogue::new();
        cat.add_stop("a", p1());
        cat.add_stop("b", p2());
        cat.add_route("1", ["a", "b"], true).unwrap();
        assert_eq!(cat.stop_count(), 2);
        assert_eq!(cat.bus_count(), 1);
        let cat = cat.freeze();
        assert_eq!(cat.stops().len(), 2);
        assert_eq!(cat.buses().len(), 1);
        assert_eq!(cat.bus(cat.find_route("1").unwrap()).name, "1");
    }

    #[test]
    fn enumeration_follows_registration_order() {
        let mut cat = MutableCatalogue::new();
        for name in ["c", "a", "b"] {
            cat.add_stop(name, p1());
        }
        let cat = cat.freeze();
        let names: Vec<&str> = cat.stops().iter().map(|s| cat.stop_name(s.id)).collect();
        assert_eq!(names, ["c", "a", "b"]);
        assert_eq!(cat.find_stop("b").unwrap().index(), 2);
    }
}

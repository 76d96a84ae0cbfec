//! Unit tests for tc-core primitives.

#[cfg(test)]
mod ids {
    use crate::{BusId, EdgeId, StopId, VertexId};

    #[test]
    fn index_roundtrip() {
        let id = StopId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(StopId::from_index(42), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(StopId::INVALID.0, u32::MAX);
        assert_eq!(BusId::INVALID.0, u32::MAX);
        assert!(!EdgeId::INVALID.is_valid());
        assert!(EdgeId::from_index(0).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(BusId(7).to_string(), "BusId(7)");
    }

    #[test]
    fn vertex_pairing() {
        let stop = StopId(3);
        let arrival = VertexId::arrival(stop);
        let departure = VertexId::departure(stop);
        assert_eq!(arrival, VertexId(6));
        assert_eq!(departure, VertexId(7));
        assert!(arrival.is_arrival());
        assert!(!departure.is_arrival());
        assert_eq!(arrival.stop(), stop);
        assert_eq!(departure.stop(), stop);
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(55.611087, 37.20829);
        assert_eq!(p.distance_m(p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.2 km
        let a = GeoPoint::new(55.0, 37.0);
        let b = GeoPoint::new(56.0, 37.0);
        let d = a.distance_m(b);
        assert!((d - 111_194.9).abs() < 1.0, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(55.611087, 37.20829);
        let b = GeoPoint::new(55.595884, 37.209755);
        assert!((a.distance_m(b) - b.distance_m(a)).abs() < 1e-9);
    }

    #[test]
    fn collinear_points_add_up() {
        // Points along one meridian: the legs sum to the whole.
        let a = GeoPoint::new(10.0, 20.0);
        let b = GeoPoint::new(10.5, 20.0);
        let c = GeoPoint::new(11.0, 20.0);
        let parts = a.distance_m(b) + b.distance_m(c);
        assert!((parts - a.distance_m(c)).abs() < 1e-3);
    }
}

#[cfg(test)]
mod antipodes {
    use std::f64::consts::PI;

    use crate::GeoPoint;

    #[test]
    fn antipodal_pairs_are_half_the_circumference() {
        let half = PI * GeoPoint::EARTH_RADIUS_M;
        for i in 0..80 {
            for j in 0..100 {
                let lat = -89.0 + 178.0 * f64::from(i) / 79.0;
                let lng = -180.0 + 3.6 * f64::from(j) + 0.123_456_7;
                let a = GeoPoint::new(lat, lng);
                let b = GeoPoint::new(-lat, lng - 180.0);
                let d = a.distance_m(b);
                assert!(d.is_finite(), "{a} -> {b} gave {d}");
                assert!((d - half).abs() < 1.0, "{a} -> {b} gave {d}");
            }
        }
    }

    #[test]
    fn poles() {
        let d = GeoPoint::new(90.0, 0.0).distance_m(GeoPoint::new(-90.0, 0.0));
        assert!((d - PI * GeoPoint::EARTH_RADIUS_M).abs() < 1e-6);
    }
}

#[cfg(test)]
mod settings {
    use crate::RoutingSettings;

    #[test]
    fn travel_minutes_at_forty_kmh() {
        let s = RoutingSettings::new(6, 40.0);
        // 2 km at 40 km/h = 3 minutes
        assert!((s.travel_minutes(2_000.0) - 3.0).abs() < 1e-12);
        assert_eq!(s.wait_minutes(), 6.0);
    }

    #[test]
    fn validate_rejects_bad_velocity() {
        assert!(RoutingSettings::new(1, 30.0).validate().is_ok());
        assert!(RoutingSettings::new(1, 0.0).validate().is_err());
        assert!(RoutingSettings::new(1, -5.0).validate().is_err());
        assert!(RoutingSettings::new(1, f64::NAN).validate().is_err());
        assert!(RoutingSettings::new(1, f64::INFINITY).validate().is_err());
    }
}

//! Unit tests for tc-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, RouteId, StopId, VertexId};

    #[test]
    fn index_roundtrip() {
        let id = StopId::from_index(42);
        assert_eq!(id, StopId(42));
        assert_eq!(id.index(), 42);
        assert_eq!(usize::from(EdgeId(7)), 7);
    }

    #[test]
    fn ordering() {
        assert!(VertexId(0) < VertexId(1));
        assert!(RouteId(100) > RouteId(99));
    }

    #[test]
    fn display() {
        assert_eq!(StopId(3).to_string(), "stop#3");
        assert_eq!(EdgeId(11).to_string(), "edge#11");
    }
}

#[cfg(test)]
mod geo {
    use approx::assert_abs_diff_eq;

    use crate::{CoreError, GeoPoint};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(55.611087, 37.20829);
        assert_eq!(p.distance_m(p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        assert_abs_diff_eq!(a.distance_m(b), 111_195.0, epsilon = 1.0);
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(55.595884, 37.209755);
        let b = GeoPoint::new(55.632761, 37.333324);
        assert_abs_diff_eq!(a.distance_m(b), b.distance_m(a), epsilon = 1e-6);
    }

    #[test]
    fn hundredth_degree_of_longitude_at_equator() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 0.01);
        assert_eq!(a.distance_m(b).round(), 1112.0);
    }

    #[test]
    fn checked_rejects_out_of_range() {
        assert!(GeoPoint::checked(45.0, 120.0).is_ok());
        assert!(matches!(
            GeoPoint::checked(91.0, 0.0),
            Err(CoreError::InvalidCoordinates { .. })
        ));
        assert!(GeoPoint::checked(0.0, f64::NAN).is_err());
    }

    #[test]
    fn default_is_origin() {
        assert_eq!(GeoPoint::default(), GeoPoint::new(0.0, 0.0));
    }
}

//! Unit tests for sr-core primitives.

#[cfg(test)]
mod ids {
    use crate::{IntersectionId, SegmentId, StreetId};

    #[test]
    fn index_roundtrip() {
        let id = IntersectionId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(IntersectionId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(SegmentId(0) < SegmentId(1));
        assert!(StreetId(100) > StreetId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(IntersectionId::INVALID.0, u32::MAX);
        assert_eq!(SegmentId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(IntersectionId(7).to_string(), "IntersectionId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::geo::{angle_at_shared_point, distance_m, polygon_area_m2};
    use crate::{GeoPoint, Projection};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(43.6629, -79.3957);
        assert!(distance_m(p, p) < 0.01);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(43.0, -79.0);
        let b = GeoPoint::new(43.01, -79.02);
        assert!((distance_m(a, b) - distance_m(b, a)).abs() < 1e-9);
    }

    #[test]
    fn one_degree_latitude_is_about_111km() {
        let a = GeoPoint::new(43.0, -79.0);
        let b = GeoPoint::new(44.0, -79.0);
        let d = distance_m(a, b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn angle_straight_line_is_zero() {
        // Shared point between (-1,0)->(0,0) and (0,0)->(1,0): no turn.
        let far1 = GeoPoint::new(0.0, -1.0);
        let shared = GeoPoint::new(0.0, 0.0);
        let far2 = GeoPoint::new(0.0, 1.0);
        let angle = angle_at_shared_point(shared, far1, far2).unwrap();
        assert!(angle.abs() < 1e-6, "got {angle}");
    }

    #[test]
    fn angle_right_turn_is_half_pi() {
        let far1 = GeoPoint::new(0.0, -1.0);
        let shared = GeoPoint::new(0.0, 0.0);
        let far2 = GeoPoint::new(1.0, 0.0);
        let angle = angle_at_shared_point(shared, far1, far2).unwrap();
        assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 0.05, "got {angle}");
    }

    #[test]
    fn angle_degenerate_returns_none() {
        let p = GeoPoint::new(1.0, 1.0);
        assert!(angle_at_shared_point(p, p, GeoPoint::new(2.0, 2.0)).is_none());
    }

    #[test]
    fn square_area_matches_projected_expectation() {
        let square = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(1.0, 0.0),
            GeoPoint::new(0.0, 0.0),
        ];
        let proj = Projection::from_bounds(0.0, 1.0);
        let area = polygon_area_m2(&proj, &square).unwrap();
        let expected = 111_000.0_f64 * 0.5f64.to_radians().cos() * 111_000.0;
        assert!((area - expected).abs() / expected < 0.02, "got {area}, expected ~{expected}");
    }

    #[test]
    fn open_polygon_returns_none() {
        let open = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
        ];
        let proj = Projection::from_bounds(0.0, 1.0);
        assert!(polygon_area_m2(&proj, &open).is_none());
    }

    #[test]
    fn fewer_than_four_points_returns_none() {
        let proj = Projection::from_bounds(0.0, 1.0);
        assert!(polygon_area_m2(&proj, &[GeoPoint::new(0.0, 0.0)]).is_none());
    }
}

#[cfg(test)]
mod rng {
    use crate::PlannerRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = PlannerRng::new(12345);
        let mut r2 = PlannerRng::new(12345);
        for _ in 0..100 {
            let a = r1.gen_range(0..1_000_000);
            let b = r2.gen_range(0..1_000_000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn children_are_deterministic_per_index() {
        let mut parent1 = PlannerRng::new(7);
        let mut parent2 = PlannerRng::new(7);
        let mut c1 = parent1.child(3);
        let mut c2 = parent2.child(3);
        assert_eq!(c1.gen_range(0..u64::MAX), c2.gen_range(0..u64::MAX));
    }

    #[test]
    fn different_indices_diverge() {
        let mut parent = PlannerRng::new(7);
        let mut a = parent.child(0);
        let mut parent2 = PlannerRng::new(7);
        let mut b = parent2.child(1);
        assert_ne!(a.gen_range(0..u64::MAX), b.gen_range(0..u64::MAX));
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = PlannerRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}

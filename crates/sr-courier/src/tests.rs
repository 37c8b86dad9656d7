//! Unit tests for the courier planner.

#[cfg(test)]
mod helpers {
    use sr_core::dataset::{MapDataset, SegmentRecord};
    use sr_core::ids::{FeatureId, IntersectionId, OsmId, PoiId, SegmentId, StreetId};
    use sr_core::GeoPoint;

    #[derive(Default)]
    pub struct Fixture {
        pub intersections: Vec<(GeoPoint, Vec<SegmentId>)>,
        pub segments: Vec<SegmentRecord>,
    }

    impl MapDataset for Fixture {
        fn intersection_count(&self) -> usize {
            self.intersections.len()
        }
        fn segment_count(&self) -> usize {
            self.segments.len()
        }
        fn street_count(&self) -> usize {
            1
        }
        fn poi_count(&self) -> usize {
            0
        }
        fn feature_count(&self) -> usize {
            0
        }
        fn intersection_position(&self, id: IntersectionId) -> GeoPoint {
            self.intersections[id.index()].0
        }
        fn intersection_name(&self, _id: IntersectionId) -> &str {
            ""
        }
        fn intersection_segment_count(&self, id: IntersectionId) -> usize {
            self.intersections[id.index()].1.len()
        }
        fn intersection_segment_at(&self, id: IntersectionId, index: usize) -> SegmentId {
            self.intersections[id.index()].1[index]
        }
        fn segment(&self, id: SegmentId) -> &SegmentRecord {
            &self.segments[id.index()]
        }
        fn street_name(&self, _id: StreetId) -> &str {
            "Main"
        }
        fn feature_name(&self, _id: FeatureId) -> &str {
            ""
        }
        fn feature_type(&self, _id: FeatureId) -> &str {
            ""
        }
        fn feature_point_count(&self, _id: FeatureId) -> usize {
            0
        }
        fn feature_point_at(&self, _id: FeatureId, _index: usize) -> GeoPoint {
            GeoPoint::new(0.0, 0.0)
        }
        fn feature_osm_id(&self, _id: FeatureId) -> OsmId {
            OsmId(0)
        }
        fn poi_name(&self, _id: PoiId) -> &str {
            ""
        }
        fn poi_type(&self, _id: PoiId) -> &str {
            ""
        }
        fn poi_position(&self, _id: PoiId) -> GeoPoint {
            GeoPoint::new(0.0, 0.0)
        }
        fn poi_osm_node_id(&self, _id: PoiId) -> OsmId {
            OsmId(0)
        }
        fn osm_tags(&self, _id: OsmId) -> &[(String, String)] {
            &[]
        }
        fn way_node_count(&self, _id: OsmId) -> usize {
            0
        }
        fn way_node_position_at(&self, _id: OsmId, _index: usize) -> GeoPoint {
            GeoPoint::new(0.0, 0.0)
        }
    }

    fn deg_offset_m(meters: f64) -> f64 {
        meters / 111_320.0
    }

    /// A straight line of 6 intersections 100 m apart, two-way, 10 m/s.
    /// Intersection 0 is the depot; deliveries run 1->3 and 2->4.
    pub fn line_city() -> Fixture {
        let mut f = Fixture::default();
        let n = 6;
        for i in 0..n {
            f.intersections.push((GeoPoint::new(0.0, deg_offset_m(100.0 * i as f64)), vec![]));
        }
        for i in 0..n - 1 {
            let seg_id = SegmentId(i as u32);
            f.segments.push(SegmentRecord {
                from: IntersectionId(i as u32),
                to: IntersectionId(i as u32 + 1),
                one_way: false,
                speed_limit_mps: 10.0,
                street_id: StreetId(0),
                osm_way_id: OsmId(1),
                curve_points: vec![],
            });
            f.intersections[i].1.push(seg_id);
            f.intersections[i + 1].1.push(seg_id);
        }
        f
    }
}

#[cfg(test)]
mod plan_tests {
    use std::time::Duration;

    use sr_core::ids::IntersectionId;
    use sr_index::MapIndex;

    use super::helpers::line_city;
    use crate::{plan, CourierConfig, Delivery};

    fn small_config() -> CourierConfig {
        let mut cfg = CourierConfig::new(0.0, Duration::from_secs(1), 42);
        cfg.greedy_starts = 8;
        cfg.sa_seed_count = 2;
        cfg
    }

    #[test]
    fn empty_deliveries_is_rejected() {
        let ds = line_city();
        let idx = MapIndex::build(&ds).unwrap();
        let result = plan(&idx, &[IntersectionId(0)], &[], &small_config());
        assert!(result.is_err());
    }

    #[test]
    fn empty_depots_is_rejected() {
        let ds = line_city();
        let idx = MapIndex::build(&ds).unwrap();
        let deliveries = vec![Delivery {
            pickup: IntersectionId(1),
            dropoff: IntersectionId(3),
        }];
        let result = plan(&idx, &[], &deliveries, &small_config());
        assert!(result.is_err());
    }

    #[test]
    fn single_delivery_tour_visits_pickup_before_dropoff() {
        let ds = line_city();
        let idx = MapIndex::build(&ds).unwrap();
        let deliveries = vec![Delivery {
            pickup: IntersectionId(2),
            dropoff: IntersectionId(4),
        }];
        let subpaths = plan(&idx, &[IntersectionId(0)], &deliveries, &small_config()).unwrap();
        assert!(!subpaths.is_empty());

        let mut visited = Vec::new();
        for leg in &subpaths {
            visited.push(leg.start);
        }
        if let Some(last) = subpaths.last() {
            visited.push(last.end);
        }
        let pickup_pos = visited.iter().position(|&i| i == IntersectionId(2));
        let dropoff_pos = visited.iter().position(|&i| i == IntersectionId(4));
        assert!(pickup_pos.is_some() && dropoff_pos.is_some());
        assert!(pickup_pos.unwrap() < dropoff_pos.unwrap());
    }

    #[test]
    fn two_delivery_tour_respects_both_precedences() {
        let ds = line_city();
        let idx = MapIndex::build(&ds).unwrap();
        let deliveries = vec![
            Delivery {
                pickup: IntersectionId(1),
                dropoff: IntersectionId(3),
            },
            Delivery {
                pickup: IntersectionId(2),
                dropoff: IntersectionId(4),
            },
        ];
        let subpaths = plan(&idx, &[IntersectionId(0)], &deliveries, &small_config()).unwrap();

        let mut visited = vec![subpaths[0].start];
        for leg in &subpaths {
            visited.push(leg.end);
        }
        let pos = |i: IntersectionId| visited.iter().position(|&v| v == i).unwrap();
        assert!(pos(IntersectionId(1)) < pos(IntersectionId(3)));
        assert!(pos(IntersectionId(2)) < pos(IntersectionId(4)));
    }

    #[test]
    fn deterministic_for_same_seed() {
        let ds = line_city();
        let idx = MapIndex::build(&ds).unwrap();
        let deliveries = vec![
            Delivery {
                pickup: IntersectionId(1),
                dropoff: IntersectionId(3),
            },
            Delivery {
                pickup: IntersectionId(2),
                dropoff: IntersectionId(4),
            },
        ];
        let cfg = small_config();
        let run1 = plan(&idx, &[IntersectionId(0)], &deliveries, &cfg).unwrap();
        let run2 = plan(&idx, &[IntersectionId(0)], &deliveries, &cfg).unwrap();
        assert_eq!(run1.len(), run2.len());
        for (a, b) in run1.iter().zip(run2.iter()) {
            assert_eq!(a.start, b.start);
            assert_eq!(a.end, b.end);
            assert_eq!(a.segments, b.segments);
        }
    }
}

#[cfg(test)]
mod types_tests {
    use sr_core::ids::IntersectionId;

    use crate::types::{is_legal, PickDrop, PickDropKind};

    #[test]
    fn pickup_before_its_dropoff_is_legal() {
        let solution = vec![
            PickDrop {
                intersection: IntersectionId(1),
                kind: PickDropKind::Pickup,
                required_dropoffs: vec![IntersectionId(3)],
            },
            PickDrop {
                intersection: IntersectionId(3),
                kind: PickDropKind::Dropoff,
                required_dropoffs: vec![],
            },
        ];
        assert!(is_legal(&solution));
    }

    #[test]
    fn dropoff_before_its_pickup_is_illegal() {
        let solution = vec![
            PickDrop {
                intersection: IntersectionId(3),
                kind: PickDropKind::Dropoff,
                required_dropoffs: vec![],
            },
            PickDrop {
                intersection: IntersectionId(1),
                kind: PickDropKind::Pickup,
                required_dropoffs: vec![IntersectionId(3)],
            },
        ];
        assert!(!is_legal(&solution));
    }

    #[test]
    fn both_kind_is_simultaneously_a_pickup_and_a_dropoff_facet() {
        let solution = vec![
            PickDrop {
                intersection: IntersectionId(5),
                kind: PickDropKind::Both,
                required_dropoffs: vec![IntersectionId(5)],
            },
        ];
        assert!(is_legal(&solution));
    }
}

#[cfg(test)]
mod perturb_tests {
    use sr_core::ids::IntersectionId;

    use crate::perturb::{reverse_subsequence, shift, swap};
    use crate::types::{PickDrop, PickDropKind};

    fn stop(i: u32) -> PickDrop {
        PickDrop {
            intersection: IntersectionId(i),
            kind: PickDropKind::Pickup,
            required_dropoffs: vec![],
        }
    }

    #[test]
    fn shift_moves_single_element() {
        let mut v = vec![stop(0), stop(1), stop(2), stop(3)];
        shift(&mut v, 0, 2);
        let ids: Vec<u32> = v.iter().map(|p| p.intersection.0).collect();
        assert_eq!(ids, vec![1, 2, 0, 3]);
    }

    #[test]
    fn swap_exchanges_two_elements() {
        let mut v = vec![stop(0), stop(1), stop(2)];
        swap(&mut v, 0, 2);
        let ids: Vec<u32> = v.iter().map(|p| p.intersection.0).collect();
        assert_eq!(ids, vec![2, 1, 0]);
    }

    #[test]
    fn reverse_subsequence_reverses_inclusive_range() {
        let mut v = vec![stop(0), stop(1), stop(2), stop(3)];
        reverse_subsequence(&mut v, 1, 3);
        let ids: Vec<u32> = v.iter().map(|p| p.intersection.0).collect();
        assert_eq!(ids, vec![0, 3, 2, 1]);
    }
}

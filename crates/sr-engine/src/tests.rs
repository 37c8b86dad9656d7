//! End-to-end tests driving the facade the way a Query Client would: load a
//! dataset, run queries, close it.

use std::time::Duration;

use sr_core::dataset::{MapDataset, SegmentRecord};
use sr_core::ids::{FeatureId, IntersectionId, OsmId, PoiId, SegmentId, StreetId};
use sr_core::GeoPoint;

use crate::{Delivery, RoutingEngine};

#[derive(Default)]
struct Fixture {
    intersections: Vec<(GeoPoint, Vec<SegmentId>)>,
    segments: Vec<SegmentRecord>,
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

/// Line of 4 intersections 100 m apart, two-way, 10 m/s, one street:
/// d1(0) - P(1) - D(2) - d2(3). Matches scenario S6 (d1 closer to P).
fn courier_line() -> Fixture {
    let mut f = Fixture::default();
    for i in 0..4 {
        f.intersections.push((GeoPoint::new(0.0, deg_offset_m(100.0 * i as f64)), vec![]));
    }
    for i in 0..3 {
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

#[test]
fn load_then_close_flips_is_loaded() {
    let mut engine = RoutingEngine::new();
    assert!(!engine.is_loaded());
    engine.load_map(&courier_line()).unwrap();
    assert!(engine.is_loaded());
    engine.close_map();
    assert!(!engine.is_loaded());
}

#[test]
fn s1_trivial_path_through_the_facade() {
    let mut engine = RoutingEngine::new();
    engine.load_map(&courier_line()).unwrap();
    let path = engine.find_path_between_intersections(0.0, IntersectionId(0), IntersectionId(1));
    assert_eq!(path.len(), 1);
    assert!((engine.path_travel_time(0.0, &path) - 10.0).abs() < 1e-6);
}

#[test]
fn s6_courier_minimal_prefers_closer_depot() {
    let mut engine = RoutingEngine::new();
    engine.load_map(&courier_line()).unwrap();

    let deliveries = vec![Delivery {
        pickup: IntersectionId(1),
        dropoff: IntersectionId(2),
    }];
    let depots = [IntersectionId(0), IntersectionId(3)];

    let subpaths =
        engine.travelling_courier(0.0, &deliveries, &depots, Duration::from_millis(50), 7);

    assert!(!subpaths.is_empty());
    assert_eq!(subpaths.first().unwrap().start, IntersectionId(0));
    assert_eq!(subpaths.last().unwrap().end, IntersectionId(0));
}

//! A small synthetic street grid used to exercise the routing engine
//! end-to-end without needing a real map-dataset loader.
//!
//! Three east-west streets ("Elm Street", "Oak Street", "Bay Street") cross
//! three north-south avenues ("1st Avenue", "2nd Avenue", "3rd Avenue") in a
//! 3x3 grid, 200 m between neighbors. One avenue segment is one-way to
//! exercise the router's directional handling. A POI ("City Hall") sits at
//! the center intersection, and a closed four-point feature ("Central Park")
//! covers the grid's south-west block.

use sr_core::dataset::{MapDataset, SegmentRecord};
use sr_core::ids::{FeatureId, IntersectionId, OsmId, PoiId, SegmentId, StreetId};
use sr_core::GeoPoint;

const BASE_LAT: f64 = 43.650;
const BASE_LON: f64 = -79.380;
const SPACING_M: f64 = 200.0;
const METERS_PER_DEGREE: f64 = 111_320.0;

fn grid_point(row: usize, col: usize) -> GeoPoint {
    let d = SPACING_M / METERS_PER_DEGREE;
    GeoPoint::new(BASE_LAT + row as f64 * d, BASE_LON + col as f64 * d)
}

pub struct ToyCity {
    intersections: Vec<(GeoPoint, String, Vec<SegmentId>)>,
    segments: Vec<SegmentRecord>,
    street_names: Vec<String>,
    pois: Vec<(String, String, GeoPoint, OsmId)>,
    features: Vec<(String, String, Vec<GeoPoint>, OsmId)>,
}

impl ToyCity {
    /// Grid index for row/col, 0-based, 3x3.
    pub fn at(row: usize, col: usize) -> IntersectionId {
        IntersectionId((row * 3 + col) as u32)
    }

    pub fn build() -> ToyCity {
        let mut city = ToyCity {
            intersections: (0..9).map(|_| (GeoPoint::new(0.0, 0.0), String::new(), Vec::new())).collect(),
            segments: Vec::new(),
            street_names: vec!["Elm Street".into(), "Oak Street".into(), "Bay Street".into(), "1st Avenue".into(), "2nd Avenue".into(), "3rd Avenue".into()],
            pois: Vec::new(),
            features: Vec::new(),
        };

        for row in 0..3 {
            for col in 0..3 {
                let id = Self::at(row, col);
                city.intersections[id.index()] = (grid_point(row, col), format!("{row},{col}"), Vec::new());
            }
        }

        // East-west streets, one per row.
        for row in 0..3 {
            let street = StreetId(row as u32);
            for col in 0..2 {
                city.add_segment(Self::at(row, col), Self::at(row, col + 1), street, false, 13.4);
            }
        }

        // North-south avenues, one per column. The middle segment of "2nd
        // Avenue" (row 0 -> row 1, col 1) is one-way southbound only.
        for col in 0..3 {
            let street = StreetId((3 + col) as u32);
            for row in 0..2 {
                let one_way = col == 1 && row == 0;
                city.add_segment(Self::at(row, col), Self::at(row + 1, col), street, one_way, 13.4);
            }
        }

        city.pois.push(("City Hall".into(), "government".into(), grid_point(1, 1), OsmId(9001)));

        // Closed quadrilateral covering the south-west block: (0,0)-(0,1)-(1,1)-(1,0)-(0,0).
        city.features.push((
            "Central Park".into(),
            "park".into(),
            vec![grid_point(0, 0), grid_point(0, 1), grid_point(1, 1), grid_point(1, 0), grid_point(0, 0)],
            OsmId(9002),
        ));

        city
    }

    fn add_segment(&mut self, from: IntersectionId, to: IntersectionId, street_id: StreetId, one_way: bool, speed_limit_mps: f64) {
        let seg_id = SegmentId(self.segments.len() as u32);
        self.segments.push(SegmentRecord {
            from,
            to,
            one_way,
            speed_limit_mps,
            street_id,
            osm_way_id: OsmId(seg_id.0 as u64 + 1),
            curve_points: vec![],
        });
        // Adjacency lists every incident segment regardless of direction;
        // the router is the one that consults `one_way` before expanding.
        self.intersections[from.index()].2.push(seg_id);
        self.intersections[to.index()].2.push(seg_id);
    }
}

impl MapDataset for ToyCity {
    fn intersection_count(&self) -> usize {
        self.intersections.len()
    }
    fn segment_count(&self) -> usize {
        self.segments.len()
    }
    fn street_count(&self) -> usize {
        self.street_names.len()
    }
    fn poi_count(&self) -> usize {
        self.pois.len()
    }
    fn feature_count(&self) -> usize {
        self.features.len()
    }

    fn intersection_position(&self, id: IntersectionId) -> GeoPoint {
        self.intersections[id.index()].0
    }
    fn intersection_name(&self, id: IntersectionId) -> &str {
        &self.intersections[id.index()].1
    }
    fn intersection_segment_count(&self, id: IntersectionId) -> usize {
        self.intersections[id.index()].2.len()
    }
    fn intersection_segment_at(&self, id: IntersectionId, index: usize) -> SegmentId {
        self.intersections[id.index()].2[index]
    }

    fn segment(&self, id: SegmentId) -> &SegmentRecord {
        &self.segments[id.index()]
    }

    fn street_name(&self, id: StreetId) -> &str {
        &self.street_names[id.index()]
    }

    fn feature_name(&self, id: FeatureId) -> &str {
        &self.features[id.index()].0
    }
    fn feature_type(&self, id: FeatureId) -> &str {
        &self.features[id.index()].1
    }
    fn feature_point_count(&self, id: FeatureId) -> usize {
        self.features[id.index()].2.len()
    }
    fn feature_point_at(&self, id: FeatureId, index: usize) -> GeoPoint {
        self.features[id.index()].2[index]
    }
    fn feature_osm_id(&self, id: FeatureId) -> OsmId {
        self.features[id.index()].3
    }

    fn poi_name(&self, id: PoiId) -> &str {
        &self.pois[id.index()].0
    }
    fn poi_type(&self, id: PoiId) -> &str {
        &self.pois[id.index()].1
    }
    fn poi_position(&self, id: PoiId) -> GeoPoint {
        self.pois[id.index()].2
    }
    fn poi_osm_node_id(&self, id: PoiId) -> OsmId {
        self.pois[id.index()].3
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

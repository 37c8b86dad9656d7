//! The map index: derived lookup tables built once from a [`MapDataset`] and
//! held immutable for the lifetime of the loaded map.
//!
//! # Build algorithm
//!
//! One pass over segments computes per-segment length (summing the
//! great-ish-circle hops `from -> curve[0] -> ... -> curve[k-1] -> to`) and
//! travel time. A second pass builds per-intersection adjacency. A third
//! sweeps segments per street to build the deduplicated intersection set and
//! total length. A fourth walks street names inserting every non-empty
//! prefix into the name index. OSM tag and way-length tables are built by
//! iterating the node/way lists the provider exposes directly.
//!
//! None of this is retained from the dataset afterward — `MapIndex` owns its
//! own copies of everything it needs, so the provider can be dropped once
//! [`MapIndex::build`] returns.

use log::debug;

#[cfg(not(feature = "fx-hash"))]
use std::collections::{HashMap, HashSet};

#[cfg(feature = "fx-hash")]
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};

use sr_core::dataset::{MapDataset, SegmentRecord};
use sr_core::geo::{angle_at_shared_point, distance_m, polygon_area_m2};
use sr_core::ids::{FeatureId, IntersectionId, OsmId, PoiId, SegmentId, StreetId};
use sr_core::{GeoPoint, Projection};

use crate::error::{IndexError, IndexResult};

struct FeatureRecord {
    name: String,
    type_tag: String,
    points: Vec<GeoPoint>,
    osm_id: OsmId,
}

struct PoiRecord {
    name: String,
    type_tag: String,
    position: GeoPoint,
    osm_node_id: OsmId,
}

/// Owns every derived table the engine queries against. Built once via
/// [`MapIndex::build`]; all getters assume a successful prior build and are
/// cheap (O(1) or O(log n)) lookups over owned `Vec`s/`HashMap`s.
pub struct MapIndex {
    positions: Vec<GeoPoint>,
    intersection_names: Vec<String>,
    adj: Vec<Vec<SegmentId>>,

    segments: Vec<SegmentRecord>,
    seg_length: Vec<f64>,
    seg_travel_time: Vec<f64>,

    street_names: Vec<String>,
    street_intersections: Vec<Vec<IntersectionId>>,
    street_length: Vec<f64>,
    name_prefix: HashMap<String, Vec<StreetId>>,

    way_length: HashMap<OsmId, f64>,
    tags: HashMap<OsmId, HashMap<String, String>>,

    features: Vec<FeatureRecord>,
    pois: Vec<PoiRecord>,

    max_speed_mps: f64,
    projection: Projection,
}

/// Normalize a street name for prefix matching: lower-case, all whitespace
/// stripped. "Bloor St" becomes "bloorst".
fn normalize_name(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl MapIndex {
    /// Build all derived tables from a dataset. Builds into local owned
    /// structures first, so a failure midway never leaves a partially built
    /// `MapIndex` observable to the caller.
    pub fn build(dataset: &dyn MapDataset) -> IndexResult<MapIndex> {
        let intersection_count = dataset.intersection_count();
        if intersection_count == 0 {
            return Err(IndexError::EmptyDataset);
        }
        let segment_count = dataset.segment_count();
        let street_count = dataset.street_count();
        let feature_count = dataset.feature_count();
        let poi_count = dataset.poi_count();

        debug!(
            "building map index: {intersection_count} intersections, {segment_count} segments, \
             {street_count} streets, {feature_count} features, {poi_count} pois"
        );

        let mut positions = Vec::with_capacity(intersection_count);
        let mut intersection_names = Vec::with_capacity(intersection_count);
        for i in 0..intersection_count {
            let id = IntersectionId(i as u32);
            positions.push(dataset.intersection_position(id));
            intersection_names.push(dataset.intersection_name(id).to_string());
        }

        let lat_min = positions.iter().map(|p| p.lat).fold(f64::INFINITY, f64::min);
        let lat_max = positions
            .iter()
            .map(|p| p.lat)
            .fold(f64::NEG_INFINITY, f64::max);
        let projection = Projection::from_bounds(lat_min, lat_max);

        // Pass 1: copy segment records and compute length/travel time.
        let mut segments = Vec::with_capacity(segment_count);
        let mut seg_length = Vec::with_capacity(segment_count);
        let mut seg_travel_time = Vec::with_capacity(segment_count);
        let mut max_speed_mps = 1.0_f64;
        for i in 0..segment_count {
            let rec = dataset.segment(SegmentId(i as u32)).clone();
            let from_pos = positions[rec.from.index()];
            let to_pos = positions[rec.to.index()];

            let mut length = 0.0;
            let mut prev = from_pos;
            for cp in &rec.curve_points {
                length += distance_m(prev, *cp);
                prev = *cp;
            }
            length += distance_m(prev, to_pos);

            let speed = rec.speed_limit_mps.max(f64::MIN_POSITIVE);
            max_speed_mps = max_speed_mps.max(speed);

            seg_length.push(length);
            seg_travel_time.push(length / speed);
            segments.push(rec);
        }

        // Pass 2: per-intersection adjacency, straight from the provider.
        let mut adj = vec![Vec::new(); intersection_count];
        for i in 0..intersection_count {
            let id = IntersectionId(i as u32);
            let n = dataset.intersection_segment_count(id);
            let row = &mut adj[i];
            row.reserve(n);
            for k in 0..n {
                row.push(dataset.intersection_segment_at(id, k));
            }
        }

        // Pass 3: per-street intersection sets (deduplicated, first-seen order)
        // and total length, by sweeping every segment once.
        let mut street_names = Vec::with_capacity(street_count);
        for i in 0..street_count {
            street_names.push(dataset.street_name(StreetId(i as u32)).to_string());
        }
        let mut street_intersections: Vec<Vec<IntersectionId>> = vec![Vec::new(); street_count];
        let mut street_seen: Vec<HashSet<IntersectionId>> = vec![HashSet::default(); street_count];
        let mut street_length = vec![0.0_f64; street_count];
        for (i, rec) in segments.iter().enumerate() {
            let s = rec.street_id.index();
            street_length[s] += seg_length[i];
            if street_seen[s].insert(rec.from) {
                street_intersections[s].push(rec.from);
            }
            if street_seen[s].insert(rec.to) {
                street_intersections[s].push(rec.to);
            }
        }

        // Pass 4: every non-empty prefix of every normalized street name.
        let mut name_prefix: HashMap<String, Vec<StreetId>> = HashMap::default();
        for (i, name) in street_names.iter().enumerate() {
            let normalized = normalize_name(name);
            for end in 1..=normalized.chars().count() {
                let prefix: String = normalized.chars().take(end).collect();
                name_prefix.entry(prefix).or_default().push(StreetId(i as u32));
            }
        }

        // OSM tags and way lengths, straight from the provider's node/way lists.
        let mut tags: HashMap<OsmId, HashMap<String, String>> = HashMap::default();
        let mut way_length: HashMap<OsmId, f64> = HashMap::default();
        let mut seen_osm_ids: HashSet<OsmId> = HashSet::default();
        for rec in &segments {
            seen_osm_ids.insert(rec.osm_way_id);
        }
        for i in 0..feature_count {
            seen_osm_ids.insert(dataset.feature_osm_id(FeatureId(i as u32)));
        }
        for i in 0..poi_count {
            seen_osm_ids.insert(dataset.poi_osm_node_id(PoiId(i as u32)));
        }
        for id in seen_osm_ids {
            let kv = dataset.osm_tags(id);
            if !kv.is_empty() {
                tags.insert(id, kv.iter().cloned().collect());
            }
            let node_count = dataset.way_node_count(id);
            if node_count >= 2 {
                let mut len = 0.0;
                let mut prev = dataset.way_node_position_at(id, 0);
                for k in 1..node_count {
                    let p = dataset.way_node_position_at(id, k);
                    len += distance_m(prev, p);
                    prev = p;
                }
                way_length.insert(id, len);
            }
        }

        let mut features = Vec::with_capacity(feature_count);
        for i in 0..feature_count {
            let id = FeatureId(i as u32);
            let n = dataset.feature_point_count(id);
            let points = (0..n).map(|k| dataset.feature_point_at(id, k)).collect();
            features.push(FeatureRecord {
                name: dataset.feature_name(id).to_string(),
                type_tag: dataset.feature_type(id).to_string(),
                points,
                osm_id: dataset.feature_osm_id(id),
            });
        }

        let mut pois = Vec::with_capacity(poi_count);
        for i in 0..poi_count {
            let id = PoiId(i as u32);
            pois.push(PoiRecord {
                name: dataset.poi_name(id).to_string(),
                type_tag: dataset.poi_type(id).to_string(),
                position: dataset.poi_position(id),
                osm_node_id: dataset.poi_osm_node_id(id),
            });
        }

        Ok(MapIndex {
            positions,
            intersection_names,
            adj,
            segments,
            seg_length,
            seg_travel_time,
            street_names,
            street_intersections,
            street_length,
            name_prefix,
            way_length,
            tags,
            features,
            pois,
            max_speed_mps,
            projection,
        })
    }

    // ── Dimensions ──────────────────────────────────────────────────────

    pub fn intersection_count(&self) -> usize {
        self.positions.len()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn street_count(&self) -> usize {
        self.street_names.len()
    }

    /// Maximum speed limit over all segments, in m/s. Used by the router's
    /// admissible heuristic.
    pub fn max_speed_mps(&self) -> f64 {
        self.max_speed_mps
    }

    // ── Basic attribute getters ────────────────────────────────────────

    pub fn intersection_position(&self, id: IntersectionId) -> GeoPoint {
        self.positions[id.index()]
    }

    pub fn intersection_name(&self, id: IntersectionId) -> &str {
        &self.intersection_names[id.index()]
    }

    pub fn segment(&self, id: SegmentId) -> &SegmentRecord {
        &self.segments[id.index()]
    }

    pub fn street_segment_length(&self, seg: SegmentId) -> f64 {
        self.seg_length[seg.index()]
    }

    pub fn street_segment_travel_time(&self, seg: SegmentId) -> f64 {
        self.seg_travel_time[seg.index()]
    }

    pub fn street_name(&self, street: StreetId) -> &str {
        &self.street_names[street.index()]
    }

    pub fn street_length(&self, street: StreetId) -> f64 {
        self.street_length[street.index()]
    }

    pub fn way_length(&self, osm_way: OsmId) -> f64 {
        self.way_length.get(&osm_way).copied().unwrap_or(0.0)
    }

    pub fn intersections_of_street(&self, street: StreetId) -> &[IntersectionId] {
        &self.street_intersections[street.index()]
    }

    pub fn segments_of_intersection(&self, intersection: IntersectionId) -> &[SegmentId] {
        &self.adj[intersection.index()]
    }

    /// Set intersection of the two streets' intersection lists.
    pub fn intersections_of_two_streets(&self, a: StreetId, b: StreetId) -> Vec<IntersectionId> {
        let b_set: HashSet<IntersectionId> = self.intersections_of_street(b).iter().copied().collect();
        self.intersections_of_street(a)
            .iter()
            .copied()
            .filter(|i| b_set.contains(i))
            .collect()
    }

    /// True iff some segment incident to `a` has `b` as its other endpoint.
    /// One-way direction is not consulted here; this is a pure topological
    /// adjacency query, independent of legality-for-travel.
    pub fn intersections_directly_connected(&self, a: IntersectionId, b: IntersectionId) -> bool {
        self.adj[a.index()].iter().any(|&seg| {
            let rec = &self.segments[seg.index()];
            (rec.from == a && rec.to == b) || (rec.from == b && rec.to == a)
        })
    }

    /// Case- and whitespace-insensitive prefix match. Empty prefix returns
    /// empty, per spec.
    pub fn street_ids_from_partial_name(&self, prefix: &str) -> &[StreetId] {
        if prefix.is_empty() {
            return &[];
        }
        let normalized = normalize_name(prefix);
        self.name_prefix
            .get(&normalized)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn osm_tag(&self, osm_id: OsmId, key: &str) -> &str {
        self.tags
            .get(&osm_id)
            .and_then(|m| m.get(key))
            .map(String::as_str)
            .unwrap_or("")
    }

    // ── Geometry queries (GM) ────────────────────────────────────────────

    /// Straight-line distance between two points, metres.
    pub fn find_distance(&self, a: GeoPoint, b: GeoPoint) -> f64 {
        distance_m(a, b)
    }

    /// Angle at the shared endpoint of two segments, or `None` if they share
    /// no endpoint. See [`sr_core::geo::angle_at_shared_point`].
    pub fn find_angle_between_segments(&self, a: SegmentId, b: SegmentId) -> Option<f64> {
        let sa = &self.segments[a.index()];
        let sb = &self.segments[b.index()];

        let shared = if sa.from == sb.from || sa.from == sb.to {
            sa.from
        } else if sa.to == sb.from || sa.to == sb.to {
            sa.to
        } else {
            return None;
        };

        let far_point = |seg: &SegmentRecord, shared: IntersectionId| -> GeoPoint {
            if seg.from == shared {
                seg.curve_points.first().copied().unwrap_or(self.positions[seg.to.index()])
            } else {
                seg.curve_points.last().copied().unwrap_or(self.positions[seg.from.index()])
            }
        };

        let far1 = far_point(sa, shared);
        let far2 = far_point(sb, shared);
        angle_at_shared_point(self.positions[shared.index()], far1, far2)
    }

    /// Nearest intersection to `point` by linear scan; ties keep the
    /// first-scanned (lowest-id) intersection.
    pub fn find_closest_intersection(&self, point: GeoPoint) -> IntersectionId {
        let mut best = IntersectionId(0);
        let mut best_dist = f64::INFINITY;
        for (i, pos) in self.positions.iter().enumerate() {
            let d = distance_m(point, *pos);
            if d < best_dist {
                best_dist = d;
                best = IntersectionId(i as u32);
            }
        }
        best
    }

    /// Nearest POI whose name matches `name` exactly, by linear scan; ties
    /// keep the first-scanned POI.
    pub fn find_closest_poi(&self, point: GeoPoint, name: &str) -> Option<PoiId> {
        let mut best: Option<PoiId> = None;
        let mut best_dist = f64::INFINITY;
        for (i, poi) in self.pois.iter().enumerate() {
            if poi.name != name {
                continue;
            }
            let d = distance_m(point, poi.position);
            if best.is_none() || d < best_dist {
                best_dist = d;
                best = Some(PoiId(i as u32));
            }
        }
        best
    }

    /// Area enclosed by a feature, in square metres. `0.0` if the feature is
    /// open or degenerate (fewer than 4 stored points, or first != last).
    pub fn find_feature_area(&self, feature: FeatureId) -> f64 {
        let rec = &self.features[feature.index()];
        polygon_area_m2(&self.projection, &rec.points).unwrap_or(0.0)
    }

    pub fn feature_name(&self, feature: FeatureId) -> &str {
        &self.features[feature.index()].name
    }

    pub fn feature_type(&self, feature: FeatureId) -> &str {
        &self.features[feature.index()].type_tag
    }

    pub fn feature_osm_id(&self, feature: FeatureId) -> OsmId {
        self.features[feature.index()].osm_id
    }

    pub fn poi_name(&self, poi: PoiId) -> &str {
        &self.pois[poi.index()].name
    }

    pub fn poi_type(&self, poi: PoiId) -> &str {
        &self.pois[poi.index()].type_tag
    }

    pub fn poi_position(&self, poi: PoiId) -> GeoPoint {
        self.pois[poi.index()].position
    }

    pub fn poi_osm_node_id(&self, poi: PoiId) -> OsmId {
        self.pois[poi.index()].osm_node_id
    }
}

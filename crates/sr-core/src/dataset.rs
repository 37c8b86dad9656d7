//! The Map Dataset Provider contract.
//!
//! The routing engine never reads map files itself — it is handed a
//! `&dyn MapDataset` and builds its derived indices from whatever the
//! provider exposes. This mirrors how the engine's callers are expected to
//! plug in their own loader (an OSM extract, a vendor format, a synthetic
//! fixture for tests) without the engine depending on any of them.
//!
//! Every method here is assumed total over the range `0..count`; the engine
//! never calls a getter with an out-of-range id.

use crate::geo::GeoPoint;
use crate::ids::{FeatureId, IntersectionId, OsmId, PoiId, SegmentId, StreetId};

/// Attributes of one directed-or-bidirectional street segment.
#[derive(Clone, Debug)]
pub struct SegmentRecord {
    pub from: IntersectionId,
    pub to: IntersectionId,
    pub one_way: bool,
    pub speed_limit_mps: f64,
    pub street_id: StreetId,
    pub osm_way_id: OsmId,
    /// Ordered intermediate points between `from` and `to`, excluding both endpoints.
    pub curve_points: Vec<GeoPoint>,
}

/// Read-only access to a loaded map dataset.
///
/// Implementors need not be backed by any particular file format; the
/// engine only ever calls these getters, in order, during index build.
pub trait MapDataset {
    fn intersection_count(&self) -> usize;
    fn segment_count(&self) -> usize;
    fn street_count(&self) -> usize;
    fn poi_count(&self) -> usize;
    fn feature_count(&self) -> usize;

    fn intersection_position(&self, id: IntersectionId) -> GeoPoint;
    fn intersection_name(&self, id: IntersectionId) -> &str;
    fn intersection_segment_count(&self, id: IntersectionId) -> usize;
    fn intersection_segment_at(&self, id: IntersectionId, index: usize) -> SegmentId;

    fn segment(&self, id: SegmentId) -> &SegmentRecord;

    fn street_name(&self, id: StreetId) -> &str;

    fn feature_name(&self, id: FeatureId) -> &str;
    fn feature_type(&self, id: FeatureId) -> &str;
    fn feature_point_count(&self, id: FeatureId) -> usize;
    fn feature_point_at(&self, id: FeatureId, index: usize) -> GeoPoint;
    fn feature_osm_id(&self, id: FeatureId) -> OsmId;

    fn poi_name(&self, id: PoiId) -> &str;
    fn poi_type(&self, id: PoiId) -> &str;
    fn poi_position(&self, id: PoiId) -> GeoPoint;
    fn poi_osm_node_id(&self, id: PoiId) -> OsmId;

    /// All tag key/value pairs for the given OSM node or way id.
    fn osm_tags(&self, id: OsmId) -> &[(String, String)];

    /// Node-list length of the OSM way (used to sum hop lengths for `way_length`).
    /// Ways with no recorded geometry (e.g. a way id seen only as a tag holder)
    /// return 0.
    fn way_node_count(&self, id: OsmId) -> usize;
    fn way_node_position_at(&self, id: OsmId, index: usize) -> GeoPoint;
}

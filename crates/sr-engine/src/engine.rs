//! `RoutingEngine` — the facade a Query Client holds onto: one `load_map`
//! call builds every derived table (§4.1), after which every other method
//! here is a cheap read against them. `close_map` releases them again.
//!
//! This is the one piece of process-wide mutable state the engine has (the
//! spec's "single 'loaded map' object with `load` and `close`", §9) — every
//! other crate in the workspace is a pure function of a `&MapIndex`.

use std::time::Duration;

use log::info;

use sr_core::dataset::MapDataset;
use sr_core::ids::{FeatureId, IntersectionId, OsmId, PoiId, SegmentId, StreetId};
use sr_core::GeoPoint;
use sr_courier::{CourierConfig, Delivery, SubPath};
use sr_index::MapIndex;

use crate::error::{EngineError, EngineResult};

/// Holds the currently loaded map, if any. Querying before a successful
/// `load_map` (or after `close_map`) is undefined behavior per the engine's
/// contract — the `expect` below documents that precondition rather than
/// defending against it.
#[derive(Default)]
pub struct RoutingEngine {
    index: Option<MapIndex>,
}

impl RoutingEngine {
    pub fn new() -> Self {
        RoutingEngine { index: None }
    }

    /// Build every derived table from `dataset`. On failure, no partially
    /// built state is retained — a prior successfully loaded map (if any)
    /// stays loaded.
    pub fn load_map(&mut self, dataset: &dyn MapDataset) -> EngineResult<()> {
        let built = MapIndex::build(dataset)?;
        info!(
            "map loaded: {} intersections, {} segments, {} streets",
            built.intersection_count(),
            built.segment_count(),
            built.street_count(),
        );
        self.index = Some(built);
        Ok(())
    }

    /// Release every derived table. Subsequent queries are undefined.
    pub fn close_map(&mut self) {
        self.index = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.index.is_some()
    }

    fn index(&self) -> &MapIndex {
        self.index.as_ref().expect("query issued against an unloaded map")
    }

    // ── Map Index (MX) ───────────────────────────────────────────────────

    pub fn intersection_position(&self, id: IntersectionId) -> GeoPoint {
        self.index().intersection_position(id)
    }

    pub fn street_segment_length(&self, seg: SegmentId) -> f64 {
        self.index().street_segment_length(seg)
    }

    pub fn street_segment_travel_time(&self, seg: SegmentId) -> f64 {
        self.index().street_segment_travel_time(seg)
    }

    pub fn street_length(&self, street: StreetId) -> f64 {
        self.index().street_length(street)
    }

    pub fn way_length(&self, osm_way: OsmId) -> f64 {
        self.index().way_length(osm_way)
    }

    pub fn intersections_of_street(&self, street: StreetId) -> &[IntersectionId] {
        self.index().intersections_of_street(street)
    }

    pub fn segments_of_intersection(&self, intersection: IntersectionId) -> &[SegmentId] {
        self.index().segments_of_intersection(intersection)
    }

    pub fn intersections_of_two_streets(&self, a: StreetId, b: StreetId) -> Vec<IntersectionId> {
        self.index().intersections_of_two_streets(a, b)
    }

    pub fn intersections_directly_connected(&self, a: IntersectionId, b: IntersectionId) -> bool {
        self.index().intersections_directly_connected(a, b)
    }

    pub fn street_ids_from_partial_name(&self, prefix: &str) -> &[StreetId] {
        self.index().street_ids_from_partial_name(prefix)
    }

    pub fn osm_tag(&self, osm_id: OsmId, key: &str) -> &str {
        self.index().osm_tag(osm_id, key)
    }

    // ── Geometry (GM) ─────────────────────────────────────────────────────

    pub fn find_distance(&self, a: GeoPoint, b: GeoPoint) -> f64 {
        self.index().find_distance(a, b)
    }

    pub fn find_angle_between_segments(&self, a: SegmentId, b: SegmentId) -> Option<f64> {
        self.index().find_angle_between_segments(a, b)
    }

    pub fn find_closest_intersection(&self, point: GeoPoint) -> IntersectionId {
        self.index().find_closest_intersection(point)
    }

    pub fn find_closest_poi(&self, point: GeoPoint, name: &str) -> Option<PoiId> {
        self.index().find_closest_poi(point, name)
    }

    pub fn find_feature_area(&self, feature: FeatureId) -> f64 {
        self.index().find_feature_area(feature)
    }

    // ── Single-pair router (SPR) ──────────────────────────────────────────

    /// Shortest driving-time path between two intersections. Empty if
    /// unreachable (or if `src == dst`).
    pub fn find_path_between_intersections(
        &self,
        turn_penalty: f64,
        src: IntersectionId,
        dst: IntersectionId,
    ) -> Vec<SegmentId> {
        sr_router::find_path(self.index(), src, dst, turn_penalty)
    }

    pub fn path_travel_time(&self, turn_penalty: f64, path: &[SegmentId]) -> f64 {
        sr_router::path_travel_time(self.index(), turn_penalty, path)
    }

    // ── Courier planner (CP) ──────────────────────────────────────────────

    /// Plan a multi-pickup/drop-off courier tour within `deadline`, using
    /// the engine's default planner tunables (2,000 greedy starts, top 4
    /// annealed). Use [`RoutingEngine::travelling_courier_with_config`] to
    /// override them or to fix a seed for reproducible tests.
    pub fn travelling_courier(
        &self,
        turn_penalty: f64,
        deliveries: &[Delivery],
        depots: &[IntersectionId],
        deadline: Duration,
        seed: u64,
    ) -> Vec<SubPath> {
        let config = CourierConfig::new(turn_penalty, deadline, seed);
        self.travelling_courier_with_config(deliveries, depots, &config)
    }

    pub fn travelling_courier_with_config(
        &self,
        deliveries: &[Delivery],
        depots: &[IntersectionId],
        config: &CourierConfig,
    ) -> Vec<SubPath> {
        sr_courier::plan(self.index(), depots, deliveries, config).unwrap_or_default()
    }
}

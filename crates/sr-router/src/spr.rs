//! Single-pair shortest driving path (SPR).

use sr_core::ids::{IntersectionId, SegmentId};
use sr_index::MapIndex;

use crate::search::{search, trace_back};

/// Shortest driving-time path from `src` to `dst`, or an empty sequence if
/// `dst` is unreachable. `src == dst` also returns an empty sequence.
pub fn find_path(index: &MapIndex, src: IntersectionId, dst: IntersectionId, turn_penalty: f64) -> Vec<SegmentId> {
    let result = search(index, src, Some(dst), turn_penalty);
    trace_back(index, &result, dst)
}

/// Total travel time of a segment sequence: the sum of each segment's travel
/// time plus `turn_penalty` whenever consecutive segments belong to
/// different streets. An empty path has time `0.0`.
pub fn path_travel_time(index: &MapIndex, turn_penalty: f64, path: &[SegmentId]) -> f64 {
    let mut total = 0.0;
    let mut prev_street = None;

    for &seg_id in path {
        let seg = index.segment(seg_id);
        total += index.street_segment_travel_time(seg_id);
        if let Some(prev) = prev_street {
            if prev != seg.street_id {
                total += turn_penalty;
            }
        }
        prev_street = Some(seg.street_id);
    }

    total
}

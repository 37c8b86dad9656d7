//! The best-first search shared by the single-pair router and the all-pairs
//! matrix builder. Single-target calls supply an admissible heuristic and a
//! destination for the early relaxation gate (§4.3); the all-pairs builder
//! calls with `dst = None` and gets pure Dijkstra to every reachable node in
//! one run (§4.4).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use sr_core::ids::{IntersectionId, SegmentId};
use sr_index::MapIndex;

struct HeapItem {
    priority: f64,
    node: IntersectionId,
    edge: Option<SegmentId>,
    g: f64,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}
impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Reversed so `BinaryHeap` (a max-heap) pops the smallest priority first.
impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
    }
}

/// Result of a single search run: `best_time[i]` and `reaching_edge[i]` for
/// every intersection `i`, indexed by `IntersectionId::index()`.
pub struct SearchResult {
    pub best_time: Vec<f64>,
    pub reaching_edge: Vec<Option<SegmentId>>,
}

/// Run best-first search from `src`. If `dst` is `Some`, uses the
/// `euclidean(v, dst) / max_speed` heuristic and the dual relaxation gate
/// (`g < best_time[v] && g < best_time[dst]`) that lets the search stop
/// pruning once nothing can beat the current best path to `dst`. If `dst` is
/// `None`, runs unconstrained Dijkstra (heuristic 0) to every reachable
/// node — used by the all-pairs matrix, which needs paths to many
/// destinations from one run.
pub fn search(
    index: &MapIndex,
    src: IntersectionId,
    dst: Option<IntersectionId>,
    turn_penalty: f64,
) -> SearchResult {
    let n = index.intersection_count();
    let mut best_time = vec![f64::INFINITY; n];
    let mut reaching_edge: Vec<Option<SegmentId>> = vec![None; n];

    let max_speed = index.max_speed_mps();
    let heuristic = |node: IntersectionId| -> f64 {
        match dst {
            Some(d) => index.find_distance(index.intersection_position(node), index.intersection_position(d)) / max_speed,
            None => 0.0,
        }
    };

    let mut frontier = BinaryHeap::new();
    frontier.push(HeapItem {
        priority: heuristic(src),
        node: src,
        edge: None,
        g: 0.0,
    });

    while let Some(item) = frontier.pop() {
        let accept = match dst {
            Some(d) => item.g < best_time[item.node.index()] && item.g < best_time[d.index()],
            None => item.g < best_time[item.node.index()],
        };
        if !accept {
            continue;
        }

        best_time[item.node.index()] = item.g;
        reaching_edge[item.node.index()] = item.edge;

        for &seg_id in index.segments_of_intersection(item.node) {
            let seg = index.segment(seg_id);

            let to = if item.node == seg.from {
                seg.to
            } else if !seg.one_way && item.node == seg.to {
                seg.from
            } else {
                continue;
            };

            let mut cost = index.street_segment_travel_time(seg_id);
            if let Some(e_in) = item.edge {
                if index.segment(e_in).street_id != seg.street_id {
                    cost += turn_penalty;
                }
            }
            let g_next = item.g + cost;

            if g_next < best_time[to.index()] {
                frontier.push(HeapItem {
                    priority: g_next + heuristic(to),
                    node: to,
                    edge: Some(seg_id),
                    g: g_next,
                });
            }
        }
    }

    SearchResult { best_time, reaching_edge }
}

/// Walk `reaching_edge` backward from `dst` to the search's source, flipping
/// endpoints via each edge's recorded `(from, to)`, then reverse into
/// source-to-destination order. Empty if `dst` was never reached (or if
/// `dst` is the source).
pub fn trace_back(index: &MapIndex, result: &SearchResult, dst: IntersectionId) -> Vec<SegmentId> {
    let mut path = Vec::new();
    let mut current = dst;

    while let Some(edge) = result.reaching_edge[current.index()] {
        path.push(edge);
        let seg = index.segment(edge);
        current = if current == seg.to { seg.from } else { seg.to };
    }

    path.reverse();
    path
}

//! All-pairs distance/path matrix (APM) over a set of "interesting"
//! intersections — depots, pickups, and drop-offs for one courier problem.

use std::collections::HashSet;

use log::debug;

use sr_core::ids::{IntersectionId, SegmentId};
use sr_index::MapIndex;

use crate::search::{search, trace_back};
use crate::spr::path_travel_time;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Deduplicate `ids`, keeping only the first occurrence of each and
/// preserving first-seen order.
pub fn dedup_preserve_order(ids: impl IntoIterator<Item = IntersectionId>) -> Vec<IntersectionId> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for id in ids {
        if seen.insert(id) {
            out.push(id);
        }
    }
    out
}

/// `path[u][v]` and `cost[u][v]` for every ordered pair of interesting
/// intersections, indexed by position in the `interesting` slice (not by
/// `IntersectionId`). Self-pairs (`u == v`) carry an empty path and a cost
/// of `0.0`.
pub struct AllPairsMatrix {
    interesting: Vec<IntersectionId>,
    paths: Vec<Vec<Vec<SegmentId>>>,
    costs: Vec<Vec<f64>>,
}

impl AllPairsMatrix {
    /// Position of `id` within the interesting set, if present.
    pub fn position_of(&self, id: IntersectionId) -> Option<usize> {
        self.interesting.iter().position(|&i| i == id)
    }

    pub fn intersection_at(&self, pos: usize) -> IntersectionId {
        self.interesting[pos]
    }

    pub fn len(&self) -> usize {
        self.interesting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interesting.is_empty()
    }

    pub fn path(&self, u: usize, v: usize) -> &[SegmentId] {
        &self.paths[u][v]
    }

    pub fn cost(&self, u: usize, v: usize) -> f64 {
        self.costs[u][v]
    }

    /// `true` if every ordered pair of pickup/drop-off stops (`stop_positions`)
    /// has a non-empty path, and at least one depot (`depot_positions`) can
    /// reach some stop and be reached back from some stop. Depots are not
    /// required to be mutually reachable, nor is every depot required to be
    /// usable — only one, since the planner picks whichever depot is
    /// cheapest for a given tour's first/last stop (§4.5).
    pub fn is_feasible(&self, depot_positions: &[usize], stop_positions: &[usize]) -> bool {
        let stops_reachable = stop_positions
            .iter()
            .all(|&u| stop_positions.iter().all(|&v| u == v || !self.paths[u][v].is_empty()));
        if !stops_reachable {
            return false;
        }

        depot_positions.iter().any(|&d| {
            stop_positions.iter().any(|&s| !self.paths[d][s].is_empty())
                && stop_positions.iter().any(|&s| !self.paths[s][d].is_empty())
        })
    }
}

/// Build the matrix by running one Dijkstra per source intersection. Sources
/// are independent, so with the `parallel` feature enabled each source's
/// search runs on a rayon worker and writes into its own pre-sized row — no
/// locking required.
pub fn build(index: &MapIndex, interesting: &[IntersectionId], turn_penalty: f64) -> AllPairsMatrix {
    let n = interesting.len();
    debug!("building all-pairs matrix over {n} interesting intersections");

    let rows: Vec<(Vec<Vec<SegmentId>>, Vec<f64>)> = compute_rows(index, interesting, turn_penalty);

    let mut paths = Vec::with_capacity(n);
    let mut costs = Vec::with_capacity(n);
    for (row_paths, row_costs) in rows {
        paths.push(row_paths);
        costs.push(row_costs);
    }

    AllPairsMatrix {
        interesting: interesting.to_vec(),
        paths,
        costs,
    }
}

fn row_for_source(
    index: &MapIndex,
    interesting: &[IntersectionId],
    src: IntersectionId,
    turn_penalty: f64,
) -> (Vec<Vec<SegmentId>>, Vec<f64>) {
    let result = search(index, src, None, turn_penalty);
    let mut row_paths = Vec::with_capacity(interesting.len());
    let mut row_costs = Vec::with_capacity(interesting.len());
    for &dst in interesting {
        let path = trace_back(index, &result, dst);
        let cost = path_travel_time(index, turn_penalty, &path);
        row_paths.push(path);
        row_costs.push(cost);
    }
    (row_paths, row_costs)
}

#[cfg(feature = "parallel")]
fn compute_rows(
    index: &MapIndex,
    interesting: &[IntersectionId],
    turn_penalty: f64,
) -> Vec<(Vec<Vec<SegmentId>>, Vec<f64>)> {
    interesting
        .par_iter()
        .map(|&src| row_for_source(index, interesting, src, turn_penalty))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn compute_rows(
    index: &MapIndex,
    interesting: &[IntersectionId],
    turn_penalty: f64,
) -> Vec<(Vec<Vec<SegmentId>>, Vec<f64>)> {
    interesting
        .iter()
        .map(|&src| row_for_source(index, interesting, src, turn_penalty))
        .collect()
}

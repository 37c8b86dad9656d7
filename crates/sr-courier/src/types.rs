//! Types shared across the courier planner's construction, perturbation, and
//! materialization stages.

use std::time::Duration;

use sr_core::ids::{IntersectionId, SegmentId};

/// One pickup/drop-off pair the courier must service.
#[derive(Copy, Clone, Debug)]
pub struct Delivery {
    pub pickup: IntersectionId,
    pub dropoff: IntersectionId,
}

/// What kind of stop a [`PickDrop`] record represents.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PickDropKind {
    Pickup,
    Dropoff,
    /// A pickup and a drop-off that happen to land on the same intersection
    /// consecutively during construction, merged into a single visit.
    Both,
}

/// One stop in the internal solution representation: a visited intersection,
/// what's done there, and — if anything is picked up here — the drop-off
/// intersections that visit depends on.
#[derive(Clone, Debug)]
pub struct PickDrop {
    pub intersection: IntersectionId,
    pub kind: PickDropKind,
    /// Drop-off intersections required by whatever is picked up at this
    /// stop. Empty for a pure `Dropoff` record.
    pub required_dropoffs: Vec<IntersectionId>,
}

impl PickDrop {
    fn is_pickup_facet(&self) -> bool {
        matches!(self.kind, PickDropKind::Pickup | PickDropKind::Both)
    }

    fn is_dropoff_facet(&self) -> bool {
        matches!(self.kind, PickDropKind::Dropoff | PickDropKind::Both)
    }
}

/// Check the precedence invariant: every pickup's required drop-off
/// intersections must appear, as a dropoff-facet record, later in the list.
///
/// Walks in reverse, accumulating the set of intersections already seen as a
/// drop-off; at each pickup-facet record, every one of its required
/// drop-offs must already be in that set.
pub fn is_legal(solution: &[PickDrop]) -> bool {
    let mut seen_dropoffs = std::collections::HashSet::new();
    for record in solution.iter().rev() {
        if record.is_dropoff_facet() {
            seen_dropoffs.insert(record.intersection);
        }
        if record.is_pickup_facet() && !record.required_dropoffs.iter().all(|d| seen_dropoffs.contains(d)) {
            return false;
        }
    }
    true
}

/// One leg of the final courier tour.
#[derive(Clone, Debug)]
pub struct SubPath {
    pub start: IntersectionId,
    pub end: IntersectionId,
    pub segments: Vec<SegmentId>,
}

/// Tunables for one `plan` call, exposed so callers get deterministic,
/// reproducible runs (and so tests can shrink the budget to keep below a
/// few milliseconds).
#[derive(Clone, Debug)]
pub struct CourierConfig {
    pub turn_penalty: f64,
    pub deadline: Duration,
    pub seed: u64,
    /// Number of independent greedy constructions to run (spec default: 2,000).
    pub greedy_starts: usize,
    /// Number of top constructions to refine with simulated annealing (spec default: 4).
    pub sa_seed_count: usize,
}

impl CourierConfig {
    pub fn new(turn_penalty: f64, deadline: Duration, seed: u64) -> Self {
        CourierConfig {
            turn_penalty,
            deadline,
            seed,
            greedy_starts: 2_000,
            sa_seed_count: 4,
        }
    }
}

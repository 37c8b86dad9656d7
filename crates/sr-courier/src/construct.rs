//! Greedy multi-start construction of an initial courier tour.
//!
//! Mirrors the original planner's "pop best, or occasionally pop
//! second-best" depot/candidate selection: a small amount of randomness
//! keeps the 2,000 independent attempts from collapsing onto the same local
//! optimum.

use sr_core::ids::IntersectionId;
use sr_core::PlannerRng;
use sr_router::AllPairsMatrix;

use crate::types::{is_legal, PickDrop, PickDropKind};
use crate::Delivery;

/// Chance (out of 1.0) that a sorted candidate list yields its second-best
/// entry instead of its best, to diversify the 2,000 greedy attempts.
const SECOND_BEST_CHANCE: f64 = 0.03;

/// Pop the best remaining candidate from a cost-sorted `(index, cost)` list,
/// occasionally popping the second-best instead. `candidates` must already
/// be sorted ascending by cost.
fn pick_candidate(candidates: &mut Vec<(usize, f64)>, rng: &mut PlannerRng) -> (usize, f64) {
    let pick_second = candidates.len() > 1 && rng.gen_bool(SECOND_BEST_CHANCE);
    let at = if pick_second { 1 } else { 0 };
    candidates.remove(at)
}

/// One greedy construction attempt: starting from a randomly favored depot,
/// repeatedly visit whichever remaining pickup/drop-off stop is cheapest
/// from the current position, merging same-intersection stops into a single
/// `Both` record.
///
/// `depots` and `deliveries` are given as positions into `matrix`'s
/// interesting set.
pub fn greedy_construct(
    matrix: &AllPairsMatrix,
    depots: &[usize],
    deliveries: &[Delivery],
    rng: &mut PlannerRng,
) -> Vec<PickDrop> {
    let depot_pos = choose_start_depot(matrix, depots, deliveries, rng);

    let mut pending_pickups: Vec<usize> = (0..deliveries.len()).collect();
    let mut pending_dropoffs: Vec<usize> = Vec::new();
    let mut current = depot_pos;
    let mut solution: Vec<PickDrop> = Vec::new();

    while !pending_pickups.is_empty() || !pending_dropoffs.is_empty() {
        let mut candidates: Vec<(usize, f64)> = Vec::new();
        for &d in &pending_pickups {
            let pos = matrix.position_of(deliveries[d].pickup).unwrap();
            candidates.push((d, matrix.cost(current, pos)));
        }
        // Encode drop-off candidates with an offset so their index space
        // doesn't collide with pickup delivery indices.
        let dropoff_offset = deliveries.len();
        for &d in &pending_dropoffs {
            let pos = matrix.position_of(deliveries[d].dropoff).unwrap();
            candidates.push((dropoff_offset + d, matrix.cost(current, pos)));
        }
        candidates.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());
        let (chosen, _) = pick_candidate(&mut candidates, rng);

        let (intersection, kind, delivery_index, is_pickup) = if chosen < dropoff_offset {
            let d = chosen;
            pending_pickups.retain(|&p| p != d);
            pending_dropoffs.push(d);
            (deliveries[d].pickup, PickDropKind::Pickup, d, true)
        } else {
            let d = chosen - dropoff_offset;
            pending_dropoffs.retain(|&p| p != d);
            (deliveries[d].dropoff, PickDropKind::Dropoff, d, false)
        };

        if let Some(last) = solution.last_mut() {
            if last.intersection == intersection {
                merge_into(last, kind, delivery_index, is_pickup, deliveries);
                current = matrix.position_of(intersection).unwrap();
                continue;
            }
        }

        let required_dropoffs = if is_pickup {
            vec![deliveries[delivery_index].dropoff]
        } else {
            Vec::new()
        };
        solution.push(PickDrop {
            intersection,
            kind,
            required_dropoffs,
        });
        current = matrix.position_of(intersection).unwrap();
    }

    debug_assert!(is_legal(&solution));
    solution
}

fn merge_into(
    record: &mut PickDrop,
    new_kind: PickDropKind,
    delivery_index: usize,
    is_pickup: bool,
    deliveries: &[Delivery],
) {
    record.kind = match (record.kind, new_kind) {
        (PickDropKind::Pickup, PickDropKind::Dropoff) | (PickDropKind::Dropoff, PickDropKind::Pickup) => {
            PickDropKind::Both
        }
        (PickDropKind::Both, _) | (_, PickDropKind::Both) => PickDropKind::Both,
        (same, _) => same,
    };
    if is_pickup {
        record.required_dropoffs.push(deliveries[delivery_index].dropoff);
    }
}

/// Pick the starting depot: build the priority queue of every `(depot,
/// delivery pickup)` pair's cost, sorted ascending, then pop the best (or,
/// with small probability, second-best) pair and take its depot.
fn choose_start_depot(matrix: &AllPairsMatrix, depots: &[usize], deliveries: &[Delivery], rng: &mut PlannerRng) -> usize {
    let mut candidates: Vec<(usize, f64)> = Vec::with_capacity(depots.len() * deliveries.len().max(1));
    for &depot in depots {
        for delivery in deliveries {
            let pickup = matrix.position_of(delivery.pickup).unwrap();
            candidates.push((depot, matrix.cost(depot, pickup)));
        }
    }
    candidates.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());
    let (depot_pos, _) = pick_candidate(&mut candidates, rng);
    depot_pos
}

/// Cost of a finished solution, re-minimizing over every depot regardless of
/// which depot the greedy walk actually started from: `(depot -> first stop)
/// + (last stop -> depot)`, halved, added to the cost of the walk itself.
pub fn solution_cost(matrix: &AllPairsMatrix, depots: &[usize], solution: &[PickDrop]) -> f64 {
    if solution.is_empty() {
        return 0.0;
    }

    let mut walk_cost = 0.0;
    for window in solution.windows(2) {
        let a = matrix.position_of(window[0].intersection).unwrap();
        let b = matrix.position_of(window[1].intersection).unwrap();
        walk_cost += matrix.cost(a, b);
    }

    let first = matrix.position_of(solution.first().unwrap().intersection).unwrap();
    let last = matrix.position_of(solution.last().unwrap().intersection).unwrap();

    let best_depot_cost = depots
        .iter()
        .map(|&depot| (matrix.cost(depot, first) + matrix.cost(last, depot)) / 2.0)
        .fold(f64::INFINITY, f64::min);

    walk_cost + best_depot_cost
}

/// `true` if every pickup in `solution` precedes its required drop-off, i.e.
/// the ordering could legally result from some greedy or perturbed walk.
pub fn legal_move(solution: &[PickDrop]) -> bool {
    is_legal(solution)
}

/// Positions (into `matrix`'s interesting set) of every delivery's pickup
/// and drop-off — the subset of the interesting set that feasibility
/// (§4.4) is actually scoped to; depots are deliberately excluded.
pub fn delivery_stop_positions(matrix: &AllPairsMatrix, deliveries: &[Delivery]) -> Vec<usize> {
    let mut positions = Vec::with_capacity(deliveries.len() * 2);
    for delivery in deliveries {
        positions.push(matrix.position_of(delivery.pickup).unwrap());
        positions.push(matrix.position_of(delivery.dropoff).unwrap());
    }
    positions
}

/// Positions (into `matrix`'s interesting set) of the intersections a
/// `Delivery` list touches; used to assemble the interesting set passed to
/// `sr_router::apm::build` before construction starts.
pub fn interesting_intersections(depots: &[IntersectionId], deliveries: &[Delivery]) -> Vec<IntersectionId> {
    let mut ids = Vec::with_capacity(depots.len() + deliveries.len() * 2);
    ids.extend_from_slice(depots);
    for d in deliveries {
        ids.push(d.pickup);
        ids.push(d.dropoff);
    }
    sr_router::dedup_preserve_order(ids)
}

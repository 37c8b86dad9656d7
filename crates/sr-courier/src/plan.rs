//! Top-level courier-planner orchestration: build the all-pairs matrix over
//! every depot/pickup/drop-off, run many independent greedy constructions,
//! refine the best few with simulated annealing, and materialize the winner
//! into a sequence of road-network subpaths.

use std::time::Instant;

use log::info;

use sr_core::ids::IntersectionId;
use sr_core::PlannerRng;
use sr_index::MapIndex;
use sr_router::AllPairsMatrix;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::construct::{delivery_stop_positions, greedy_construct, interesting_intersections, solution_cost};
use crate::error::{CourierError, CourierResult};
use crate::types::{CourierConfig, Delivery, PickDrop, SubPath};

/// Plan a single-courier tour visiting every pickup before its matching
/// drop-off, starting and ending at whichever of `depots` is cheapest.
pub fn plan(
    index: &MapIndex,
    depots: &[IntersectionId],
    deliveries: &[Delivery],
    config: &CourierConfig,
) -> CourierResult<Vec<SubPath>> {
    if deliveries.is_empty() {
        return Err(CourierError::NoDeliveries);
    }
    if depots.is_empty() {
        return Err(CourierError::NoDepots);
    }

    let interesting = interesting_intersections(depots, deliveries);
    let matrix = build_matrix(index, &interesting, config.turn_penalty);

    let depot_positions: Vec<usize> = depots
        .iter()
        .map(|&d| matrix.position_of(d).expect("depot is in interesting set"))
        .collect();
    let stop_positions = delivery_stop_positions(&matrix, deliveries);

    if !matrix.is_feasible(&depot_positions, &stop_positions) {
        return Err(CourierError::Unreachable);
    }

    let mut root_rng = PlannerRng::new(config.seed);
    let attempt_seeds: Vec<PlannerRng> = (0..config.greedy_starts as u64)
        .map(|i| root_rng.child(i))
        .collect();

    let mut attempts: Vec<(Vec<PickDrop>, f64)> = run_greedy_attempts(&matrix, &depot_positions, deliveries, attempt_seeds);
    attempts.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());

    info!(
        "courier planner: {} greedy attempts, best raw cost {:.1}",
        attempts.len(),
        attempts.first().map(|a| a.1).unwrap_or(f64::INFINITY)
    );

    let seed_count = config.sa_seed_count.min(attempts.len());
    let seeds: Vec<Vec<PickDrop>> = attempts.into_iter().take(seed_count).map(|(s, _)| s).collect();

    let refine_seeds: Vec<PlannerRng> = (0..seed_count as u64).map(|i| root_rng.child(1_000_000 + i)).collect();
    let sa_deadline = Instant::now() + config.deadline.mul_f64(0.9);
    let refined = run_sa_refinements(&matrix, &depot_positions, seeds, refine_seeds, sa_deadline);

    let best = refined
        .into_iter()
        .min_by(|a, b| {
            let ca = solution_cost(&matrix, &depot_positions, a);
            let cb = solution_cost(&matrix, &depot_positions, b);
            ca.partial_cmp(&cb).unwrap()
        })
        .expect("at least one seed was refined");

    Ok(materialize(&matrix, &depot_positions, &best))
}

fn build_matrix(index: &MapIndex, interesting: &[IntersectionId], turn_penalty: f64) -> AllPairsMatrix {
    sr_router::apm::build(index, interesting, turn_penalty)
}

#[cfg(feature = "parallel")]
fn run_greedy_attempts(
    matrix: &AllPairsMatrix,
    depot_positions: &[usize],
    deliveries: &[Delivery],
    mut seeds: Vec<PlannerRng>,
) -> Vec<(Vec<PickDrop>, f64)> {
    seeds
        .par_iter_mut()
        .map(|rng| {
            let solution = greedy_construct(matrix, depot_positions, deliveries, rng);
            let cost = solution_cost(matrix, depot_positions, &solution);
            (solution, cost)
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn run_greedy_attempts(
    matrix: &AllPairsMatrix,
    depot_positions: &[usize],
    deliveries: &[Delivery],
    mut seeds: Vec<PlannerRng>,
) -> Vec<(Vec<PickDrop>, f64)> {
    seeds
        .iter_mut()
        .map(|rng| {
            let solution = greedy_construct(matrix, depot_positions, deliveries, rng);
            let cost = solution_cost(matrix, depot_positions, &solution);
            (solution, cost)
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn run_sa_refinements(
    matrix: &AllPairsMatrix,
    depot_positions: &[usize],
    seeds: Vec<Vec<PickDrop>>,
    mut rngs: Vec<PlannerRng>,
    deadline: Instant,
) -> Vec<Vec<PickDrop>> {
    seeds
        .into_par_iter()
        .zip(rngs.par_iter_mut())
        .map(|(solution, rng)| crate::anneal::anneal(matrix, depot_positions, solution, deadline, rng))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn run_sa_refinements(
    matrix: &AllPairsMatrix,
    depot_positions: &[usize],
    seeds: Vec<Vec<PickDrop>>,
    mut rngs: Vec<PlannerRng>,
    deadline: Instant,
) -> Vec<Vec<PickDrop>> {
    seeds
        .into_iter()
        .zip(rngs.iter_mut())
        .map(|(solution, rng)| crate::anneal::anneal(matrix, depot_positions, solution, deadline, rng))
        .collect()
}

/// Stitch a solution's stops (plus the best depot on each end) into a
/// sequence of road-network subpaths, skipping any leg with no movement.
fn materialize(matrix: &AllPairsMatrix, depot_positions: &[usize], solution: &[PickDrop]) -> Vec<SubPath> {
    let first_pos = matrix.position_of(solution[0].intersection).unwrap();
    let last_pos = matrix.position_of(solution[solution.len() - 1].intersection).unwrap();

    let depot_pos = *depot_positions
        .iter()
        .min_by(|&&a, &&b| {
            let ca = (matrix.cost(a, first_pos) + matrix.cost(last_pos, a)) / 2.0;
            let cb = (matrix.cost(b, first_pos) + matrix.cost(last_pos, b)) / 2.0;
            ca.partial_cmp(&cb).unwrap()
        })
        .expect("at least one depot");

    let mut subpaths = Vec::with_capacity(solution.len() + 1);

    push_leg(matrix, &mut subpaths, depot_pos, first_pos);
    for window in solution.windows(2) {
        let a = matrix.position_of(window[0].intersection).unwrap();
        let b = matrix.position_of(window[1].intersection).unwrap();
        push_leg(matrix, &mut subpaths, a, b);
    }
    push_leg(matrix, &mut subpaths, last_pos, depot_pos);

    subpaths
}

fn push_leg(matrix: &AllPairsMatrix, subpaths: &mut Vec<SubPath>, from: usize, to: usize) {
    if from == to {
        return;
    }
    subpaths.push(SubPath {
        start: matrix.intersection_at(from),
        end: matrix.intersection_at(to),
        segments: matrix.path(from, to).to_vec(),
    });
}

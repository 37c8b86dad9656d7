//! Simulated-annealing refinement of one greedy-constructed tour.

use std::time::Instant;

use sr_core::PlannerRng;
use sr_router::AllPairsMatrix;

use crate::construct::{legal_move, solution_cost};
use crate::perturb::{apply, choose_perturbation};
use crate::types::PickDrop;

/// Number of consecutive stagnant (rejected-or-no-improvement) steps before
/// the schedule resets to the best-seen solution and cools sharply.
const STAGNATION_LIMIT: u32 = 100;
const SHARP_COOLING: f64 = 0.9;
const GENTLE_COOLING: f64 = 0.95;
const INITIAL_TEMPERATURE: f64 = 100.0;
const MIN_TEMPERATURE: f64 = 1.0;

/// Anneal `initial` until `deadline` passes, returning the best solution
/// found (which may be `initial` itself if nothing ever improved). The
/// deadline is checked once per iteration, matching the original planner's
/// per-step wall-clock check.
///
/// An illegal proposal (one that violates pickup-before-drop-off ordering)
/// is a complete no-op for the iteration: no acceptance test, no cooling, no
/// stagnation-counter update. This mirrors the original planner's literal
/// `if legal_move { ... }` structure rather than treating illegal proposals
/// as a distinct rejection case.
pub fn anneal(
    matrix: &AllPairsMatrix,
    depots: &[usize],
    initial: Vec<PickDrop>,
    deadline: Instant,
    rng: &mut PlannerRng,
) -> Vec<PickDrop> {
    if initial.len() < 2 {
        return initial;
    }

    let mut current = initial.clone();
    let mut current_cost = solution_cost(matrix, depots, &current);
    let mut best = current.clone();
    let mut best_cost = current_cost;
    let mut temperature = INITIAL_TEMPERATURE;
    let mut stagnant_steps: u32 = 0;

    while Instant::now() < deadline {
        let perturbation = choose_perturbation(current.len(), temperature, rng);
        let mut candidate = current.clone();
        apply(&mut candidate, &perturbation);

        if !legal_move(&candidate) {
            continue;
        }

        let candidate_cost = solution_cost(matrix, depots, &candidate);
        let delta = candidate_cost - current_cost;
        let accept = delta < 0.0 || rng.gen_bool((-delta / temperature.max(MIN_TEMPERATURE)).exp());

        if accept {
            current = candidate;
            current_cost = candidate_cost;
            if current_cost < best_cost {
                best = current.clone();
                best_cost = current_cost;
                stagnant_steps = 0;
            } else {
                stagnant_steps += 1;
            }
        } else {
            stagnant_steps += 1;
        }

        if stagnant_steps >= STAGNATION_LIMIT {
            current = best.clone();
            current_cost = best_cost;
            temperature *= SHARP_COOLING;
            stagnant_steps = 0;
        } else {
            temperature *= GENTLE_COOLING;
        }
    }

    best
}

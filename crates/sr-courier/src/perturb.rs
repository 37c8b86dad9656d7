//! Perturbation operators used by simulated annealing to propose neighbor
//! solutions. Each operator's random index choice is windowed as the
//! original planner windows it — not uniform over the whole array — so the
//! acceptance-rate behavior under cooling matches what the thresholds in
//! [`choose_perturbation`] were tuned against.

use sr_core::PlannerRng;

use crate::types::PickDrop;

/// Move the record at `from` to position `to`, shifting everything between.
pub fn shift(solution: &mut Vec<PickDrop>, from: usize, to: usize) {
    if from == to || from >= solution.len() || to >= solution.len() {
        return;
    }
    let record = solution.remove(from);
    solution.insert(to, record);
}

/// Swap the records at `a` and `b`.
pub fn swap(solution: &mut [PickDrop], a: usize, b: usize) {
    if a == b || a >= solution.len() || b >= solution.len() {
        return;
    }
    solution.swap(a, b);
}

/// Reverse the subsequence `[from, to]` inclusive.
pub fn reverse_subsequence(solution: &mut [PickDrop], from: usize, to: usize) {
    if from >= solution.len() || to >= solution.len() {
        return;
    }
    let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
    solution[lo..=hi].reverse();
}

/// Which operator to apply next, carrying the indices it was drawn with.
pub enum Perturbation {
    Shift { from: usize, to: usize },
    Swap { a: usize, b: usize },
    ReverseSubsequence { from: usize, to: usize },
}

/// Draw `shift`'s `(from, to)`: a random position and a reinsertion point
/// within 10 slots of it.
fn draw_shift(len: usize, rng: &mut PlannerRng) -> (usize, usize) {
    let from = rng.gen_range(0..len);
    let lo = from.saturating_sub(10);
    let hi = (from + 10).min(len - 1);
    let to = rng.gen_range(lo..=hi);
    (from, to)
}

/// Draw `swap`'s `(a, b)`: a random position and a second position within a
/// window that shrinks as the temperature cools, wrapping around the array.
fn draw_swap(len: usize, temperature: f64, rng: &mut PlannerRng) -> (usize, usize) {
    let a = rng.gen_range(0..len);
    let window = (1usize).max((len as f64 * temperature / 10_000.0).round() as usize);
    let offset = rng.gen_range(0..=2 * window) as isize - window as isize;
    let b = (a as isize + offset).rem_euclid(len as isize) as usize;
    (a, b)
}

/// Draw `reverse_subsequence`'s `(from, to)`: a random start and a window of
/// length `max(2, len)` clipped to the array's tail — in practice this
/// reverses from the start index through the end of the array.
fn draw_reverse_subsequence(len: usize, rng: &mut PlannerRng) -> (usize, usize) {
    let from = rng.gen_range(0..len);
    let window = len.max(2);
    let to = (from + window - 1).min(len - 1);
    (from, to)
}

/// Mirrors the original's thresholds: a hot run favors the cheap, local
/// `swap`; a cooling-but-still-warm run favors `reverse_subsequence`;
/// otherwise fall back to `shift`.
pub fn choose_perturbation(len: usize, temperature: f64, rng: &mut PlannerRng) -> Perturbation {
    let r = rng.gen_range(0..100);
    if r < 5 && temperature > 50.0 {
        let (a, b) = draw_swap(len, temperature, rng);
        Perturbation::Swap { a, b }
    } else if r < 25 && temperature > 20.0 {
        let (from, to) = draw_reverse_subsequence(len, rng);
        Perturbation::ReverseSubsequence { from, to }
    } else {
        let (from, to) = draw_shift(len, rng);
        Perturbation::Shift { from, to }
    }
}

pub fn apply(solution: &mut Vec<PickDrop>, perturbation: &Perturbation) {
    match *perturbation {
        Perturbation::Shift { from, to } => shift(solution, from, to),
        Perturbation::Swap { a, b } => swap(solution, a, b),
        Perturbation::ReverseSubsequence { from, to } => reverse_subsequence(solution, from, to),
    }
}

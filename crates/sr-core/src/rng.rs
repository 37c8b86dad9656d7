//! Deterministic RNG wrapper shared by the courier planner's greedy
//! construction and simulated-annealing stages.
//!
//! # Determinism strategy
//!
//! A run is seeded once from a single `u64`. Each of the planner's
//! independent multi-start attempts derives its own child RNG via
//! [`PlannerRng::child`], mixed with the attempt index:
//!
//!   seed = parent_draw XOR (index * MIXING_CONSTANT)
//!
//! so that re-running the planner with the same seed and the same number of
//! attempts reproduces byte-identical solutions regardless of which thread
//! happened to run which attempt.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// A deterministic RNG handle. `!Sync` by construction (holds a `SmallRng`),
/// so each parallel worker must own its own instance.
pub struct PlannerRng(SmallRng);

impl PlannerRng {
    pub fn new(seed: u64) -> Self {
        PlannerRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent child RNG for sub-task `index` (e.g. a
    /// multi-start attempt number), deterministic given `self`'s current
    /// state and `index`.
    pub fn child(&mut self, index: u64) -> PlannerRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ index.wrapping_mul(MIXING_CONSTANT);
        PlannerRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Choose a random element from a non-empty slice.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

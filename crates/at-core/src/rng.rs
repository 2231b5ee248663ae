//! Deterministic per-plane and model-construction RNGs.
//!
//! Each plane owns a `SmallRng` seeded from
//!
//!   seed = run_seed XOR (agent_id * golden-ratio constant)
//!
//! so its random walk depends only on the run seed, its own id, and what it
//! sees on the grid, never on how many draws other planes made earlier in
//! the tick.  Model construction (airport cells, runway counts, plane routes)
//! draws from one `SimRng` seeded with the run seed.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant; spreads consecutive ids across
/// the seed space.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// A plane's private RNG.  Only that plane's `advance` draws from it.
pub struct AgentRng(SmallRng);

impl AgentRng {
    pub fn new(run_seed: u64, agent: AgentId) -> Self {
        let seed = run_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// One uniform draw from `slice`; `None` if it is empty.  Successive
    /// calls draw with replacement.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.0)
    }
}

/// RNG for building the model, before the first tick.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.0)
    }
}

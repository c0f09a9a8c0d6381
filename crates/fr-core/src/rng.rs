//! Deterministic per-agent and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! A run has one root seed (`SimConfig::seed`).  Everything random derives
//! from it:
//!
//! - `SimRng` (seeded directly) draws the per-step activation permutation and
//!   samples points inside zone polygons.
//! - Each household gets its own `AgentRng` seeded by
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//!   and draws the decision jitter.  Jitter therefore does not depend on the
//!   order agents are visited in, only on the agent and the seed.
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//!
//! Both wrappers implement [`RngCore`], so any `rand` distribution (and the
//! behavior crate's `&mut dyn RngCore` seams) can consume them directly.

use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Forward `RngCore` to the wrapped `SmallRng`.
macro_rules! forward_rng_core {
    ($name:ident) => {
        impl RngCore for $name {
            #[inline]
            fn next_u32(&mut self) -> u32 {
                self.0.next_u32()
            }

            #[inline]
            fn next_u64(&mut self) -> u64 {
                self.0.next_u64()
            }

            #[inline]
            fn fill_bytes(&mut self, dest: &mut [u8]) {
                self.0.fill_bytes(dest)
            }

            #[inline]
            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
                self.0.try_fill_bytes(dest)
            }
        }
    };
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-household RNG.  Only the decision jitter draws from it.
pub struct AgentRng(SmallRng);

impl AgentRng {
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ u64::from(agent.0).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }
}

forward_rng_core!(AgentRng);

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Run-level RNG: activation order, spatial sampling, entropy seeding.
///
/// Touched only by the builder and the single-threaded step loop.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.  Runs built this way are not reproducible; this
    /// is only used when a config leaves `seed` unset.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Root seed for the per-household RNGs of an entropy-seeded run.
    pub fn next_seed(&mut self) -> u64 {
        self.0.next_u64()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// A uniformly random visiting order over `count` households.
    pub fn permutation(&mut self, count: usize) -> Vec<AgentId> {
        let mut order: Vec<AgentId> = (0..count).filter_map(AgentId::from_index).collect();
        order.shuffle(&mut self.0);
        order
    }
}

forward_rng_core!(SimRng);

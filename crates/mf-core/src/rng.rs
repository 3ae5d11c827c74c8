//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! A comparison run owns one root `SimRng` seeded from the config.  Tasks are
//! drawn from the root in trial order; every agent run that needs its own
//! randomness gets a child stream:
//!
//!   child_seed = root.next_u64() XOR (offset * MIXING_CONSTANT)
//!
//! Children are derived sequentially before any trial runs, so results are
//! identical whether trials are executed one after another or in parallel.
//!
//! Consumers never take `SimRng` directly.  They accept `&mut dyn RngCore`,
//! which lets tests substitute `rand::rngs::mock::StepRng`.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded simulation RNG.
///
/// `Send` but deliberately not shared: give each worker its own child.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed = self.0.next_u64() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// The underlying generator, for APIs taking `&mut dyn RngCore`.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}

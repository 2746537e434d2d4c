//! Random number generator abstraction for determinism.
//!
//! In production, this wraps a real RNG that is re-seeded to a fixed
//! constant before every draw. In tests, a mock implementation is injected.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The fixed seed the production generator is reset to before every roll.
pub const DEFAULT_SEED: u64 = 42;

/// Abstraction over random number generation.
///
/// Callers that roll dice invoke `reseed` immediately before drawing, so
/// the generator restarts its sequence on every roll rather than advancing
/// a running stream. The trait is consumed through `&mut`, which makes a
/// reseed/draw pair exclusive within one borrow; callers sharing a single
/// generator across threads must hold a `Mutex` guard across the whole
/// roll call so the pair stays one critical section.
pub trait DiceRng: Send + Sync {
    /// Reset the generator to its fixed seed.
    fn reseed(&mut self);

    /// Generate a random `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;
}

/// Production RNG that restarts a [`StdRng`] from a remembered seed on
/// every `reseed` call.
#[derive(Debug, Clone)]
pub struct FixedSeedRng {
    seed: u64,
    rng: StdRng,
}

impl FixedSeedRng {
    /// Create a generator that reseeds to the given constant.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for FixedSeedRng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl DiceRng for FixedSeedRng {
    fn reseed(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }

    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        self.rng.random_range(min..=max)
    }
}

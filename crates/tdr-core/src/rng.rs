//! Deterministic seeded RNG for synthetic workloads.
//!
//! # Determinism strategy
//!
//! The routing engine itself is fully deterministic and never consumes
//! randomness.  `GenRng` exists for the surrounding tooling — synthetic
//! network generation and randomized comparison tests — where reproducibility
//! matters: the same seed always produces the same network and the same
//! query batch.
//!
//! Child streams are derived with golden-ratio seed mixing so consecutive
//! offsets spread uniformly across the seed space and never share state.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded deterministic RNG wrapper around `SmallRng`.
///
/// The type is `!Sync` to prevent accidental sharing across threads — give
/// each consumer its own [`GenRng::child`] stream instead.
pub struct GenRng(SmallRng);

impl GenRng {
    pub fn new(seed: u64) -> Self {
        GenRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `GenRng` with a different seed offset — useful for
    /// seeding independent streams (edges vs. queries) from one root seed.
    pub fn child(&mut self, offset: u64) -> GenRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        GenRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

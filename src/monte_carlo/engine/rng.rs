//! Seedable random source for repeated trials.

use rand::rngs::StdRng;
use rand::{Error, RngCore, SeedableRng};

/// Random number generator that remembers its seed.
///
/// Wraps [`StdRng`] and implements [`RngCore`], so it can be handed to any
/// function taking `R: Rng + ?Sized`. A run seeded from entropy still
/// records the seed it drew, which makes every run replayable.
#[derive(Debug, Clone)]
pub struct MonteCarloRng {
    inner: StdRng,
    seed: u64,
}

impl MonteCarloRng {
    /// Create a generator from a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a generator from a seed drawn from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().next_u64())
    }

    /// Seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Independent generator for sub-stream `stream`.
    ///
    /// The same `(seed, stream)` pair always yields the same generator.
    #[must_use]
    pub fn fork(&self, stream: u64) -> Self {
        Self::new(splitmix64(self.seed ^ splitmix64(stream)))
    }

    /// Uniform sample in `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        (self.inner.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

impl RngCore for MonteCarloRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.inner.try_fill_bytes(dest)
    }
}

/// SplitMix64 finaliser (Steele et al., 2014).
fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

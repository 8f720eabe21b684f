use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Injectable source of uniform randomness in `[0, 1)`.
///
/// The selector draws through this trait so that a fixed seed, catalog,
/// preferences, and history reproduce the exact same result.
pub trait RandomSource: Send {
    fn next_f64(&mut self) -> f64;

    /// Uniform index into a collection of the given non-zero length
    fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        let index = (self.next_f64() * len as f64) as usize;
        // next_f64 < 1.0 keeps this in range; the clamp guards rounding
        index.min(len - 1)
    }
}

/// Production source backed by OS entropy
#[derive(Debug)]
pub struct OsRandom(SmallRng);

impl OsRandom {
    pub fn new() -> Self {
        Self(SmallRng::from_os_rng())
    }
}

impl Default for OsRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for OsRandom {
    fn next_f64(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Deterministic source for tests
#[derive(Debug)]
pub struct SeededRandom(SmallRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

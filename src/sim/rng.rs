//! Random sources for spawning
//!
//! The spawner only ever asks for uniform floats and bounded indices, so the
//! trait stays that small. Runs are seedable but carry no replay guarantee.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform random numbers consumed by the spawner
pub trait RandomSource {
    /// Uniform float in `[0, 1)`
    fn next_f32(&mut self) -> f32;

    /// Uniform index in `[0, n)`; `n` must be non-zero
    fn next_index(&mut self, n: usize) -> usize;

    /// Uniform float in `[lo, hi]`
    fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_f32() * (hi - lo)
    }
}

/// Seeded PCG32 source
#[derive(Debug, Clone)]
pub struct PcgRandom {
    seed: u64,
    rng: Pcg32,
}

impl PcgRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from the thread RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for PcgRandom {
    fn next_f32(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    fn next_index(&mut self, n: usize) -> usize {
        self.rng.random_range(0..n)
    }
}

/// Cycles through a fixed list of unit values
///
/// `next_f32` returns the values in order; `next_index(n)` maps the next
/// value onto `[0, n)`. Useful for pinning spawns in tests and demos.
#[derive(Debug, Clone)]
pub struct FixedRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl FixedRandom {
    /// Values are clamped into `[0, 1)`; an empty list behaves like `[0.0]`
    pub fn new(values: Vec<f32>) -> Self {
        let mut values: Vec<f32> = values
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f32::EPSILON))
            .collect();
        if values.is_empty() {
            values.push(0.0);
        }
        Self { values, cursor: 0 }
    }

    /// Always returns the same value
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for FixedRandom {
    fn next_f32(&mut self) -> f32 {
        let v = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        v
    }

    fn next_index(&mut self, n: usize) -> usize {
        ((self.next_f32() * n as f32) as usize).min(n - 1)
    }
}

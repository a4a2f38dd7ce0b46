//! Injectable random sources.
//!
//! The engine never reaches for a hidden global RNG: every cast consumes an
//! explicit [`RandomSource`]. The production source wraps a seedable
//! [`StdRng`]; [`ReplaySource`] replays a fixed sequence for deterministic
//! tests.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A supplier of uniform random draws in `[0, 1)`.
pub trait RandomSource {
    /// The next uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// A random source backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    /// Create a reproducible source from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for SeededSource {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// A source that cycles through a fixed sequence of draws.
///
/// Intended for tests and replays; draws repeat from the start once the
/// sequence is exhausted.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    draws: Vec<f64>,
    at: usize,
}

impl ReplaySource {
    /// Create a source that cycles through the given draws.
    ///
    /// An empty sequence is treated as a single 0.0 draw.
    pub fn new(draws: Vec<f64>) -> Self {
        let draws = if draws.is_empty() { vec![0.0] } else { draws };
        Self { draws, at: 0 }
    }

    /// A source that always returns the same draw.
    pub fn constant(draw: f64) -> Self {
        Self::new(vec![draw])
    }
}

impl RandomSource for ReplaySource {
    fn next_unit(&mut self) -> f64 {
        let draw = self.draws[self.at];
        self.at = (self.at + 1) % self.draws.len();
        draw
    }
}

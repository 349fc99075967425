//! RNG module - uniform candy generation
//!
//! Every refilled cell draws an independent candy, uniform over the palette.
//! The generator can be seeded so tests and replays see the same boards.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Candy;

/// Candy generator backed by `StdRng`
#[derive(Debug, Clone)]
pub struct CandyRng {
    rng: StdRng,
}

impl CandyRng {
    /// Create a generator with the given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded when `seed` is given, entropy otherwise
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Draw a candy uniformly from the palette
    pub fn next_candy(&mut self) -> Candy {
        Candy::ALL[self.rng.random_range(0..Candy::COUNT)]
    }

    /// Generate random value in range [0, max)
    pub fn next_index(&mut self, max: usize) -> usize {
        self.rng.random_range(0..max.max(1))
    }

    /// Pick one element uniformly, None for an empty slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_index(items.len()))
    }
}

impl Default for CandyRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

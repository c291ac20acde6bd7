//! Seeded random sampling
//!
//! Every random draw in the simulation goes through [`GameRng`] so a run is
//! fully reproducible from its seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::Color;

/// Seeded generator for spawn attributes
#[derive(Debug, Clone)]
pub struct GameRng {
    seed: u64,
    inner: Pcg32,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this generator was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `[min, max]`, both ends inclusive
    pub fn random_int(&mut self, min: i32, max: i32) -> i32 {
        assert!(min <= max, "random_int: empty range [{min}, {max}]");
        self.inner.random_range(min..=max)
    }

    /// Opaque color with three independent channel draws
    pub fn random_color(&mut self) -> Color {
        let r = self.random_int(0, 255) as u8;
        let g = self.random_int(0, 255) as u8;
        let b = self.random_int(0, 255) as u8;
        Color::rgb(r, g, b)
    }

    /// Pick one element uniformly
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> T {
        assert!(!items.is_empty(), "choose: no items");
        let index = self.random_int(0, items.len() as i32 - 1);
        items[index as usize]
    }
}

//! Deterministic random number generation for agents and self-play.
//!
//! The engine itself is fully deterministic and never draws random numbers.
//! Randomness only enters through agents (e.g. `RandomAgent`) and through
//! self-play seeding, both of which use `GameRng` so a run is reproducible
//! from its seed.
//!
//! ```
//! use battle_chess::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut branch = rng.fork();
//!
//! let mut rng2 = GameRng::new(42);
//! let mut branch2 = rng2.fork();
//!
//! // Forks are deterministic.
//! assert_eq!(branch.seed(), branch2.seed());
//! let items = [1, 2, 3, 4, 5];
//! assert_eq!(branch.choose(&items), branch2.choose(&items));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 RNG with deterministic forking.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG into an independent, deterministic branch.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);
        let items: Vec<u32> = (0..1000).collect();

        for _ in 0..100 {
            assert_eq!(rng1.choose(&items), rng2.choose(&items));
        }
    }

    #[test]
    fn test_forks_differ_from_parent() {
        let mut rng = GameRng::new(7);
        let fork_a = rng.fork();
        let fork_b = rng.fork();

        assert_ne!(fork_a.seed(), fork_b.seed());
        assert_ne!(fork_a.seed(), rng.seed());
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(1);
        let items = [10, 20, 30];
        let picked = rng.choose(&items).unwrap();
        assert!(items.contains(picked));

        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}

//! Seeded randomness for search and rollouts.
//!
//! A search owns one [`GameRng`] for tie-breaks and expansion order, and
//! hands every rollout a fresh fork of it. Two searches with the same seed
//! over the same position therefore draw identical numbers.
//!
//! ```
//! use baghchal_mcts::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! let moves = ["a1", "b2", "c3", "d4"];
//!
//! let (mut ra, mut rb) = (a.fork(), b.fork());
//! assert_eq!(ra.choose(&moves), rb.choose(&moves));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Golden-ratio stride between fork seeds.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic ChaCha8 stream that can spawn independent forks.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Child generator with its own stream.
    ///
    /// The n-th fork of a given seed is always the same, and forking does
    /// not advance this generator's own stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.stream.gen_range(0..len)
    }

    /// Uniformly chosen element, or `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let i = self.index(items.len());
        items.get(i)
    }

    /// Remove and return a uniformly chosen element. Order is not kept.
    pub fn take<T>(&mut self, items: &mut Vec<T>) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let i = self.index(items.len());
        Some(items.swap_remove(i))
    }
}

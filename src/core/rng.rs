//! Deterministic random number generation for reward draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical draws
//! - **Forkable**: Independent streams for batch simulations
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use pack_flow::core::DrawRng;
//!
//! let mut rng = DrawRng::new(42);
//! let mut pool = vec![1, 2, 3, 4, 5];
//! rng.shuffle(&mut pool);
//!
//! // Same seed, same shuffle
//! let mut again = DrawRng::new(42);
//! let mut pool2 = vec![1, 2, 3, 4, 5];
//! again.shuffle(&mut pool2);
//! assert_eq!(pool, pool2);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG used by the reward-draw policy.
///
/// Uses ChaCha8 for speed while keeping the shuffle uniform.
#[derive(Clone, Debug)]
pub struct DrawRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl DrawRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> DrawRngState {
        DrawRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DrawRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state for checkpointing a flow.
///
/// Uses the ChaCha8 word position, so capture is O(1) no matter how
/// many draws have happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(rng: &mut DrawRng) -> Vec<u32> {
        let mut data: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut data);
        data
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = DrawRng::new(42);
        let mut rng2 = DrawRng::new(42);

        for _ in 0..10 {
            assert_eq!(shuffled(&mut rng1), shuffled(&mut rng2));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = DrawRng::new(1);
        let mut rng2 = DrawRng::new(2);

        assert_ne!(shuffled(&mut rng1), shuffled(&mut rng2));
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = DrawRng::new(42);
        let mut forked = rng.fork();

        assert_ne!(shuffled(&mut rng), shuffled(&mut forked));
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = DrawRng::new(42);
        let mut rng2 = DrawRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();

        assert_eq!(forked1.seed(), forked2.seed());
        assert_ne!(forked1.seed(), rng1.seed());
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = DrawRng::new(42);
        let mut data = shuffled(&mut rng);

        assert_ne!(data, (0..20).collect::<Vec<_>>());
        data.sort_unstable();
        assert_eq!(data, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_state_restore() {
        let mut rng = DrawRng::new(42);

        // Advance the RNG
        for _ in 0..5 {
            shuffled(&mut rng);
        }

        let state = rng.state();
        let expected = shuffled(&mut rng);

        let mut restored = DrawRng::from_state(&state);
        assert_eq!(shuffled(&mut restored), expected);
    }

    #[test]
    fn test_state_serde() {
        let state = DrawRngState {
            seed: 42,
            word_pos: 12345,
            fork_counter: 5,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: DrawRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_state_preserves_fork_counter() {
        let mut rng = DrawRng::new(42);

        let _ = rng.fork();
        let _ = rng.fork();

        let state = rng.state();
        assert_eq!(state.fork_counter, 2);

        let restored = DrawRng::from_state(&state);
        assert_eq!(restored.state().fork_counter, 2);
    }
}

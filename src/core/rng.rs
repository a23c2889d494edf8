//! Seedable random source for cavern generation.
//!
//! Placement uses rejection sampling, so the only operation generation needs
//! is a uniform index draw. The RNG is owned by the caller and passed into
//! generation explicitly; there is no global generator.
//!
//! ```
//! use fountain_cavern::core::CavernRng;
//!
//! let mut a = CavernRng::new(7);
//! let mut b = CavernRng::new(7);
//! assert_eq!(a.gen_index(9), b.gen_index(9));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG used for board generation.
///
/// Uses ChaCha8 so a seed reproduces the same cavern on every platform.
#[derive(Clone, Debug)]
pub struct CavernRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl CavernRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The drawn seed is kept, so `state()` still reproduces the stream.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen::<u64>();
        Self::new(seed)
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a uniform index in `0..bound`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn gen_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    /// Get the current state for reproduction.
    #[must_use]
    pub fn state(&self) -> CavernRngState {
        CavernRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &CavernRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG position.
///
/// Uses the ChaCha8 word position, so capture is O(1) regardless of how many
/// draws have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CavernRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

//! Guess selection policies
//!
//! Defines the `GuessPolicy` trait and concrete implementations. Randomness is
//! isolated behind a seedable generator owned by the policy, so simulations
//! can be replayed deterministically.

use crate::core::Word;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// A policy for producing the next guess from the candidate pool
pub trait GuessPolicy {
    /// Produce the next guess given the current pool
    ///
    /// Returns `None` when the pool is empty.
    fn next_guess(&mut self, pool: &[Word]) -> Option<Word>;
}

/// Enum wrapper for all policy types
///
/// Allows runtime selection of a policy while keeping static dispatch.
pub enum PolicyType {
    /// Fixed opening word, then uniform random
    Opener(FixedOpener),
    /// Uniform random draw from the pool (default)
    Random(UniformRandom),
}

impl GuessPolicy for PolicyType {
    fn next_guess(&mut self, pool: &[Word]) -> Option<Word> {
        match self {
            Self::Opener(p) => p.next_guess(pool),
            Self::Random(p) => p.next_guess(pool),
        }
    }
}

impl PolicyType {
    /// Build a policy from CLI inputs
    ///
    /// An opener word forces round 1; a seed makes the random draws
    /// reproducible.
    #[must_use]
    pub fn from_options(opener: Option<Word>, rng_seed: Option<u64>) -> Self {
        let random = match rng_seed {
            Some(seed) => UniformRandom::seeded(seed),
            None => UniformRandom::new(),
        };
        match opener {
            Some(word) => Self::Opener(FixedOpener::new(word, random)),
            None => Self::Random(random),
        }
    }
}

/// Uniform random draw from the current pool
pub struct UniformRandom {
    rng: StdRng,
}

impl UniformRandom {
    /// Policy with operating-system entropy
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Policy with a fixed seed, for reproducible runs
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl GuessPolicy for UniformRandom {
    fn next_guess(&mut self, pool: &[Word]) -> Option<Word> {
        pool.choose(&mut self.rng).cloned()
    }
}

/// Fixed round-1 word, then uniform random from the pool
///
/// Mirrors the common human opener habit: always start with the same word.
pub struct FixedOpener {
    opener: Word,
    played: bool,
    rest: UniformRandom,
}

impl FixedOpener {
    #[must_use]
    pub const fn new(opener: Word, rest: UniformRandom) -> Self {
        Self {
            opener,
            played: false,
            rest,
        }
    }
}

impl GuessPolicy for FixedOpener {
    fn next_guess(&mut self, pool: &[Word]) -> Option<Word> {
        if self.played {
            return self.rest.next_guess(pool);
        }
        self.played = true;
        Some(self.opener.clone())
    }
}

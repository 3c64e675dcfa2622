//! Single-game simulation command
//!
//! Simulates one game against a known target and returns the round-by-round
//! narrowing of the candidate pool.

use crate::core::{Feedback, Word};
use crate::game::{GameState, GuessPolicy, PolicyType, Session};
use rustc_hash::FxHashSet;

/// Configuration for simulating one game
pub struct SolveConfig {
    pub target: String,
    /// Fixed round-1 word, if any
    pub opener: Option<String>,
    /// Seed for the random guess draws; omit for OS entropy
    pub rng_seed: Option<u64>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            opener: None,
            rng_seed: None,
        }
    }
}

/// Result of simulating one game
pub struct SolveResult {
    pub target: String,
    pub state: GameState,
    pub rounds: Vec<RoundRecord>,
    /// Letters confirmed absent from the target across all rounds
    pub misses: FxHashSet<u8>,
}

/// A single round in the simulation
pub struct RoundRecord {
    pub word: String,
    pub feedback: Feedback,
    pub pool_before: usize,
    pub pool_after: usize,
}

/// Simulate one game against the configured target
///
/// # Errors
///
/// Returns an error if:
/// - The target or opener word is invalid (wrong length or characters)
/// - The dictionary is empty
pub fn solve_word(config: SolveConfig, dictionary: &[Word]) -> Result<SolveResult, String> {
    let target = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;

    let opener = config
        .opener
        .as_deref()
        .map(Word::new)
        .transpose()
        .map_err(|e| format!("Invalid opener word: {e}"))?;

    let mut session =
        Session::new(target, dictionary).map_err(|e| format!("Cannot start game: {e}"))?;
    let mut policy = PolicyType::from_options(opener, config.rng_seed);

    let mut rounds = Vec::new();

    while session.state() == GameState::Active {
        let pool_before = session.pool_size();

        let Some(guess) = policy.next_guess(session.pool()) else {
            break;
        };

        // The session is Active, so the round cannot be refused
        let report = session
            .play_round(&guess)
            .map_err(|e| format!("Round failed: {e}"))?;

        rounds.push(RoundRecord {
            word: report.guess.text().to_string(),
            feedback: report.feedback,
            pool_before,
            pool_after: report.pool_size,
        });
    }

    Ok(SolveResult {
        target: config.target,
        state: session.state(),
        rounds,
        misses: session.misses().clone(),
    })
}

//! Game session and solver loop
//!
//! A `Session` exclusively owns one game's candidate pool and accumulated
//! misses. Each round is a pure sequence: remove the guess from the pool,
//! classify feedback against the target, filter, transition state. There is
//! no shared state between sessions.

use super::pool::CandidatePool;
use super::policy::GuessPolicy;
use crate::core::{Feedback, Word};
use rustc_hash::FxHashSet;
use std::fmt;

/// State of a running game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Still narrowing the pool
    Active,
    /// The target was guessed; terminal
    Solved,
    /// The pool emptied before the target was found; terminal.
    /// Indicates a filtering defect or an inconsistent target/dictionary
    /// pairing, never an expected puzzle outcome.
    Contradiction,
}

impl GameState {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// Errors local to a single game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// No words available to seed the candidate pool
    EmptyDictionary,
    /// The pool emptied before the target was found
    Contradiction { rounds: usize },
    /// A guess was submitted after the session reached a terminal state
    Finished,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDictionary => write!(f, "Cannot start a game with an empty dictionary"),
            Self::Contradiction { rounds } => {
                write!(f, "Candidate pool emptied after {rounds} rounds without finding the target")
            }
            Self::Finished => write!(f, "Game has already finished"),
        }
    }
}

impl std::error::Error for GameError {}

/// What one round produced: the feedback and the narrowed pool size
#[derive(Debug, Clone)]
pub struct RoundReport {
    pub guess: Word,
    pub feedback: Feedback,
    pub pool_size: usize,
    pub state: GameState,
}

/// Result of running a session to completion
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub target: Word,
    /// Rounds executed, including the winning guess
    pub guesses: usize,
}

/// One game instance: target, pool, and accumulated misses
pub struct Session {
    target: Word,
    pool: CandidatePool,
    misses: FxHashSet<u8>,
    rounds: usize,
    state: GameState,
}

impl Session {
    /// Start a game against `target` with a pool seeded from `dictionary`
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` if the dictionary has no words.
    pub fn new(target: Word, dictionary: &[Word]) -> Result<Self, GameError> {
        if dictionary.is_empty() {
            return Err(GameError::EmptyDictionary);
        }

        Ok(Self {
            target,
            pool: CandidatePool::new(dictionary),
            misses: FxHashSet::default(),
            rounds: 0,
            state: GameState::Active,
        })
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Rounds played so far
    #[inline]
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    #[inline]
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    /// Remaining candidate words
    #[inline]
    #[must_use]
    pub fn pool(&self) -> &[Word] {
        self.pool.words()
    }

    /// Letters confirmed absent from the target across all rounds
    ///
    /// Diagnostic only; each round's feedback is self-sufficient for filtering.
    #[inline]
    #[must_use]
    pub const fn misses(&self) -> &FxHashSet<u8> {
        &self.misses
    }

    /// Play one round with the given guess
    ///
    /// Removes the guess from the pool (a word is never guessed twice),
    /// classifies feedback against the target, accumulates misses, filters
    /// the pool, and transitions state.
    ///
    /// # Errors
    /// Returns `GameError::Finished` if the session is already terminal.
    pub fn play_round(&mut self, guess: &Word) -> Result<RoundReport, GameError> {
        if self.state.is_terminal() {
            return Err(GameError::Finished);
        }

        self.rounds += 1;
        self.pool.remove(guess);

        let feedback = Feedback::classify(guess, &self.target);
        self.misses.extend(feedback.absent().iter().copied());
        self.pool.apply(&feedback);

        // A winning guess always empties the pool (the target was just
        // removed as "already tried"), so check it before the pool
        self.state = if guess == &self.target {
            GameState::Solved
        } else if self.pool.is_empty() {
            GameState::Contradiction
        } else {
            GameState::Active
        };

        Ok(RoundReport {
            guess: guess.clone(),
            feedback,
            pool_size: self.pool.len(),
            state: self.state,
        })
    }

    /// Drive the session to a terminal state with the given guess policy
    ///
    /// # Errors
    /// Returns `GameError::Contradiction` if the pool empties before the
    /// target is found; this is surfaced distinctly and never conflated with
    /// a solve.
    pub fn run<P: GuessPolicy>(&mut self, policy: &mut P) -> Result<GameOutcome, GameError> {
        while self.state == GameState::Active {
            let guess = policy
                .next_guess(self.pool.words())
                .ok_or(GameError::Contradiction { rounds: self.rounds })?;
            self.play_round(&guess)?;
        }

        match self.state {
            GameState::Solved => Ok(GameOutcome {
                target: self.target.clone(),
                guesses: self.rounds,
            }),
            _ => Err(GameError::Contradiction { rounds: self.rounds }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::policy::{FixedOpener, GuessPolicy, UniformRandom};

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn session_rejects_empty_dictionary() {
        let result = Session::new(word("crane"), &[]);
        assert_eq!(result.err(), Some(GameError::EmptyDictionary));
    }

    #[test]
    fn session_round_narrows_pool_and_keeps_target() {
        let dictionary = words(&["crane", "slate", "adieu", "crate", "trace"]);
        let mut session = Session::new(word("crate"), &dictionary).unwrap();

        let report = session.play_round(&word("crane")).unwrap();

        assert_eq!(report.state, GameState::Active);
        assert!(report.pool_size <= dictionary.len() - 1);
        assert!(session.pool().contains(&word("crate")));
    }

    #[test]
    fn session_solves_when_target_guessed() {
        let dictionary = words(&["crane", "slate", "adieu", "crate", "trace"]);
        let mut session = Session::new(word("crate"), &dictionary).unwrap();

        session.play_round(&word("crane")).unwrap();
        let report = session.play_round(&word("crate")).unwrap();

        assert_eq!(report.state, GameState::Solved);
        assert!(report.feedback.is_all_hits());
        assert_eq!(session.rounds(), 2);
    }

    #[test]
    fn session_win_is_never_reported_as_contradiction() {
        let dictionary = words(&["crane"]);
        let mut session = Session::new(word("crane"), &dictionary).unwrap();

        // The winning guess empties the pool; state must still be Solved
        let report = session.play_round(&word("crane")).unwrap();
        assert_eq!(report.state, GameState::Solved);
        assert_eq!(report.pool_size, 0);
    }

    #[test]
    fn session_detects_contradiction() {
        // Target is not in the dictionary, so feedback eventually refutes
        // every candidate
        let dictionary = words(&["crane", "slate", "trace"]);
        let mut session = Session::new(word("jumbo"), &dictionary).unwrap();

        let mut state = GameState::Active;
        for candidate in ["crane", "slate", "trace"] {
            if state.is_terminal() {
                break;
            }
            state = session.play_round(&word(candidate)).unwrap().state;
        }

        assert_eq!(state, GameState::Contradiction);
    }

    #[test]
    fn session_rejects_guesses_after_terminal_state() {
        let dictionary = words(&["crane"]);
        let mut session = Session::new(word("crane"), &dictionary).unwrap();

        session.play_round(&word("crane")).unwrap();
        let result = session.play_round(&word("crane"));
        assert_eq!(result.err(), Some(GameError::Finished));
    }

    #[test]
    fn session_accumulates_misses_across_rounds() {
        let dictionary = words(&["crane", "slate", "adieu", "crate", "trace"]);
        let mut session = Session::new(word("crate"), &dictionary).unwrap();

        session.play_round(&word("adieu")).unwrap();
        session.play_round(&word("slate")).unwrap();

        // ADIEU gives up D, I, U; SLATE gives up S, L
        for letter in [b'd', b'i', b'u', b's', b'l'] {
            assert!(session.misses().contains(&letter));
        }
        // Letters of the target never accumulate
        assert!(!session.misses().contains(&b'c'));
        assert!(!session.misses().contains(&b'a'));
    }

    #[test]
    fn run_solves_with_seeded_random_policy() {
        let dictionary = words(&[
            "crane", "slate", "adieu", "crate", "trace", "grate", "irate", "speed", "erase",
            "mesas", "sassy",
        ]);

        for target in &dictionary {
            let mut session = Session::new(target.clone(), &dictionary).unwrap();
            let mut policy = UniformRandom::seeded(42);
            let outcome = session.run(&mut policy).unwrap();

            assert_eq!(&outcome.target, target);
            // Each round removes at least the guess, so the dictionary size
            // bounds the round count
            assert!(outcome.guesses <= dictionary.len());
            assert!(outcome.guesses >= 1);
        }
    }

    #[test]
    fn run_with_fixed_opener_counts_opening_round() {
        let dictionary = words(&["crane", "slate", "adieu", "crate", "trace"]);
        let mut session = Session::new(word("crate"), &dictionary).unwrap();
        let mut policy = FixedOpener::new(word("crane"), UniformRandom::seeded(7));

        let outcome = session.run(&mut policy).unwrap();
        // CRANE pins C/R/A/E, leaving only CRATE for round two
        assert_eq!(outcome.guesses, 2);
    }

    #[test]
    fn run_surfaces_contradiction_for_foreign_target() {
        let dictionary = words(&["crane", "slate", "trace"]);
        let mut session = Session::new(word("jumbo"), &dictionary).unwrap();
        let mut policy = UniformRandom::seeded(3);

        let result = session.run(&mut policy);
        assert!(matches!(result, Err(GameError::Contradiction { .. })));
    }

    #[test]
    fn run_is_reproducible_with_same_seed() {
        let dictionary = words(&[
            "crane", "slate", "adieu", "crate", "trace", "grate", "irate",
        ]);

        let run_once = || {
            let mut session = Session::new(word("irate"), &dictionary).unwrap();
            let mut policy = UniformRandom::seeded(99);
            session.run(&mut policy).unwrap().guesses
        };

        assert_eq!(run_once(), run_once());
    }

    #[test]
    fn pool_shrinks_monotonically_across_rounds() {
        let dictionary = words(&[
            "crane", "slate", "adieu", "crate", "trace", "grate", "irate",
        ]);
        let mut session = Session::new(word("grate"), &dictionary).unwrap();
        let mut policy = UniformRandom::seeded(5);

        let mut previous = session.pool_size();
        while session.state() == GameState::Active {
            let guess = policy.next_guess(session.pool()).unwrap();
            let report = session.play_round(&guess).unwrap();
            assert!(report.pool_size <= previous);
            previous = report.pool_size;
        }
        assert_eq!(session.state(), GameState::Solved);
    }
}

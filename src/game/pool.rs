//! Candidate pool
//!
//! The set of dictionary words still consistent with every piece of feedback
//! seen so far. The pool only shrinks; it never gains members.

use crate::core::{Feedback, Word};

/// Mutable pool of still-possible words
///
/// Created from the dictionary at game start, filtered in place each round,
/// discarded at game end. Dictionary order is preserved but not load-bearing.
#[derive(Debug, Clone)]
pub struct CandidatePool {
    words: Vec<Word>,
}

impl CandidatePool {
    /// Seed a pool with a copy of the dictionary
    #[must_use]
    pub fn new(dictionary: &[Word]) -> Self {
        Self {
            words: dictionary.to_vec(),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Remaining words, in dictionary order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Remove a word that has been tried; no-op if it is not in the pool
    ///
    /// Returns whether the word was present.
    pub fn remove(&mut self, word: &Word) -> bool {
        let before = self.words.len();
        self.words.retain(|w| w != word);
        self.words.len() != before
    }

    /// Keep only words consistent with the feedback
    ///
    /// Single pass, O(pool size × word length). An empty pool stays empty.
    pub fn apply(&mut self, feedback: &Feedback) {
        self.words.retain(|w| feedback.admits(w));
    }
}

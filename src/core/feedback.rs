//! Feedback classification and candidate admission
//!
//! Comparing a guess against the target classifies every guess letter into one
//! of three outcomes:
//! - Hit: right letter, right position
//! - Present: letter occurs elsewhere in the target (subject to multiplicity)
//! - Absent: no remaining target occurrence justifies this letter
//!
//! Classification is consumption-based: hits consume target occurrences first,
//! then presents consume what remains, left to right. This handles duplicate
//! letters exactly the way the real game does.

use super::{WORD_LEN, Word};
use rustc_hash::FxHashSet;

/// Per-position outcome of a single guess letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Hit,
    Present,
    Absent,
}

/// Feedback from comparing one guess against the target
///
/// Holds the ordered hits and presents as (letter, position) pairs and the set
/// of letters with no justified occurrence anywhere in the guess. A letter
/// enters `absent` only if none of its occurrences earned a hit or present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    hits: Vec<(u8, usize)>,
    presents: Vec<(u8, usize)>,
    absent: FxHashSet<u8>,
}

impl Feedback {
    /// Classify `guess` against `target`
    ///
    /// Pure and deterministic. Length and alphabet are enforced at `Word`
    /// construction, so no failure mode remains here.
    ///
    /// # Algorithm
    /// 1. First pass: record hits and consume the matched target occurrences
    /// 2. Second pass, left to right: record a present for each non-hit guess
    ///    letter that still has an unconsumed target occurrence, consuming it
    /// 3. Letters whose occurrences all went unmatched form the absent set
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let feedback = Feedback::classify(&guess, &target);
    ///
    /// // A and E are hits, R is gray (SLATE has no R)
    /// assert_eq!(feedback.hits(), &[(b'a', 2), (b'e', 4)]);
    /// assert!(feedback.presents().is_empty());
    /// ```
    #[must_use]
    pub fn classify(guess: &Word, target: &Word) -> Self {
        let mut available = target.char_counts();
        let mut hit_mask = [false; WORD_LEN];

        let mut hits = Vec::new();
        let mut presents = Vec::new();
        let mut unmatched: Vec<u8> = Vec::new();

        // First pass: hits consume their target occurrence
        for i in 0..WORD_LEN {
            let letter = guess.char_at(i);
            if letter == target.char_at(i) {
                hits.push((letter, i));
                hit_mask[i] = true;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: presents consume what remains, left to right
        for i in 0..WORD_LEN {
            if hit_mask[i] {
                continue;
            }
            let letter = guess.char_at(i);
            if let Some(count) = available.get_mut(&letter)
                && *count > 0
            {
                presents.push((letter, i));
                *count -= 1;
            } else {
                unmatched.push(letter);
            }
        }

        // Absence is per letter, aggregated: a letter with any hit or present
        // occurrence is never globally absent
        let absent = unmatched
            .into_iter()
            .filter(|&letter| {
                !hits.iter().any(|&(l, _)| l == letter)
                    && !presents.iter().any(|&(l, _)| l == letter)
            })
            .collect();

        Self {
            hits,
            presents,
            absent,
        }
    }

    /// Ordered (letter, position) hits
    #[inline]
    #[must_use]
    pub fn hits(&self) -> &[(u8, usize)] {
        &self.hits
    }

    /// Ordered (letter, position) presents
    #[inline]
    #[must_use]
    pub fn presents(&self) -> &[(u8, usize)] {
        &self.presents
    }

    /// Letters with no justified occurrence in the guess
    #[inline]
    #[must_use]
    pub const fn absent(&self) -> &FxHashSet<u8> {
        &self.absent
    }

    /// True when every position is a hit (the guess is the target)
    #[inline]
    #[must_use]
    pub fn is_all_hits(&self) -> bool {
        self.hits.len() == WORD_LEN
    }

    /// Occurrences of `letter` already required by hits and presents
    fn accounted_count(&self, letter: u8) -> usize {
        self.hits.iter().filter(|&&(l, _)| l == letter).count()
            + self.presents.iter().filter(|&&(l, _)| l == letter).count()
    }

    /// Check whether a candidate word is consistent with this feedback
    ///
    /// All three rule families must hold:
    /// - every hit letter sits at its position
    /// - every present letter occurs elsewhere, and not at the guessed position
    /// - an absent letter may occur only as many times as hits/presents for
    ///   that letter already require (count-bounded, not mere membership)
    #[must_use]
    pub fn admits(&self, candidate: &Word) -> bool {
        for &(letter, position) in &self.hits {
            if candidate.char_at(position) != letter {
                return false;
            }
        }

        for &(letter, position) in &self.presents {
            // The guess placed it here and was told "elsewhere"
            if candidate.char_at(position) == letter || !candidate.has_letter(letter) {
                return false;
            }
        }

        for &letter in &self.absent {
            if candidate.count_of(letter) > self.accounted_count(letter) {
                return false;
            }
        }

        true
    }

    /// Per-position classification, in guess order
    ///
    /// Used by the output layer to render the familiar tile row.
    #[must_use]
    pub fn slots(&self) -> [Slot; WORD_LEN] {
        let mut slots = [Slot::Absent; WORD_LEN];
        for &(_, position) in &self.hits {
            slots[position] = Slot::Hit;
        }
        for &(_, position) in &self.presents {
            slots[position] = Slot::Present;
        }
        slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn absent_letters(feedback: &Feedback) -> Vec<u8> {
        let mut letters: Vec<u8> = feedback.absent().iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    #[test]
    fn classify_no_overlap() {
        let feedback = Feedback::classify(&word("abide"), &word("lorry"));

        assert!(feedback.hits().is_empty());
        assert!(feedback.presents().is_empty());
        assert_eq!(absent_letters(&feedback), b"abdei".to_vec());
    }

    #[test]
    fn classify_all_hits() {
        let feedback = Feedback::classify(&word("crane"), &word("crane"));

        assert!(feedback.is_all_hits());
        assert_eq!(feedback.hits().len(), WORD_LEN);
        assert!(feedback.presents().is_empty());
        assert!(feedback.absent().is_empty());
    }

    #[test]
    fn classify_crane_vs_crate() {
        let feedback = Feedback::classify(&word("crane"), &word("crate"));

        // C, R, A, and the final E line up; N has no home
        assert_eq!(
            feedback.hits(),
            &[(b'c', 0), (b'r', 1), (b'a', 2), (b'e', 4)]
        );
        assert!(feedback.presents().is_empty());
        assert_eq!(absent_letters(&feedback), vec![b'n']);
    }

    #[test]
    fn classify_presents_consume_left_to_right() {
        // SPEED vs ERASE: S present, both E's present, P and D absent
        let feedback = Feedback::classify(&word("speed"), &word("erase"));

        assert!(feedback.hits().is_empty());
        assert_eq!(feedback.presents(), &[(b's', 0), (b'e', 2), (b'e', 3)]);
        assert_eq!(absent_letters(&feedback), vec![b'd', b'p']);
    }

    #[test]
    fn classify_duplicate_guess_letters_consume_target() {
        // SASSY vs MESAS: one S hits at position 2, one S and the A are
        // present, the third S finds no remaining occurrence, Y is absent
        let feedback = Feedback::classify(&word("sassy"), &word("mesas"));

        assert_eq!(feedback.hits(), &[(b's', 2)]);
        assert_eq!(feedback.presents(), &[(b's', 0), (b'a', 1)]);
        assert_eq!(absent_letters(&feedback), vec![b'y']);
    }

    #[test]
    fn classify_hit_takes_priority_over_present() {
        // ROBOT vs FLOOR: first O yellow, second O green
        let feedback = Feedback::classify(&word("robot"), &word("floor"));

        assert_eq!(feedback.hits(), &[(b'o', 3)]);
        assert_eq!(feedback.presents(), &[(b'r', 0), (b'o', 1)]);
        assert_eq!(absent_letters(&feedback), vec![b'b', b't']);
    }

    #[test]
    fn classify_matched_letter_never_globally_absent() {
        // SHEEP vs SHAPE: second E goes unmatched but E stays out of the
        // absent set because the first E earned a present
        let feedback = Feedback::classify(&word("sheep"), &word("shape"));

        assert_eq!(feedback.hits(), &[(b's', 0), (b'h', 1)]);
        assert_eq!(feedback.presents(), &[(b'e', 2), (b'p', 4)]);
        assert!(feedback.absent().is_empty());
    }

    #[test]
    fn classify_is_deterministic() {
        let a = Feedback::classify(&word("sassy"), &word("mesas"));
        let b = Feedback::classify(&word("sassy"), &word("mesas"));
        assert_eq!(a, b);
    }

    #[test]
    fn admits_requires_hit_positions() {
        let feedback = Feedback::classify(&word("crane"), &word("crate"));

        assert!(feedback.admits(&word("crate")));
        // TRACE has all the right letters but in the wrong positions
        assert!(!feedback.admits(&word("trace")));
        assert!(!feedback.admits(&word("slate")));
    }

    #[test]
    fn admits_present_letter_must_move() {
        let feedback = Feedback::classify(&word("speed"), &word("erase"));

        // The target itself is admitted
        assert!(feedback.admits(&word("erase")));
        // The guess is not: its presents sit at the refuted positions
        assert!(!feedback.admits(&word("speed")));
        // Has no S at all
        assert!(!feedback.admits(&word("eagle")));
    }

    #[test]
    fn admits_bounds_absent_letters_by_count() {
        let feedback = Feedback::classify(&word("sassy"), &word("mesas"));

        // Y is absent: any word containing Y is out
        assert!(!feedback.admits(&word("noisy")));
        // S earned a hit and a present, so S-bearing words survive the
        // absent rule (MESAS has two)
        assert!(feedback.admits(&word("mesas")));
    }

    #[test]
    fn admits_target_always_survives_its_own_feedback() {
        let words = ["crane", "slate", "adieu", "crate", "trace", "mesas", "sassy"];
        for guess in &words {
            for target in &words {
                if guess == target {
                    continue;
                }
                let feedback = Feedback::classify(&word(guess), &word(target));
                assert!(
                    feedback.admits(&word(target)),
                    "{target} rejected by feedback from {guess}"
                );
            }
        }
    }

    #[test]
    fn slots_reflect_classification() {
        let feedback = Feedback::classify(&word("sassy"), &word("mesas"));
        assert_eq!(
            feedback.slots(),
            [
                Slot::Present,
                Slot::Present,
                Slot::Hit,
                Slot::Absent,
                Slot::Absent
            ]
        );
    }
}

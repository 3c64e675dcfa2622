//! Target selection
//!
//! Supplies a single target word to a game by index, by date offset from the
//! puzzle epoch, or at random. The core is agnostic to the policy used.

use crate::core::Word;
use chrono::NaiveDate;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// The date of puzzle #0, from which the daily index is derived
const PUZZLE_EPOCH: (i32, u32, u32) = (2021, 6, 19);

/// Dictionary index of the daily puzzle for `date`
///
/// Days elapsed since the puzzle epoch, wrapped to the dictionary length so
/// the rotation never runs out.
#[must_use]
pub fn daily_index(date: NaiveDate, dictionary_len: usize) -> usize {
    let (y, m, d) = PUZZLE_EPOCH;
    let epoch = NaiveDate::from_ymd_opt(y, m, d).expect("valid epoch date");
    let days = (date - epoch).num_days().max(0);

    days as usize % dictionary_len.max(1)
}

/// Today's word
///
/// Returns `None` for an empty dictionary.
#[must_use]
pub fn pick_daily(dictionary: &[Word]) -> Option<&Word> {
    let today = chrono::Local::now().date_naive();
    pick_by_index(dictionary, daily_index(today, dictionary.len()))
}

/// Word at a fixed index
///
/// Returns `None` if the index is out of range.
#[must_use]
pub fn pick_by_index(dictionary: &[Word], index: usize) -> Option<&Word> {
    dictionary.get(index)
}

/// Uniform random draw
#[must_use]
pub fn pick_random<'a, R: Rng>(dictionary: &'a [Word], rng: &mut R) -> Option<&'a Word> {
    dictionary.choose(rng)
}

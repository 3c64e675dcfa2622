//! Word list loading utilities
//!
//! Provides functions to load word lists from files or from the embedded
//! constants. Loaded lists are whitespace-trimmed and duplicate-free; invalid
//! entries are skipped.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Lines are trimmed; empty lines, invalid entries, and duplicates are
/// skipped. Dictionary order follows the file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_sim::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(dedup_words(content.lines()))
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use wordle_sim::wordlists::loader::words_from_slice;
/// use wordle_sim::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    dedup_words(slice.iter().copied())
}

fn dedup_words<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    lines
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            let word = Word::new(trimmed).ok()?;
            seen.insert(word.text().to_string()).then_some(word)
        })
        .collect()
}

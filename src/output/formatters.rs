//! Formatting utilities for terminal output

use crate::core::{Feedback, Slot};
use colored::Colorize;

/// Format a guess with its feedback as a colored tile row
///
/// Hits are green, presents yellow, absents dimmed.
#[must_use]
pub fn feedback_tiles(guess: &str, feedback: &Feedback) -> String {
    let slots = feedback.slots();

    guess
        .chars()
        .zip(slots.iter())
        .map(|(letter, slot)| {
            let tile = letter.to_ascii_uppercase().to_string();
            match slot {
                Slot::Hit => tile.on_green().black().bold().to_string(),
                Slot::Present => tile.on_yellow().black().bold().to_string(),
                Slot::Absent => tile.on_bright_black().white().to_string(),
            }
        })
        .collect()
}

/// Format the accumulated miss letters as an uppercase list
#[must_use]
pub fn misses_line(misses: &rustc_hash::FxHashSet<u8>) -> String {
    let mut letters: Vec<u8> = misses.iter().copied().collect();
    letters.sort_unstable();

    letters
        .into_iter()
        .map(|l| (l as char).to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a histogram bar scaled to a percentage
///
/// Filled cells are green, the remainder dimmed.
#[must_use]
pub fn distribution_bar(pct: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((pct / 100.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!(
        "{}{}",
        "█".repeat(filled).green(),
        "░".repeat(width - filled).bright_black()
    )
}

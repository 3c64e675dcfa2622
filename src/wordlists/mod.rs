//! Word lists and target selection
//!
//! Provides the embedded dictionary compiled into the binary, a file loader,
//! and target-selection helpers.

pub mod chooser;
mod embedded;
pub mod loader;

pub use chooser::{daily_index, pick_daily, pick_by_index, pick_random};
pub use embedded::{WORDS, WORDS_COUNT};

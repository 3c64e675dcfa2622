//! Core domain types for the puzzle simulation
//!
//! This module contains the fundamental domain types with zero external state.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod word;

pub use feedback::{Feedback, Slot};
pub use word::{WORD_LEN, Word, WordError};

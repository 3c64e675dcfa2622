//! Wordle Sim
//!
//! Simulates solving a daily five-letter word puzzle: feedback classification,
//! candidate filtering, and a solver loop with pluggable guess policies.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_sim::core::{Feedback, Word};
//!
//! let guess = Word::new("crane").unwrap();
//! let target = Word::new("slate").unwrap();
//!
//! let feedback = Feedback::classify(&guess, &target);
//! assert!(feedback.admits(&target));
//! ```

// Core domain types
pub mod core;

// Game state and solver loop
pub mod game;

// Word lists and target selection
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

//! Command implementations

pub mod solve;
pub mod trials;

pub use solve::{RoundRecord, SolveConfig, SolveResult, solve_word};
pub use trials::{TrialsConfig, TrialsResult, run_trials};

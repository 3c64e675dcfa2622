//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_solve_result, print_trials_result};

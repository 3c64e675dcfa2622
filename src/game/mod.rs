//! Game state and the solver loop
//!
//! A `Session` owns one game's candidate pool and drives it through rounds of
//! feedback classification and filtering; `GuessPolicy` supplies the guesses.

mod policy;
mod pool;
mod session;

pub use policy::{FixedOpener, GuessPolicy, PolicyType, UniformRandom};
pub use pool::CandidatePool;
pub use session::{GameError, GameOutcome, GameState, RoundReport, Session};

//! Batch trials command
//!
//! Runs many independent simulated games and aggregates guess-count
//! statistics. Games share nothing, so they run in parallel.

use crate::core::Word;
use crate::game::{FixedOpener, GameError, PolicyType, Session, UniformRandom};
use crate::wordlists::chooser::pick_random;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a batch of trials
pub struct TrialsConfig {
    /// Number of independent games to simulate
    pub count: usize,
    /// Fixed round-1 word applied to every game
    pub opener: Option<Word>,
    /// Base seed; trial i derives its own generator from it
    pub rng_seed: Option<u64>,
}

/// Aggregated result of a batch of trials
pub struct TrialsResult {
    pub total_games: usize,
    pub solved: usize,
    /// Games that emptied the pool without solving; a correct filter against
    /// an in-dictionary target never produces these
    pub contradictions: usize,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub average_guesses: f64,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run `config.count` independent games and aggregate their outcomes
///
/// Each trial draws its own random target from the dictionary and owns its
/// own pool and generator, so trials are embarrassingly parallel.
#[must_use]
pub fn run_trials(dictionary: &[Word], config: &TrialsConfig) -> TrialsResult {
    let start = Instant::now();

    let pb = ProgressBar::new(config.count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let outcomes: Vec<Result<usize, GameError>> = (0..config.count)
        .into_par_iter()
        .map(|trial| {
            let result = run_one_trial(dictionary, config, trial as u64);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();

    let duration = start.elapsed();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut contradictions = 0;
    for outcome in &outcomes {
        match outcome {
            Ok(guesses) => *distribution.entry(*guesses).or_insert(0) += 1,
            Err(_) => contradictions += 1,
        }
    }

    let solved_guesses: Vec<usize> = outcomes.iter().filter_map(|o| o.as_ref().ok().copied()).collect();
    let solved = solved_guesses.len();
    let total_guesses: usize = solved_guesses.iter().sum();

    TrialsResult {
        total_games: config.count,
        solved,
        contradictions,
        min_guesses: solved_guesses.iter().copied().min().unwrap_or(0),
        max_guesses: solved_guesses.iter().copied().max().unwrap_or(0),
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        distribution,
        duration,
        games_per_second: config.count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

fn run_one_trial(
    dictionary: &[Word],
    config: &TrialsConfig,
    trial: u64,
) -> Result<usize, GameError> {
    // Derive a per-trial generator so a seeded batch replays exactly
    let mut rng = match config.rng_seed {
        Some(base) => StdRng::seed_from_u64(base.wrapping_add(trial)),
        None => StdRng::from_os_rng(),
    };

    let target = pick_random(dictionary, &mut rng)
        .ok_or(GameError::EmptyDictionary)?
        .clone();

    let random = match config.rng_seed {
        Some(base) => UniformRandom::seeded(base.wrapping_add(trial).wrapping_add(1)),
        None => UniformRandom::new(),
    };
    let mut policy = match &config.opener {
        Some(word) => PolicyType::Opener(FixedOpener::new(word.clone(), random)),
        None => PolicyType::Random(random),
    };

    let mut session = Session::new(target, dictionary)?;
    session.run(&mut policy).map(|outcome| outcome.guesses)
}

//! Wordle Sim - CLI
//!
//! Simulates solving the daily five-letter puzzle: single games with
//! round-by-round narration, or batches of trials with statistics.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_sim::{
    commands::{SolveConfig, TrialsConfig, run_trials, solve_word},
    core::Word,
    output::{print_solve_result, print_trials_result},
    wordlists::{WORDS, chooser, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_sim",
    about = "Daily word puzzle simulator with exact feedback and candidate filtering",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or path to a file of 5-letter words
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Fixed round-1 word
    #[arg(short = 'o', long, global = true)]
    opener: Option<String>,

    /// Seed for random guess draws (reproducible runs)
    #[arg(short = 's', long, global = true)]
    rng_seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one game against a target word
    Solve {
        /// The target word; omit to use today's word
        word: Option<String>,

        /// Pick the target by dictionary index instead
        #[arg(short, long, conflicts_with = "word")]
        index: Option<usize>,

        /// Show candidate counts per round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run many simulated games and report statistics
    Trials {
        /// Number of games to simulate
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist_mode: &str) -> Result<Vec<Word>> {
    use wordle_sim::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;

    match cli.command {
        Commands::Solve {
            word,
            index,
            verbose,
        } => run_solve_command(
            word,
            index,
            verbose,
            cli.opener,
            cli.rng_seed,
            &dictionary,
        ),
        Commands::Trials { count } => {
            run_trials_command(count, cli.opener, cli.rng_seed, &dictionary)
        }
    }
}

fn run_solve_command(
    word: Option<String>,
    index: Option<usize>,
    verbose: bool,
    opener: Option<String>,
    rng_seed: Option<u64>,
    dictionary: &[Word],
) -> Result<()> {
    let target = resolve_target(word, index, dictionary)?;

    let config = SolveConfig {
        target,
        opener,
        rng_seed,
    };
    let result = solve_word(config, dictionary).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, verbose);
    Ok(())
}

/// Resolve the target word: explicit word, dictionary index, or today's word
fn resolve_target(
    word: Option<String>,
    index: Option<usize>,
    dictionary: &[Word],
) -> Result<String> {
    if let Some(word) = word {
        return Ok(word);
    }
    if let Some(index) = index {
        return chooser::pick_by_index(dictionary, index)
            .map(|w| w.text().to_string())
            .ok_or_else(|| {
                anyhow::anyhow!("Index {index} out of range ({} words)", dictionary.len())
            });
    }
    chooser::pick_daily(dictionary)
        .map(|w| w.text().to_string())
        .ok_or_else(|| anyhow::anyhow!("Dictionary is empty"))
}

fn run_trials_command(
    count: usize,
    opener: Option<String>,
    rng_seed: Option<u64>,
    dictionary: &[Word],
) -> Result<()> {
    let opener = opener
        .map(Word::new)
        .transpose()
        .map_err(|e| anyhow::anyhow!("Invalid opener word: {e}"))?;

    println!("Running {count} simulated games...");

    let config = TrialsConfig {
        count,
        opener,
        rng_seed,
    };
    let result = run_trials(dictionary, &config);

    print_trials_result(&result);
    Ok(())
}

//! Display functions for command results

use super::formatters::{distribution_bar, feedback_tiles, misses_line};
use crate::commands::{SolveResult, TrialsResult};
use crate::game::GameState;
use colored::Colorize;

/// Print the round-by-round result of a simulated game
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Target: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, round) in result.rounds.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nRound {}: {}",
            turn,
            feedback_tiles(&round.word, &round.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                round.pool_before, round.pool_after
            );
        }
    }

    if verbose && !result.misses.is_empty() {
        println!(
            "\nRuled out: {}",
            misses_line(&result.misses).bright_black()
        );
    }

    println!();
    match result.state {
        GameState::Solved => println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.rounds.len())
                .green()
                .bold()
        ),
        GameState::Contradiction => println!(
            "{}",
            format!(
                "💥 Contradiction: pool emptied after {} rounds (target not reachable)",
                result.rounds.len()
            )
            .red()
            .bold()
        ),
        GameState::Active => println!(
            "{}",
            format!("⏸ Stopped after {} rounds", result.rounds.len()).yellow()
        ),
    }
}

/// Print the aggregated statistics of a batch of trials
pub fn print_trials_result(result: &TrialsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TRIAL RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fastest:          {}",
        format!("{} guesses", result.min_guesses).green()
    );
    println!(
        "   Slowest:          {}",
        format!("{} guesses", result.max_guesses).yellow()
    );
    if result.contradictions > 0 {
        println!(
            "   Contradictions:   {}",
            format!("{}", result.contradictions).red().bold()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let mut counts: Vec<(usize, usize)> = result
        .distribution
        .iter()
        .map(|(&guesses, &count)| (guesses, count))
        .collect();
    counts.sort_unstable();

    for (guesses, count) in counts {
        let pct = (count as f64 / result.total_games as f64) * 100.0;
        let bar = distribution_bar(pct, 40);
        println!("   {guesses:2}: {bar} {count:4} ({pct:5.1}%)");
    }
}

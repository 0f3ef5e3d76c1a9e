//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_pegs};
use crate::commands::{BenchmarkResult, BreakResult, ScoreResult};
use crate::core::Mode;
use colored::Colorize;

/// Print the result of scoring a single guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Mode: {} | Secret: {} | Guess: {}",
        result.mode,
        result.secret.bright_yellow().bold(),
        result.guess.bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n  {}  exact: {}",
        feedback_pegs(result.feedback),
        result.feedback.exact()
    );
    match result.mode {
        Mode::Standard => println!("      number: {}", result.feedback.number()),
        Mode::Unique => println!("      close:  {}", result.feedback.close()),
    }

    if result.win {
        println!("\n{}", "✅ Guess cracks the code!".green().bold());
    }
    println!();
}

/// Print the result of breaking a secret
pub fn print_break_result(result: &BreakResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Breaking: {}", result.secret.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            step.guess,
            feedback_pegs(step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Cracked in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to crack in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
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
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    if result.failed > 0 {
        println!(
            "   Unsolved:         {}",
            format!("{}", result.failed).red()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=10 {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_games as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}

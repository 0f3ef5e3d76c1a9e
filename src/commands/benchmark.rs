//! Benchmark command
//!
//! Tests breaker performance across many random secrets.

use crate::core::{Code, Feedback, Mode};
use crate::generator;
use crate::solver::{Breaker, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub failed: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run the breaker against a set of secrets
///
/// Each game is capped at 10 guesses, matching the interactive surfaces.
pub fn run_benchmark<S: Strategy>(
    breaker: &Breaker<S>,
    mode: Mode,
    secrets: &[Code],
) -> BenchmarkResult {
    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut failed = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for secret in secrets {
        let mut history: Vec<(Code, Feedback)> = Vec::new();
        let mut guesses = 0;
        let mut solved = false;

        while guesses < 10 {
            guesses += 1;

            let Some(guess) = breaker.next_guess(&history) else {
                break;
            };

            let Ok(feedback) = Feedback::score(mode, secret, guess) else {
                break;
            };

            if feedback.is_win(secret.len()) {
                solved = true;
                break;
            }

            history.push((guess.clone(), feedback));
        }

        if !solved {
            failed += 1;
        }

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;

        pb.inc(1);
        pb.set_message(format!("{guesses} guesses"));
    }

    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_games = secrets.len();

    BenchmarkResult {
        total_games,
        total_guesses,
        average_guesses: total_guesses as f64 / total_games as f64,
        min_guesses,
        max_guesses,
        failed,
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64(),
    }
}

/// Generate random benchmark secrets
///
/// # Errors
/// Returns an error if `length` is outside 4-8.
pub fn random_secrets(
    mode: Mode,
    length: usize,
    count: usize,
) -> Result<Vec<Code>, crate::core::CodeError> {
    (0..count).map(|_| generator::generate(mode, length)).collect()
}

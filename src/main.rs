//! Mastermind Engine - CLI
//!
//! Play Mastermind in the terminal or watch the breaker crack codes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind_engine::{
    commands::{BreakConfig, break_secret, random_secrets, run_benchmark, run_simple, score_guess},
    core::{Code, Mode},
    generator,
    output::{print_benchmark_result, print_break_result, print_score_result},
    solver::{Breaker, StrategyType, candidate_pool},
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind engine: play against a secret code or let minimax crack one",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game mode: standard (repeats allowed) or unique (all digits distinct)
    #[arg(short, long, global = true, default_value = "standard")]
    mode: String,

    /// Code length (4-8)
    #[arg(short, long, global = true, default_value = "4")]
    length: usize,

    /// Breaker strategy: minimax (default), first, random
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Simple CLI game without the TUI
    Simple,

    /// Score a single guess against a known secret
    Score {
        /// The secret code
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Generate a fresh secret code
    Generate,

    /// Let the breaker crack a secret
    Break {
        /// Secret to crack (random if omitted)
        secret: Option<String>,

        /// Show per-turn candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark the breaker over random secrets
    Benchmark {
        /// Number of random secrets to crack
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // An unrecognized mode name is a caller error, reported before anything runs
    let mode: Mode = cli.mode.parse()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(mode, cli.length),
        Commands::Simple => run_simple(mode, cli.length).map_err(|e| anyhow::anyhow!(e)),
        Commands::Score { secret, guess } => {
            let result = score_guess(mode, &secret, &guess).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Generate => {
            let secret = generator::generate(mode, cli.length)?;
            println!("{secret}");
            Ok(())
        }
        Commands::Break { secret, verbose } => {
            run_break_command(mode, cli.length, &cli.strategy, secret.as_deref(), verbose)
        }
        Commands::Benchmark { count } => {
            run_benchmark_command(mode, cli.length, &cli.strategy, count)
        }
    }
}

fn run_play_command(mode: Mode, length: usize) -> Result<()> {
    use mastermind_engine::interactive::{App, run_tui};

    let app = App::new(mode, length)?;
    run_tui(app)
}

fn run_break_command(
    mode: Mode,
    length: usize,
    strategy_name: &str,
    secret: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let secret = match secret {
        Some(text) => Code::new(text)?,
        None => generator::generate(mode, length)?,
    };

    // The pool must match the secret's length, not the --length default
    let pool = candidate_pool(mode, secret.len())?;
    let strategy = StrategyType::from_name(strategy_name);
    let breaker = Breaker::new(strategy, &pool, mode);

    let config = BreakConfig::new(mode, secret);
    let result = break_secret(&config, &breaker).map_err(|e| anyhow::anyhow!(e))?;

    print_break_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(mode: Mode, length: usize, strategy_name: &str, count: usize) -> Result<()> {
    println!("Running benchmark on {count} random secrets ({mode} mode, length {length})...");

    let pool = candidate_pool(mode, length)?;
    let strategy = StrategyType::from_name(strategy_name);
    let breaker = Breaker::new(strategy, &pool, mode);

    let secrets = random_secrets(mode, length, count)?;
    let result = run_benchmark(&breaker, mode, &secrets);

    print_benchmark_result(&result);
    Ok(())
}

//! Command implementations

pub mod benchmark;
pub mod break_code;
pub mod score;
pub mod simple;

pub use benchmark::{BenchmarkResult, random_secrets, run_benchmark};
pub use break_code::{BreakConfig, BreakResult, BreakStep, break_secret};
pub use score::{ScoreResult, score_guess};
pub use simple::run_simple;

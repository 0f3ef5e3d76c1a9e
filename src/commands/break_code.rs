//! Code breaking command
//!
//! Lets the breaker crack a specific secret and returns the guess path.

use crate::core::{Code, Feedback, Mode};
use crate::solver::{Breaker, Strategy};

/// Configuration for breaking a secret
pub struct BreakConfig {
    pub mode: Mode,
    pub secret: Code,
    pub max_guesses: usize,
}

impl BreakConfig {
    #[must_use]
    pub const fn new(mode: Mode, secret: Code) -> Self {
        Self {
            mode,
            secret,
            max_guesses: 10,
        }
    }
}

/// Result of breaking a secret
pub struct BreakResult {
    pub success: bool,
    pub steps: Vec<BreakStep>,
    pub secret: String,
}

/// A single guess step in the breaking path
pub struct BreakStep {
    pub guess: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Break a secret using the given breaker
///
/// # Errors
///
/// Returns an error if the breaker runs out of candidates, which means the
/// pool does not contain the secret (wrong mode or length).
pub fn break_secret<S: Strategy>(
    config: &BreakConfig,
    breaker: &Breaker<S>,
) -> Result<BreakResult, String> {
    let mut history: Vec<(Code, Feedback)> = Vec::new();
    let mut steps: Vec<BreakStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = breaker.count_candidates(&history);

        let guess = breaker
            .next_guess(&history)
            .ok_or_else(|| "No candidates remaining".to_string())?;

        let feedback =
            Feedback::score(config.mode, &config.secret, guess).map_err(|e| e.to_string())?;

        history.push((guess.clone(), feedback));

        let candidates_after = breaker.count_candidates(&history);

        steps.push(BreakStep {
            guess: guess.text().to_string(),
            feedback,
            candidates_before,
            candidates_after,
        });

        if feedback.is_win(config.secret.len()) {
            return Ok(BreakResult {
                success: true,
                steps,
                secret: config.secret.text().to_string(),
            });
        }
    }

    Ok(BreakResult {
        success: false,
        steps,
        secret: config.secret.text().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FirstCandidateStrategy, candidate_pool};

    #[test]
    fn breaks_unique_secret() {
        let pool = candidate_pool(Mode::Unique, 4).unwrap();
        let breaker = Breaker::new(FirstCandidateStrategy, &pool, Mode::Unique);
        // 24 candidates, and every wrong guess removes at least itself
        let mut config = BreakConfig::new(Mode::Unique, Code::new("3142").unwrap());
        config.max_guesses = 24;
        let result = break_secret(&config, &breaker).unwrap();

        assert!(result.success);
        assert_eq!(result.steps.last().unwrap().guess, "3142");
    }

    #[test]
    fn breaks_standard_secret() {
        let pool = candidate_pool(Mode::Standard, 4).unwrap();
        let breaker = Breaker::new(FirstCandidateStrategy, &pool, Mode::Standard);

        let mut config = BreakConfig::new(Mode::Standard, Code::new("0531").unwrap());
        config.max_guesses = 10_000;
        let result = break_secret(&config, &breaker).unwrap();

        assert!(result.success);
        assert_eq!(result.steps.last().unwrap().guess, "0531");
    }

    #[test]
    fn candidate_counts_never_grow() {
        let pool = candidate_pool(Mode::Unique, 4).unwrap();
        let breaker = Breaker::new(FirstCandidateStrategy, &pool, Mode::Unique);

        let mut config = BreakConfig::new(Mode::Unique, Code::new("4213").unwrap());
        config.max_guesses = 24;
        let result = break_secret(&config, &breaker).unwrap();

        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn guess_limit_is_respected() {
        let pool = candidate_pool(Mode::Standard, 4).unwrap();
        let breaker = Breaker::new(FirstCandidateStrategy, &pool, Mode::Standard);

        let mut config = BreakConfig::new(Mode::Standard, Code::new("9876").unwrap());
        config.max_guesses = 2;
        let result = break_secret(&config, &breaker).unwrap();

        assert!(result.steps.len() <= 2);
    }

    #[test]
    fn secret_outside_pool_errors() {
        // A unique-length-4 pool draws from {1,2,3,4}; a secret with a 9 can
        // never be consistent once feedback arrives
        let pool = candidate_pool(Mode::Unique, 4).unwrap();
        let breaker = Breaker::new(FirstCandidateStrategy, &pool, Mode::Unique);

        let mut config = BreakConfig::new(Mode::Unique, Code::new("9876").unwrap());
        config.max_guesses = 30;
        let result = break_secret(&config, &breaker);

        assert!(result.is_err());
    }
}

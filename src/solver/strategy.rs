//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::{Code, Mode};

/// A strategy for selecting the next guess from a pool of codes
pub trait Strategy {
    /// Select the best guess given the codes still consistent with history
    ///
    /// `guess_pool` is the full code space; `candidates` the consistent
    /// subset. Returns `None` if nothing can be selected.
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Code],
        candidates: &[Code],
        mode: Mode,
    ) -> Option<&'a Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Worst-case minimization (default, Knuth style)
    Minimax(MinimaxStrategy),
    /// First still-consistent candidate
    FirstCandidate(FirstCandidateStrategy),
    /// Random selection from candidates
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Code],
        candidates: &[Code],
        mode: Mode,
    ) -> Option<&'a Code> {
        match self {
            Self::Minimax(s) => s.select_guess(guess_pool, candidates, mode),
            Self::FirstCandidate(s) => s.select_guess(guess_pool, candidates, mode),
            Self::Random(s) => s.select_guess(guess_pool, candidates, mode),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "minimax", "first", "first-candidate", "random".
    /// Defaults to minimax if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "first" | "first-candidate" => Self::FirstCandidate(FirstCandidateStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Minimax(MinimaxStrategy),
        }
    }
}

/// Worst-case minimization strategy
///
/// Sweeps the whole pool for the guess whose worst feedback class leaves
/// the fewest candidates. The sweep may pick a guess that cannot be the
/// secret when it splits the remainder better.
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Code],
        candidates: &[Code],
        mode: Mode,
    ) -> Option<&'a Code> {
        super::minimax::select_best_guess(guess_pool, candidates, mode).map(|(best, _)| best)
    }
}

/// First-candidate strategy
///
/// Always guesses the first still-consistent candidate. Cheap, and every
/// wrong guess removes at least itself, so the game always terminates.
pub struct FirstCandidateStrategy;

impl Strategy for FirstCandidateStrategy {
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Code],
        candidates: &[Code],
        _mode: Mode,
    ) -> Option<&'a Code> {
        candidates
            .first()
            .and_then(|c| guess_pool.iter().find(|g| *g == c))
    }
}

/// Random strategy
///
/// Randomly selects from remaining candidates. A useful baseline for the
/// benchmark command.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Code],
        candidates: &[Code],
        _mode: Mode,
    ) -> Option<&'a Code> {
        use rand::prelude::IndexedRandom;

        if let Some(candidate) = candidates.choose(&mut rand::rng()) {
            guess_pool.iter().find(|g| *g == candidate)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(texts: &[&str]) -> Vec<Code> {
        texts.iter().map(|t| Code::new(*t).unwrap()).collect()
    }

    #[test]
    fn minimax_strategy_selects_guess() {
        let pool = codes(&["1234", "5678", "9999"]);
        let candidates = codes(&["1234", "5678"]);

        let strategy = MinimaxStrategy;
        let result = strategy.select_guess(&pool, &candidates, Mode::Standard);

        assert!(result.is_some());
        assert!(pool.contains(result.unwrap()));
    }

    #[test]
    fn first_candidate_strategy_takes_first() {
        let pool = codes(&["1234", "5678", "4321"]);
        let candidates = codes(&["5678", "4321"]);

        let strategy = FirstCandidateStrategy;
        let result = strategy.select_guess(&pool, &candidates, Mode::Standard);

        assert_eq!(result.unwrap().text(), "5678");
    }

    #[test]
    fn random_strategy_selects_from_candidates() {
        let pool = codes(&["1234", "5678", "4321"]);
        let candidates = codes(&["4321"]);

        let strategy = RandomStrategy;
        let result = strategy.select_guess(&pool, &candidates, Mode::Standard);

        assert_eq!(result.unwrap().text(), "4321");
    }

    #[test]
    fn strategies_handle_empty_candidates() {
        let pool = codes(&["1234"]);
        let empty: Vec<Code> = Vec::new();

        assert!(
            FirstCandidateStrategy
                .select_guess(&pool, &empty, Mode::Standard)
                .is_none()
        );
        assert!(
            RandomStrategy
                .select_guess(&pool, &empty, Mode::Standard)
                .is_none()
        );
    }

    #[test]
    fn from_name_mappings() {
        assert!(matches!(
            StrategyType::from_name("first"),
            StrategyType::FirstCandidate(_)
        ));
        assert!(matches!(
            StrategyType::from_name("random"),
            StrategyType::Random(_)
        ));
        assert!(matches!(
            StrategyType::from_name("minimax"),
            StrategyType::Minimax(_)
        ));
        assert!(matches!(
            StrategyType::from_name("anything-else"),
            StrategyType::Minimax(_)
        ));
    }
}

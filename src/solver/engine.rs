//! Main code breaker interface

use super::strategy::Strategy;
use crate::core::{Code, Feedback, Mode};

/// Knuth's two-pair opening for the classic standard 4-digit game
const STANDARD_OPENING: &str = "1122";

/// Main Mastermind code breaker
///
/// Coordinates the breaking process using a given strategy.
pub struct Breaker<'a, S: Strategy> {
    strategy: S,
    pool: &'a [Code],
    mode: Mode,
}

impl<'a, S: Strategy> Breaker<'a, S> {
    /// Create a new breaker with the given strategy and candidate pool
    ///
    /// # Parameters
    /// - `strategy`: The guess selection strategy to use
    /// - `pool`: Every code possible under the game's mode and length
    /// - `mode`: Scoring mode, which must match how the pool was built
    pub const fn new(strategy: S, pool: &'a [Code], mode: Mode) -> Self {
        Self {
            strategy,
            pool,
            mode,
        }
    }

    /// Get the best first guess for a new game
    ///
    /// The standard 4-digit game opens with 1122, Knuth's two-pair opening:
    /// it keeps the worst-case feedback class small without a pool sweep.
    /// Every other configuration asks the strategy.
    pub fn first_guess(&self) -> Option<&'a Code> {
        if self.mode == Mode::Standard
            && let Some(opening) = self.pool.iter().find(|c| c.text() == STANDARD_OPENING)
        {
            return Some(opening);
        }

        self.strategy.select_guess(self.pool, self.pool, self.mode)
    }

    /// Get the next best guess given previous guesses and feedback
    ///
    /// # Parameters
    /// - `history`: Slice of (guess, feedback) pairs from previous turns
    ///
    /// Returns the best next guess, or None if no candidates remain.
    pub fn next_guess(&self, history: &[(Code, Feedback)]) -> Option<&'a Code> {
        if history.is_empty() {
            return self.first_guess();
        }

        let candidates = self.filter_candidates(history);

        if candidates.is_empty() {
            return None;
        }

        if candidates.len() == 1 {
            return Some(candidates[0]);
        }

        // Convert candidates to owned Vec<Code> to avoid lifetime issues
        let candidate_codes: Vec<Code> = candidates.into_iter().cloned().collect();

        self.strategy
            .select_guess(self.pool, &candidate_codes, self.mode)
    }

    /// Filter the pool to codes consistent with the guess history
    ///
    /// A code stays if, were it the secret, every past guess would have
    /// earned exactly the feedback observed.
    fn filter_candidates(&self, history: &[(Code, Feedback)]) -> Vec<&'a Code> {
        self.pool
            .iter()
            .filter(|&candidate| {
                history.iter().all(|(guess, observed)| {
                    Feedback::score(self.mode, candidate, guess)
                        .is_ok_and(|feedback| feedback == *observed)
                })
            })
            .collect()
    }

    /// Count how many candidates remain given the history
    pub fn count_candidates(&self, history: &[(Code, Feedback)]) -> usize {
        self.filter_candidates(history).len()
    }

    /// Get the current candidates (public accessor)
    pub fn get_candidates(&self, history: &[(Code, Feedback)]) -> Vec<&'a Code> {
        self.filter_candidates(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FirstCandidateStrategy, candidate_pool};

    #[test]
    fn first_guess_is_two_pair_opening_in_standard_mode() {
        let pool = candidate_pool(Mode::Standard, 4).unwrap();
        let breaker = Breaker::new(FirstCandidateStrategy, &pool, Mode::Standard);

        assert_eq!(breaker.first_guess().unwrap().text(), "1122");
    }

    #[test]
    fn first_guess_in_unique_mode_comes_from_strategy() {
        let pool = candidate_pool(Mode::Unique, 4).unwrap();
        let breaker = Breaker::new(FirstCandidateStrategy, &pool, Mode::Unique);

        let guess = breaker.first_guess().unwrap();
        assert!(pool.contains(guess));
    }

    #[test]
    fn next_guess_with_empty_history() {
        let pool = candidate_pool(Mode::Unique, 4).unwrap();
        let breaker = Breaker::new(FirstCandidateStrategy, &pool, Mode::Unique);

        assert!(breaker.next_guess(&[]).is_some());
    }

    #[test]
    fn next_guess_filters_candidates() {
        let pool = candidate_pool(Mode::Standard, 4).unwrap();
        let breaker = Breaker::new(FirstCandidateStrategy, &pool, Mode::Standard);

        let secret = Code::new("1234").unwrap();
        let guess = Code::new("1122").unwrap();
        let feedback = Feedback::score(Mode::Standard, &secret, &guess).unwrap();

        let history = vec![(guess, feedback)];
        let next = breaker.next_guess(&history).unwrap();

        // The next guess must itself be consistent with the history
        let candidates = breaker.get_candidates(&history);
        assert!(candidates.contains(&next));
        assert!(candidates.len() < pool.len());
    }

    #[test]
    fn next_guess_returns_none_when_no_candidates() {
        let pool = candidate_pool(Mode::Standard, 4).unwrap();
        let breaker = Breaker::new(FirstCandidateStrategy, &pool, Mode::Standard);

        // Claim a full win for a guess while also claiming misses for the
        // same code: nothing satisfies both
        let code = Code::new("1234").unwrap();
        let history = vec![
            (code.clone(), Feedback::new(4, 0, 0)),
            (code, Feedback::new(0, 0, 0)),
        ];

        assert!(breaker.next_guess(&history).is_none());
    }

    #[test]
    fn count_candidates_decreases_with_information() {
        let pool = candidate_pool(Mode::Standard, 4).unwrap();
        let breaker = Breaker::new(FirstCandidateStrategy, &pool, Mode::Standard);

        assert_eq!(breaker.count_candidates(&[]), pool.len());

        let secret = Code::new("1234").unwrap();
        let guess = Code::new("1122").unwrap();
        let feedback = Feedback::score(Mode::Standard, &secret, &guess).unwrap();

        let history = vec![(guess, feedback)];
        assert!(breaker.count_candidates(&history) < pool.len());
    }

    #[test]
    fn filter_candidates_exact_win_leaves_one() {
        let pool = candidate_pool(Mode::Standard, 4).unwrap();
        let breaker = Breaker::new(FirstCandidateStrategy, &pool, Mode::Standard);

        let guess = Code::new("4321").unwrap();
        let history = vec![(guess, Feedback::new(4, 0, 0))];

        let candidates = breaker.get_candidates(&history);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text(), "4321");
    }

    #[test]
    fn secret_survives_every_filter() {
        let pool = candidate_pool(Mode::Unique, 4).unwrap();
        let breaker = Breaker::new(FirstCandidateStrategy, &pool, Mode::Unique);
        let secret = Code::new("3142").unwrap();

        let mut history = Vec::new();
        for guess_text in ["1234", "2413", "4321"] {
            let guess = Code::new(guess_text).unwrap();
            let feedback = Feedback::score(Mode::Unique, &secret, &guess).unwrap();
            history.push((guess, feedback));

            let candidates = breaker.get_candidates(&history);
            assert!(candidates.iter().any(|c| c.text() == secret.text()));
        }
    }
}

//! Minimax worst-case analysis for Mastermind guesses
//!
//! Given a guess and the set of still-consistent candidates, computes the
//! maximum candidates that could remain after seeing the guess's feedback.

use crate::core::{Code, Feedback, Mode};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Calculate the worst-case remaining candidates for a guess
///
/// # Strategy
/// For each feedback the guess could receive:
/// - Count how many candidates would produce that feedback
/// - Return the maximum count (worst case)
///
/// # Examples
/// ```
/// use mastermind_engine::core::{Code, Mode};
/// use mastermind_engine::solver::minimax::calculate_max_remaining;
///
/// let guess = Code::new("1122").unwrap();
/// let candidates = vec![
///     Code::new("1234").unwrap(),
///     Code::new("5678").unwrap(),
/// ];
///
/// let max_remaining = calculate_max_remaining(&guess, &candidates, Mode::Standard);
/// assert!(max_remaining <= 2); // Can't be more than total candidates
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Code, candidates: &[Code], mode: Mode) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    let feedback_counts = group_by_feedback(guess, candidates, mode);

    feedback_counts.values().max().copied().unwrap_or(0)
}

/// Group candidates by the feedback they would give the guess
fn group_by_feedback(guess: &Code, candidates: &[Code], mode: Mode) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        // Pool codes share one length, so scoring cannot fail
        if let Ok(feedback) = Feedback::score(mode, candidate, guess) {
            *counts.entry(feedback).or_insert(0) += 1;
        }
    }

    counts
}

/// Select the guess with the smallest worst case
///
/// Sweeps the whole guess pool in parallel. Ties prefer guesses that are
/// themselves still candidates (they can win outright), then pool order,
/// so selection is deterministic.
///
/// Returns the best guess and its worst-case remaining count, or `None` if
/// the pool is empty.
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [Code],
    candidates: &[Code],
    mode: Mode,
) -> Option<(&'a Code, usize)> {
    let candidate_set: FxHashSet<&Code> = candidates.iter().collect();

    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| {
            let worst = calculate_max_remaining(guess, candidates, mode);
            let non_candidate = !candidate_set.contains(guess);
            (worst, non_candidate, index, guess)
        })
        .min_by_key(|&(worst, non_candidate, index, _)| (worst, non_candidate, index))
        .map(|(worst, _, _, guess)| (guess, worst))
}

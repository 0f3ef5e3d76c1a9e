//! Feedback scoring for Mastermind guesses
//!
//! A Feedback holds the three per-turn counts:
//! - exact: correct digit in the correct position
//! - number: correct digit in the wrong position (standard mode only)
//! - close: digit matching an immediately adjacent secret position (unique mode only)

use super::{Code, Mode};
use std::fmt;

/// Feedback for a Mastermind guess
///
/// Produced fresh per guess by [`Feedback::score`] and consumed by the
/// caller; the engine keeps no state between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    exact: u8,
    number: u8,
    close: u8,
}

/// Error type for scoring precondition violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    LengthMismatch { secret: usize, guess: usize },
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { secret, guess } => {
                write!(
                    f,
                    "Guess length {guess} does not match secret length {secret}"
                )
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// Create feedback from raw counts
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, number: u8, close: u8) -> Self {
        Self {
            exact,
            number,
            close,
        }
    }

    /// Correct digit, correct position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Correct digit, wrong position (standard mode; always 0 in unique mode)
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self.number
    }

    /// Adjacent-position match (unique mode; always 0 in standard mode)
    #[inline]
    #[must_use]
    pub const fn close(self) -> u8 {
        self.close
    }

    /// Check whether this feedback wins a game of the given code length
    ///
    /// A game is won when every position is an exact match. The engine
    /// reports only the counts; turn tracking belongs to the caller.
    #[inline]
    #[must_use]
    pub const fn is_win(self, code_length: usize) -> bool {
        self.exact as usize == code_length
    }

    /// Score `guess` against `secret` under the given mode
    ///
    /// # Errors
    /// Returns `FeedbackError::LengthMismatch` if the guess and secret have
    /// different lengths. This is the only failure condition: scoring itself
    /// is a pure computation with no partial results.
    ///
    /// # Examples
    /// ```
    /// use mastermind_engine::core::{Code, Feedback, Mode};
    ///
    /// let secret = Code::new("1234").unwrap();
    /// let guess = Code::new("1243").unwrap();
    /// let feedback = Feedback::score(Mode::Standard, &secret, &guess).unwrap();
    ///
    /// assert_eq!(feedback.exact(), 2);
    /// assert_eq!(feedback.number(), 2);
    /// assert_eq!(feedback.close(), 0);
    /// ```
    pub fn score(mode: Mode, secret: &Code, guess: &Code) -> Result<Self, FeedbackError> {
        if secret.len() != guess.len() {
            return Err(FeedbackError::LengthMismatch {
                secret: secret.len(),
                guess: guess.len(),
            });
        }

        Ok(match mode {
            Mode::Standard => Self::score_standard(secret, guess),
            Mode::Unique => Self::score_unique(secret, guess),
        })
    }

    /// Standard-mode scoring (digits may repeat)
    ///
    /// # Algorithm
    /// 1. First pass: count exact matches and mark those positions used
    /// 2. Second pass: consume a multiset of the remaining secret digits in
    ///    index-ascending order, one number match per available digit
    fn score_standard(secret: &Code, guess: &Code) -> Self {
        let len = secret.len();
        let mut exact = 0u8;
        let mut used = vec![false; len];

        // First pass: exact matches (correct digit, correct position)
        for i in 0..len {
            if guess.digit_at(i) == secret.digit_at(i) {
                exact += 1;
                used[i] = true;
            }
        }

        // Multiset of secret digits not consumed by an exact match
        let mut remaining = secret.digit_counts();
        for i in 0..len {
            if used[i]
                && let Some(count) = remaining.get_mut(&secret.digit_at(i))
            {
                *count = count.saturating_sub(1);
            }
        }

        // Second pass: number matches, consuming the multiset left to right.
        // Index order fixes which guess position claims a scarce digit.
        let mut number = 0u8;
        for i in 0..len {
            if !used[i]
                && let Some(count) = remaining.get_mut(&guess.digit_at(i))
                && *count > 0
            {
                number += 1;
                *count -= 1;
            }
        }

        Self::new(exact, number, 0)
    }

    /// Unique-mode scoring (all secret digits distinct)
    ///
    /// # Algorithm
    /// 1. First pass: count exact matches; nothing is marked used
    /// 2. Second pass: for every position, each in-bounds neighbor equality
    ///    independently counts as a close match
    fn score_unique(secret: &Code, guess: &Code) -> Self {
        let len = secret.len();
        let mut exact = 0u8;

        for i in 0..len {
            if guess.digit_at(i) == secret.digit_at(i) {
                exact += 1;
            }
        }

        // The neighbor scan covers exact-matched positions too, and a single
        // guess digit may credit both its left and right neighbor, so close
        // can reach 2 * len. Both are long-standing rules of this variant;
        // do not narrow the scan to unmatched positions.
        let mut close = 0u8;
        for i in 0..len {
            let digit = guess.digit_at(i);
            if i > 0 && digit == secret.digit_at(i - 1) {
                close += 1;
            }
            if i + 1 < len && digit == secret.digit_at(i + 1) {
                close += 1;
            }
        }

        Self::new(exact, 0, close)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "exact: {}, number: {}, close: {}",
            self.exact, self.number, self.close
        )
    }
}

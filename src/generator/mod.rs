//! Secret code generation
//!
//! Produces the hidden code for a new game. Standard mode draws each digit
//! independently from 0-9; unique mode shuffles a distinct-digit alphabet.

use crate::core::{Code, CodeError, Mode};
use rand::Rng;
use rand::seq::SliceRandom;

/// Generate a secret code using the thread-local random source
///
/// # Errors
/// Returns `CodeError::InvalidLength` if `length` is outside 4-8. The
/// length is checked before any entropy is consumed.
///
/// # Examples
/// ```
/// use mastermind_engine::core::Mode;
/// use mastermind_engine::generator::generate;
///
/// let secret = generate(Mode::Standard, 6).unwrap();
/// assert_eq!(secret.len(), 6);
///
/// assert!(generate(Mode::Standard, 3).is_err());
/// ```
pub fn generate(mode: Mode, length: usize) -> Result<Code, CodeError> {
    generate_with(mode, length, &mut rand::rng())
}

/// Generate a secret code from a caller-supplied random source
///
/// Callers that need reproducibility (tests) or their own thread-safety
/// arrangements pass an independently seeded `Rng`.
///
/// # Errors
/// Returns `CodeError::InvalidLength` if `length` is outside 4-8.
pub fn generate_with<R: Rng + ?Sized>(
    mode: Mode,
    length: usize,
    rng: &mut R,
) -> Result<Code, CodeError> {
    if !(Code::MIN_LENGTH..=Code::MAX_LENGTH).contains(&length) {
        return Err(CodeError::InvalidLength(length));
    }

    let digits = match mode {
        Mode::Standard => (0..length).map(|_| rng.random_range(0..10u8)).collect(),
        Mode::Unique => {
            // The classic 4-digit game draws from {1,2,3,4}; every other
            // length shuffles the full digit alphabet and truncates.
            let mut alphabet: Vec<u8> = if length == 4 {
                vec![1, 2, 3, 4]
            } else {
                (0..10).collect()
            };
            alphabet.shuffle(rng);
            alphabet.truncate(length);
            alphabet
        }
    };

    Code::from_digits(digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn standard_generates_requested_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for length in Code::MIN_LENGTH..=Code::MAX_LENGTH {
            let secret = generate_with(Mode::Standard, length, &mut rng).unwrap();
            assert_eq!(secret.len(), length);
            assert!(secret.digits().iter().all(|&d| d <= 9));
        }
    }

    #[test]
    fn standard_permits_repeats() {
        // A 4-digit draw has no repeats with probability ~0.5; two hundred
        // draws without a single repeat would mean a broken source
        let mut rng = StdRng::seed_from_u64(11);
        let found_repeat = (0..200).any(|_| {
            let secret = generate_with(Mode::Standard, 4, &mut rng).unwrap();
            let counts = (0..10u8)
                .map(|d| secret.digits().iter().filter(|&&x| x == d).count())
                .max()
                .unwrap_or(0);
            counts > 1
        });
        assert!(found_repeat);
    }

    #[test]
    fn unique_never_repeats_a_digit() {
        let mut rng = StdRng::seed_from_u64(13);
        for length in Code::MIN_LENGTH..=Code::MAX_LENGTH {
            for _ in 0..50 {
                let secret = generate_with(Mode::Unique, length, &mut rng).unwrap();
                let mut digits: Vec<u8> = secret.digits().to_vec();
                digits.sort_unstable();
                digits.dedup();
                assert_eq!(digits.len(), length, "repeat in {}", secret.text());
            }
        }
    }

    #[test]
    fn unique_length_four_uses_special_alphabet() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..50 {
            let secret = generate_with(Mode::Unique, 4, &mut rng).unwrap();
            assert!(secret.digits().iter().all(|&d| (1..=4).contains(&d)));
        }
    }

    #[test]
    fn unique_other_lengths_use_full_alphabet() {
        // Five distinct digits cannot all lie in {1..4}, so any 5-digit
        // unique draw proves the full alphabet is in play
        let mut rng = StdRng::seed_from_u64(19);
        let secret = generate_with(Mode::Unique, 5, &mut rng).unwrap();
        assert!(secret.digits().iter().any(|&d| d == 0 || d > 4));
    }

    #[test]
    fn out_of_range_length_rejected() {
        let mut rng = StdRng::seed_from_u64(23);
        for mode in [Mode::Standard, Mode::Unique] {
            assert_eq!(
                generate_with(mode, 3, &mut rng),
                Err(CodeError::InvalidLength(3))
            );
            assert_eq!(
                generate_with(mode, 9, &mut rng),
                Err(CodeError::InvalidLength(9))
            );
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = generate_with(Mode::Standard, 6, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_with(Mode::Standard, 6, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }
}

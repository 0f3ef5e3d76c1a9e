//! Candidate pool enumeration
//!
//! The breaker searches the full space of codes for a given mode and
//! length. Standard mode enumerates every digit sequence; unique mode
//! enumerates permutations of the mode's alphabet.

use crate::core::{Code, CodeError, Mode};

/// Enumerate every possible code for a mode and length
///
/// Pool sizes: `10^length` in standard mode (10,000 at length 4 — lengths
/// above 6 produce pools too large to sweep), `alphabet P length`
/// permutations in unique mode (24 at length 4, 1,814,400 at length 8).
///
/// # Errors
/// Returns `CodeError::InvalidLength` if `length` is outside 4-8.
///
/// # Examples
/// ```
/// use mastermind_engine::core::Mode;
/// use mastermind_engine::solver::candidate_pool;
///
/// let pool = candidate_pool(Mode::Unique, 4).unwrap();
/// assert_eq!(pool.len(), 24);
/// ```
pub fn candidate_pool(mode: Mode, length: usize) -> Result<Vec<Code>, CodeError> {
    if !(Code::MIN_LENGTH..=Code::MAX_LENGTH).contains(&length) {
        return Err(CodeError::InvalidLength(length));
    }

    Ok(match mode {
        Mode::Standard => standard_pool(length),
        Mode::Unique => unique_pool(length),
    })
}

/// All digit sequences of the given length, in numeric order
fn standard_pool(length: usize) -> Vec<Code> {
    let total = 10usize.pow(length as u32);
    let mut codes = Vec::with_capacity(total);

    for value in 0..total {
        let mut digits = vec![0u8; length];
        let mut rest = value;
        for slot in digits.iter_mut().rev() {
            *slot = (rest % 10) as u8;
            rest /= 10;
        }
        codes.push(Code::from_digits(digits).expect("digits within range"));
    }

    codes
}

/// All distinct-digit sequences drawn from the mode's alphabet
///
/// Length 4 uses the {1,2,3,4} alphabet, matching the generator.
fn unique_pool(length: usize) -> Vec<Code> {
    let alphabet: Vec<u8> = if length == 4 {
        vec![1, 2, 3, 4]
    } else {
        (0..10).collect()
    };

    let mut codes = Vec::new();
    let mut current = Vec::with_capacity(length);
    let mut used = vec![false; alphabet.len()];
    permute(&alphabet, length, &mut current, &mut used, &mut codes);
    codes
}

fn permute(
    alphabet: &[u8],
    length: usize,
    current: &mut Vec<u8>,
    used: &mut [bool],
    out: &mut Vec<Code>,
) {
    if current.len() == length {
        out.push(Code::from_digits(current.clone()).expect("digits within range"));
        return;
    }

    for i in 0..alphabet.len() {
        if !used[i] {
            used[i] = true;
            current.push(alphabet[i]);
            permute(alphabet, length, current, used, out);
            current.pop();
            used[i] = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_pool_counts() {
        assert_eq!(candidate_pool(Mode::Standard, 4).unwrap().len(), 10_000);
        assert_eq!(candidate_pool(Mode::Standard, 5).unwrap().len(), 100_000);
    }

    #[test]
    fn standard_pool_is_ordered_and_complete() {
        let pool = candidate_pool(Mode::Standard, 4).unwrap();
        assert_eq!(pool.first().unwrap().text(), "0000");
        assert_eq!(pool.last().unwrap().text(), "9999");
        assert_eq!(pool[1234].text(), "1234");
    }

    #[test]
    fn unique_pool_length_four_is_special_alphabet() {
        let pool = candidate_pool(Mode::Unique, 4).unwrap();
        assert_eq!(pool.len(), 24); // 4!
        for code in &pool {
            assert!(code.digits().iter().all(|&d| (1..=4).contains(&d)));
        }
    }

    #[test]
    fn unique_pool_length_five_counts() {
        // 10 * 9 * 8 * 7 * 6
        let pool = candidate_pool(Mode::Unique, 5).unwrap();
        assert_eq!(pool.len(), 30_240);
    }

    #[test]
    fn unique_pool_has_no_repeated_digits() {
        let pool = candidate_pool(Mode::Unique, 4).unwrap();
        for code in &pool {
            let mut digits = code.digits().to_vec();
            digits.sort_unstable();
            digits.dedup();
            assert_eq!(digits.len(), code.len());
        }
    }

    #[test]
    fn unique_pool_codes_are_distinct() {
        let pool = candidate_pool(Mode::Unique, 4).unwrap();
        let mut texts: Vec<&str> = pool.iter().map(Code::text).collect();
        texts.sort_unstable();
        texts.dedup();
        assert_eq!(texts.len(), 24);
    }

    #[test]
    fn out_of_range_length_rejected() {
        for mode in [Mode::Standard, Mode::Unique] {
            assert!(candidate_pool(mode, 3).is_err());
            assert!(candidate_pool(mode, 9).is_err());
        }
    }
}

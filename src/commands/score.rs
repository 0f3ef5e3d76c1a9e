//! One-shot scoring command
//!
//! Scores a single guess against a known secret and reports the feedback.

use crate::core::{Code, Feedback, Mode};

/// Result of scoring a guess
pub struct ScoreResult {
    pub mode: Mode,
    pub secret: String,
    pub guess: String,
    pub feedback: Feedback,
    pub win: bool,
}

/// Score a guess against a secret under the given mode
///
/// # Errors
///
/// Returns an error if:
/// - Either code is invalid (wrong length or non-digit characters)
/// - The guess length differs from the secret length
pub fn score_guess(mode: Mode, secret: &str, guess: &str) -> Result<ScoreResult, String> {
    let secret_code = Code::new(secret).map_err(|e| format!("Invalid secret: {e}"))?;
    let guess_code = Code::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    let feedback =
        Feedback::score(mode, &secret_code, &guess_code).map_err(|e| e.to_string())?;

    Ok(ScoreResult {
        mode,
        secret: secret_code.text().to_string(),
        guess: guess_code.text().to_string(),
        feedback,
        win: feedback.is_win(secret_code.len()),
    })
}

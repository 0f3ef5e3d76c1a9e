//! Formatting utilities for terminal output

use crate::core::Feedback;

/// Format feedback as a peg string
///
/// One ⚫ per exact match, one ⚪ per number match, one 🔶 per close match.
/// Feedback with no matches renders as a single dot so rows stay visible.
#[must_use]
pub fn feedback_pegs(feedback: Feedback) -> String {
    let mut result = String::new();

    for _ in 0..feedback.exact() {
        result.push('⚫');
    }
    for _ in 0..feedback.number() {
        result.push('⚪');
    }
    for _ in 0..feedback.close() {
        result.push('🔶');
    }

    if result.is_empty() {
        result.push('·');
    }

    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

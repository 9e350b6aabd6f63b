//! Formatting utilities for terminal output

use crate::core::{LetterStatus, ScoreResult};
use colored::{ColoredString, Colorize};

/// Format a score result as an emoji string
#[must_use]
pub fn result_to_emoji(result: &ScoreResult) -> String {
    result.iter().map(status_emoji).collect()
}

/// Emoji tile for a single status
#[must_use]
pub const fn status_emoji(status: LetterStatus) -> char {
    match status {
        LetterStatus::Correct => '🟩',
        LetterStatus::Present => '🟨',
        LetterStatus::Absent => '⬜',
    }
}

/// Color a guessed letter by its status
///
/// Green for correct, yellow for present, red for absent.
#[must_use]
pub fn colored_letter(letter: char, status: LetterStatus) -> ColoredString {
    let text = letter.to_ascii_uppercase().to_string();
    match status {
        LetterStatus::Correct => text.green().bold(),
        LetterStatus::Present => text.yellow().bold(),
        LetterStatus::Absent => text.red(),
    }
}

/// Render a whole guess with colored letters
///
/// Statuses are per byte, so a guess with multi-byte letters is shown
/// uncolored rather than split apart.
#[must_use]
pub fn colored_guess(guess: &str, result: &ScoreResult) -> String {
    if !guess.is_ascii() {
        return guess.to_uppercase();
    }
    guess
        .bytes()
        .zip(result.iter())
        .map(|(b, status)| colored_letter(char::from(b), status).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

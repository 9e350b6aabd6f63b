//! Core domain types for the game
//!
//! This module contains the pure parts of the game: words and guess scoring.
//! Nothing here performs I/O or uses randomness.

mod score;
mod word;

pub use score::{LengthMismatch, LetterStatus, ScoreResult, score};
pub use word::{Word, WordError};

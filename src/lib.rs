//! Terminal Wordle
//!
//! A word-guessing game: guess the secret word within a limited number of
//! attempts, with each letter marked correct, present or absent.
//!
//! # Quick Start
//!
//! ```rust
//! use termwordle::core::{LetterStatus, Word, score};
//! use termwordle::game::{GameConfig, GameState};
//!
//! let secret = Word::new("apple").unwrap();
//! let result = score(&secret, "pleas").unwrap();
//! assert_eq!(result.count(LetterStatus::Present), 4);
//!
//! let mut session = GameConfig::default().new_session(secret);
//! assert_eq!(session.guess("apple").unwrap().state, GameState::Won);
//! ```

// Core domain types and scoring
pub mod core;

// Sessions, configuration and statistics
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Diagnostic logging
pub mod logging;

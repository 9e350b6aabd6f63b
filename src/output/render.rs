//! Presentation of game events
//!
//! The line-based game loop reports everything through [`Render`], so it can be
//! driven against a real terminal or a recording in tests.

use super::formatters::colored_guess;
use crate::core::{ScoreResult, Word};
use crate::game::{GameState, SessionError};
use colored::Colorize;
use std::io::{self, Write};

/// Receiver for everything a running game wants to show the player
pub trait Render {
    /// Ask for the next guess
    fn prompt_guess(&mut self) -> io::Result<()>;

    /// Show a scored guess
    fn scored(&mut self, guess: &str, result: &ScoreResult) -> io::Result<()>;

    /// Explain why a guess was not accepted
    fn rejected(&mut self, error: &SessionError) -> io::Result<()>;

    /// Refuse a guess containing letters outside ASCII
    fn unsupported_letters(&mut self, guess: &str) -> io::Result<()>;

    /// Report attempts remaining after a miss
    fn attempts_left(&mut self, remaining: u32) -> io::Result<()>;

    /// Announce the end of the game; `secret` is revealed on a loss
    fn finished(&mut self, state: GameState, secret: &Word) -> io::Result<()>;
}

/// Colored console output
pub struct ConsoleRenderer<W: Write> {
    out: W,
}

impl<W: Write> ConsoleRenderer<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Render for ConsoleRenderer<W> {
    fn prompt_guess(&mut self) -> io::Result<()> {
        write!(self.out, "Guess the word: ")?;
        self.out.flush()
    }

    fn scored(&mut self, guess: &str, result: &ScoreResult) -> io::Result<()> {
        writeln!(self.out, "\n{}", colored_guess(guess, result))
    }

    fn rejected(&mut self, error: &SessionError) -> io::Result<()> {
        let message = match error {
            SessionError::LengthMismatch(mismatch) => format!(
                "Invalid guess length. The word should be {} characters long.",
                mismatch.expected
            ),
            SessionError::Finished => error.to_string(),
        };
        writeln!(self.out, "{}", message.red())
    }

    fn unsupported_letters(&mut self, guess: &str) -> io::Result<()> {
        let message = format!("Invalid guess '{guess}'. Use plain letters A-Z only.");
        writeln!(self.out, "{}", message.red())
    }

    fn attempts_left(&mut self, remaining: u32) -> io::Result<()> {
        let noun = if remaining == 1 { "attempt" } else { "attempts" };
        writeln!(self.out, "You have {remaining} {noun} left.")
    }

    fn finished(&mut self, state: GameState, secret: &Word) -> io::Result<()> {
        match state {
            GameState::Won => writeln!(
                self.out,
                "{}",
                "Congratulations! You guessed the word correctly!"
                    .green()
                    .bold()
            ),
            GameState::Lost => writeln!(
                self.out,
                "Sorry, you've used all your attempts. The word was: {}",
                secret.text().to_uppercase().bright_yellow().bold()
            ),
            GameState::InProgress { .. } => Ok(()),
        }
    }
}

//! Attempt-counting game session
//!
//! A session owns the secret word for one play-through and decides when the
//! game is won or lost. It does no I/O: callers feed guesses in and render
//! the returned outcome themselves.

use crate::core::{LengthMismatch, ScoreResult, Word, score};
use std::num::NonZeroU32;
use thiserror::Error;
use tracing::{debug, info};

/// Where a session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress { attempts_used: u32 },
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress { .. })
    }
}

/// Reasons a guess was not accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    LengthMismatch(#[from] LengthMismatch),
    #[error("The game is already over")]
    Finished,
}

/// A scored guess kept in the session history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: String,
    pub result: ScoreResult,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub result: ScoreResult,
    pub state: GameState,
}

/// One play-through against a single secret word
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    max_attempts: NonZeroU32,
    attempts_used: u32,
    state: GameState,
    history: Vec<GuessRecord>,
}

impl GameSession {
    #[must_use]
    pub fn new(secret: Word, max_attempts: NonZeroU32) -> Self {
        info!(
            word_length = secret.len(),
            max_attempts = max_attempts.get(),
            "session started"
        );
        tracing::trace!(secret = %secret, "secret word chosen");

        Self {
            secret,
            max_attempts,
            attempts_used: 0,
            state: GameState::InProgress { attempts_used: 0 },
            history: Vec::new(),
        }
    }

    /// Score a guess and advance the session
    ///
    /// A guess of the wrong length is rejected without consuming an attempt.
    ///
    /// # Errors
    /// - `SessionError::LengthMismatch` if the guess length differs from the secret
    /// - `SessionError::Finished` if the session already reached `Won` or `Lost`
    ///
    /// # Examples
    /// ```
    /// use std::num::NonZeroU32;
    /// use termwordle::core::Word;
    /// use termwordle::game::{GameSession, GameState};
    ///
    /// let mut session = GameSession::new(Word::new("apple").unwrap(), NonZeroU32::new(6).unwrap());
    /// assert!(session.guess("pear").is_err());
    ///
    /// let outcome = session.guess("apple").unwrap();
    /// assert_eq!(outcome.state, GameState::Won);
    /// ```
    pub fn guess(&mut self, guess: &str) -> Result<GuessOutcome, SessionError> {
        if self.state.is_finished() {
            return Err(SessionError::Finished);
        }

        let result = score(&self.secret, guess)?;

        self.state = if result.is_win() {
            GameState::Won
        } else {
            self.attempts_used += 1;
            if self.attempts_used >= self.max_attempts.get() {
                GameState::Lost
            } else {
                GameState::InProgress {
                    attempts_used: self.attempts_used,
                }
            }
        };

        debug!(guess, feedback = %result, state = ?self.state, "guess scored");
        if self.state.is_finished() {
            info!(state = ?self.state, guesses = self.history.len() + 1, "session finished");
        }

        self.history.push(GuessRecord {
            guess: guess.to_string(),
            result: result.clone(),
        });

        Ok(GuessOutcome {
            result,
            state: self.state,
        })
    }

    /// Give up on the session, ending it as lost
    ///
    /// Has no effect once the session is finished.
    pub fn forfeit(&mut self) {
        if !self.state.is_finished() {
            info!(attempts_used = self.attempts_used, "session forfeited");
            self.state = GameState::Lost;
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> NonZeroU32 {
        self.max_attempts
    }

    /// Non-winning guesses made so far
    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    #[must_use]
    pub const fn attempts_left(&self) -> u32 {
        self.max_attempts.get().saturating_sub(self.attempts_used)
    }

    /// Every accepted guess in order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }
}

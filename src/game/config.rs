//! Game configuration
//!
//! The maximum attempt count lives here rather than in a global so each
//! session receives it explicitly when it is created.

use super::GameSession;
use crate::core::Word;
use std::num::NonZeroU32;
use thiserror::Error;
use tracing::info;

/// Default number of attempts per game
pub const DEFAULT_MAX_ATTEMPTS: NonZeroU32 = NonZeroU32::new(6).unwrap();

/// Rejected configuration input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("Maximum attempts must be positive, got {0}")]
    NotPositive(i64),
}

/// Settings that persist across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    max_attempts: NonZeroU32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_attempts: NonZeroU32) -> Self {
        Self { max_attempts }
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> NonZeroU32 {
        self.max_attempts
    }

    /// Update the maximum attempts from user input
    ///
    /// The previous value is kept when the input is rejected.
    ///
    /// # Errors
    /// - `ConfigError::NotANumber` if the input is not an integer
    /// - `ConfigError::NotPositive` if it is zero or negative
    ///
    /// # Examples
    /// ```
    /// use termwordle::game::GameConfig;
    ///
    /// let mut config = GameConfig::default();
    /// assert_eq!(config.set_max_attempts(" 8 ").unwrap().get(), 8);
    /// assert!(config.set_max_attempts("0").is_err());
    /// assert_eq!(config.max_attempts().get(), 8);
    /// ```
    pub fn set_max_attempts(&mut self, input: &str) -> Result<NonZeroU32, ConfigError> {
        let trimmed = input.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| ConfigError::NotANumber(trimmed.to_string()))?;

        let max_attempts = u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or_else(|| {
                if value <= 0 {
                    ConfigError::NotPositive(value)
                } else {
                    ConfigError::NotANumber(trimmed.to_string())
                }
            })?;

        info!(max_attempts = max_attempts.get(), "maximum attempts updated");
        self.max_attempts = max_attempts;
        Ok(max_attempts)
    }

    /// Start a new session with the current settings
    #[must_use]
    pub fn new_session(&self, secret: Word) -> GameSession {
        GameSession::new(secret, self.max_attempts)
    }
}

//! Game state around the scorer
//!
//! Sessions, the settings they are created from, and running statistics.

mod config;
mod session;
mod stats;

pub use config::{ConfigError, DEFAULT_MAX_ATTEMPTS, GameConfig};
pub use session::{GameSession, GameState, GuessOutcome, GuessRecord, SessionError};
pub use stats::Statistics;

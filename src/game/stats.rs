//! Per-process play statistics

use super::{GameSession, GameState};
use rustc_hash::FxHashMap;

/// Results of the sessions played since startup
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Winning guess number -> games won on that guess
    pub guess_distribution: FxHashMap<u32, usize>,
}

impl Statistics {
    /// Record a finished session; unfinished sessions are ignored
    pub fn record(&mut self, session: &GameSession) {
        match session.state() {
            GameState::InProgress { .. } => {}
            GameState::Won => {
                self.total_games += 1;
                self.games_won += 1;
                let guesses = session.attempts_used() + 1;
                *self.guess_distribution.entry(guesses).or_insert(0) += 1;
            }
            GameState::Lost => self.total_games += 1,
        }
    }

    /// Percentage of games won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    /// Distribution entries sorted by guess number
    #[must_use]
    pub fn sorted_distribution(&self) -> Vec<(u32, usize)> {
        let mut entries: Vec<_> = self
            .guess_distribution
            .iter()
            .map(|(&guesses, &count)| (guesses, count))
            .collect();
        entries.sort_unstable();
        entries
    }
}

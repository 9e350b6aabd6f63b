//! TUI application state and logic

use crate::core::LetterStatus;
use crate::game::{GameConfig, GameSession, GameState, Statistics};
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;
use tracing::debug;

/// Application state
pub struct App<'a> {
    pub words: &'a WordList,
    pub config: GameConfig,
    pub session: GameSession,
    pub input_buffer: String,
    pub settings_buffer: String,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
    Settings,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(words: &'a WordList, config: GameConfig) -> Self {
        Self::with_rng(words, config, StdRng::from_os_rng())
    }

    /// Create the app with a specific random source for secret selection
    #[must_use]
    pub fn with_rng(words: &'a WordList, config: GameConfig, mut rng: StdRng) -> Self {
        let session = config.new_session(words.choose(&mut rng).clone());

        let mut app = Self {
            words,
            config,
            session,
            input_buffer: String::new(),
            settings_buffer: String::new(),
            input_mode: InputMode::Guessing,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            rng,
        };
        app.announce_game();
        app
    }

    fn announce_game(&mut self) {
        self.add_message(
            &format!(
                "Guess the {}-letter word in {} attempts!",
                self.session.secret().len(),
                self.session.max_attempts()
            ),
            MessageStyle::Info,
        );
    }

    pub fn new_game(&mut self) {
        let secret = self.words.choose(&mut self.rng).clone();
        self.session = self.config.new_session(secret);
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.announce_game();
    }

    pub fn submit_guess(&mut self) {
        let guess = self.input_buffer.to_lowercase();

        match self.session.guess(&guess) {
            Ok(outcome) => {
                self.input_buffer.clear();
                match outcome.state {
                    GameState::InProgress { .. } => {
                        let left = self.session.attempts_left();
                        self.add_message(
                            &format!(
                                "{left} {} left",
                                if left == 1 { "attempt" } else { "attempts" }
                            ),
                            MessageStyle::Info,
                        );
                    }
                    GameState::Won | GameState::Lost => self.finish_game(),
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Give up the current game
    pub fn forfeit(&mut self) {
        self.session.forfeit();
        self.finish_game();
    }

    fn finish_game(&mut self) {
        self.stats.record(&self.session);
        self.input_mode = InputMode::GameOver;

        if self.session.state() == GameState::Won {
            let guesses = self.session.history().len();
            let celebration = match guesses {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟".to_string(),
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥".to_string(),
                3 => "✨ SPLENDID! Three guesses! ✨".to_string(),
                n => format!("🎉 SOLVED in {n} guesses! 🎉"),
            };
            self.add_message(&celebration, MessageStyle::Success);
        } else {
            let secret = self.session.secret().text().to_uppercase();
            let text = if self.session.attempts_left() > 0 {
                format!("You gave up. The word was {secret}")
            } else {
                format!("Out of attempts! The word was {secret}")
            };
            self.add_message(&text, MessageStyle::Error);
        }
        self.add_message(
            "Press 'n' for new game, 's' for settings or 'q' to quit.",
            MessageStyle::Info,
        );
    }

    pub fn open_settings(&mut self) {
        self.settings_buffer.clear();
        self.input_mode = InputMode::Settings;
        self.add_message(
            &format!(
                "Enter maximum attempts (currently {})",
                self.config.max_attempts()
            ),
            MessageStyle::Info,
        );
    }

    pub fn apply_settings(&mut self) {
        match self.config.set_max_attempts(&self.settings_buffer) {
            Ok(max) => {
                self.add_message(
                    &format!("Maximum attempts updated to {max}"),
                    MessageStyle::Success,
                );
                self.input_mode = InputMode::GameOver;
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
        self.settings_buffer.clear();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Best status seen so far for each guessed letter
    #[must_use]
    pub fn letter_states(&self) -> FxHashMap<u8, LetterStatus> {
        let mut states: FxHashMap<u8, LetterStatus> = FxHashMap::default();
        for record in self.session.history() {
            for (letter, status) in record.guess.bytes().zip(record.result.iter()) {
                states
                    .entry(letter)
                    .and_modify(|best| *best = (*best).max(status))
                    .or_insert(status);
            }
        }
        states
    }

    /// Apply a key press to the current mode
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Guessing => match key.code {
                KeyCode::Char(c) if c.is_ascii_graphic() => {
                    if self.input_buffer.len() < self.session.secret().len() {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                KeyCode::Esc => self.forfeit(),
                _ => {}
            },
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('s') => self.open_settings(),
                _ => {}
            },
            InputMode::Settings => match key.code {
                KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                    self.settings_buffer.push(c);
                }
                KeyCode::Backspace => {
                    self.settings_buffer.pop();
                }
                KeyCode::Enter => self.apply_settings(),
                KeyCode::Esc => {
                    self.settings_buffer.clear();
                    self.input_mode = InputMode::GameOver;
                    self.add_message("Settings unchanged", MessageStyle::Info);
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            debug!(games = app.stats.total_games, "leaving TUI");
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(words: &WordList) -> App<'_> {
        App::with_rng(words, GameConfig::default(), StdRng::seed_from_u64(3))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn apple() -> WordList {
        WordList::from_lines(["apple"], "test").unwrap()
    }

    #[test]
    fn typing_is_capped_at_word_length() {
        let words = apple();
        let mut app = app(&words);
        for c in "APPLESAUCE".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "apple");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "appl");
    }

    #[test]
    fn short_guess_is_rejected_without_attempt() {
        let words = apple();
        let mut app = app(&words);
        type_word(&mut app, "app");

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.session.attempts_used(), 0);
        assert_eq!(app.input_buffer, "app");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn winning_switches_to_game_over() {
        let words = apple();
        let mut app = app(&words);
        type_word(&mut app, "pleas");
        type_word(&mut app, "apple");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.session.state(), GameState::Won);
        assert_eq!(app.stats.games_won, 1);
    }

    #[test]
    fn letter_states_keep_best_status() {
        let words = apple();
        let mut app = app(&words);
        type_word(&mut app, "pleas");
        type_word(&mut app, "ppppp");

        let states = app.letter_states();
        assert_eq!(states[&b'p'], LetterStatus::Correct);
        assert_eq!(states[&b'l'], LetterStatus::Present);
        assert_eq!(states[&b's'], LetterStatus::Absent);
        assert!(!states.contains_key(&b'z'));
    }

    #[test]
    fn escape_forfeits() {
        let words = apple();
        let mut app = app(&words);
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.session.state(), GameState::Lost);
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "You gave up. The word was APPLE")
        );
        assert!(!app.messages.iter().any(|m| m.text.contains("Out of attempts")));
    }

    #[test]
    fn exhausting_attempts_reports_out_of_attempts() {
        let words = apple();
        let mut app = App::with_rng(
            &words,
            GameConfig::new(std::num::NonZeroU32::new(1).unwrap()),
            StdRng::seed_from_u64(3),
        );
        type_word(&mut app, "crane");

        assert_eq!(app.session.state(), GameState::Lost);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "Out of attempts! The word was APPLE")
        );
    }

    #[test]
    fn settings_apply_to_next_game() {
        let words = apple();
        let mut app = app(&words);
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.input_mode, InputMode::Settings);
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.config.max_attempts().get(), 3);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.session.max_attempts().get(), 3);

        for _ in 0..3 {
            type_word(&mut app, "crane");
        }
        assert_eq!(app.session.state(), GameState::Lost);
    }

    #[test]
    fn invalid_settings_rejected() {
        let words = apple();
        let mut app = app(&words);
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('0'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Settings);
        assert_eq!(app.config.max_attempts().get(), 6);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::GameOver);
    }

    #[test]
    fn ctrl_c_quits_anywhere() {
        let words = apple();
        let mut app = app(&words);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn letters_do_not_quit_while_guessing() {
        let words = apple();
        let mut app = app(&words);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.input_buffer, "q");
    }
}

//! TUI rendering with ratatui
//!
//! Board, keyboard and status panels for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::LetterStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Keyboard and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Tile style for a letter status
fn status_style(status: LetterStatus) -> Style {
    let bg = match status {
        LetterStatus::Correct => Color::Green,
        LetterStatus::Present => Color::Yellow,
        LetterStatus::Absent => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn tile(letter: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let width = session.secret().len();
    let empty = Style::default().fg(Color::DarkGray);
    let typed_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = session
        .history()
        .iter()
        .map(|record| {
            Line::from(
                record
                    .guess
                    .bytes()
                    .zip(record.result.iter())
                    .flat_map(|(b, status)| {
                        [tile(char::from(b), status_style(status)), Span::raw(" ")]
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    // Row being typed
    if app.input_mode == InputMode::Guessing {
        let typed: Vec<char> = app.input_buffer.chars().collect();
        let spans = (0..width)
            .flat_map(|i| {
                let span = typed.get(i).map_or_else(
                    || Span::styled(" _ ", empty),
                    |&c| tile(c, typed_style),
                );
                [span, Span::raw(" ")]
            })
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
    }

    // Unused attempts as empty rows; the winning guess counts as a row too
    let guesses = session.history().len();
    let pending = usize::from(app.input_mode == InputMode::Guessing);
    let unused = (session.max_attempts().get() as usize).saturating_sub(guesses + pending);
    for _ in 0..unused {
        lines.push(Line::from(Span::styled(" · ".repeat(width), empty)));
    }

    let title = format!(" Attempts {guesses}/{} ", session.max_attempts());
    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let states = app.letter_states();
    let unused = Style::default().fg(Color::White);

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.bytes()
                    .map(|b| {
                        let style = states.get(&b).map_or(unused, |&s| status_style(s));
                        tile(char::from(b), style)
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Guessing => (
            " Type your guess | Enter: submit | Esc: give up ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::GameOver => (" n: new game | s: settings | q: quit ", "", Color::Green),
        InputMode::Settings => (
            " Maximum attempts | Enter: save | Esc: cancel ",
            app.settings_buffer.as_str(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let status = format!(
        "Games: {} | Won: {} | Win Rate: {:.0}% | Max attempts: {} | Ctrl-C: quit",
        app.stats.total_games,
        app.stats.games_won,
        app.stats.win_rate(),
        app.config.max_attempts()
    );
    let paragraph = Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::wordlists::WordList;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn draws_board_and_status() {
        let words = WordList::from_lines(["apple"], "test").unwrap();
        let mut app = App::with_rng(&words, GameConfig::default(), StdRng::seed_from_u64(0));
        app.input_buffer = "pleas".to_string();
        app.submit_guess();

        let screen = draw(&app);
        assert!(screen.contains("Attempts 1/6"));
        assert!(screen.contains(" P "));
        assert!(screen.contains("Max attempts: 6"));
    }

    #[test]
    fn first_guess_win_fills_board_to_max() {
        let words = WordList::from_lines(["apple"], "test").unwrap();
        let mut app = App::with_rng(&words, GameConfig::default(), StdRng::seed_from_u64(0));
        app.input_buffer = "apple".to_string();
        app.submit_guess();

        let screen = draw(&app);
        assert!(screen.contains("Attempts 1/6"));
        // One guessed row plus five empty rows of five dots
        assert_eq!(screen.matches('·').count(), 5 * 5);
    }

    #[test]
    fn board_rows_while_guessing() {
        let words = WordList::from_lines(["apple"], "test").unwrap();
        let app = App::with_rng(&words, GameConfig::default(), StdRng::seed_from_u64(0));

        let screen = draw(&app);
        assert!(screen.contains("Attempts 0/6"));
        // Typing row plus five empty rows
        assert_eq!(screen.matches('·').count(), 5 * 5);
    }
}

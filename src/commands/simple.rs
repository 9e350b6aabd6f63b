//! Simple interactive CLI mode
//!
//! Text-based menu game without TUI: start a game, change the maximum number
//! of attempts, or exit.

use crate::game::{GameConfig, GameSession, GameState, Statistics};
use crate::output::{ConsoleRenderer, Render};
use crate::wordlists::WordList;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Run the menu loop until the player exits or input ends
///
/// Returns the statistics of the games played.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<I, W, R>(
    input: &mut I,
    mut out: W,
    words: &WordList,
    config: &mut GameConfig,
    rng: &mut R,
) -> Result<Statistics>
where
    I: BufRead,
    W: Write,
    R: Rng,
{
    let mut stats = Statistics::default();

    loop {
        print_menu(&mut out, config, &stats)?;

        let Some(choice) = read_line(input)? else {
            break;
        };
        writeln!(out)?;

        match choice.trim() {
            "1" => {
                let secret = words.choose(rng).clone();
                let mut session = config.new_session(secret);
                writeln!(
                    out,
                    "The word has {} letters. You have {} attempts.\n",
                    session.secret().len(),
                    session.max_attempts()
                )?;

                let mut renderer = ConsoleRenderer::new(&mut out);
                let completed = play_session(input, &mut renderer, &mut session)?;
                stats.record(&session);
                if !completed {
                    break;
                }
            }
            "2" => {
                write!(out, "Enter new maximum attempts: ")?;
                out.flush()?;
                let Some(value) = read_line(input)? else {
                    break;
                };
                match config.set_max_attempts(&value) {
                    Ok(max) => writeln!(out, "Maximum attempts updated to {max}.")?,
                    Err(err) => writeln!(out, "{}", err.to_string().red())?,
                }
            }
            "3" => {
                writeln!(out, "Exiting the game. Goodbye!")?;
                break;
            }
            other => debug!(choice = other, "ignoring menu input"),
        }
    }

    Ok(stats)
}

/// Play one session to the end
///
/// Guesses are trimmed and lowercased before scoring. Guesses with non-ASCII
/// letters are refused without using an attempt. Returns `false` if the input
/// ran out before the session finished.
///
/// # Errors
///
/// Returns an error if reading input or rendering fails.
pub fn play_session<I: BufRead, R: Render>(
    input: &mut I,
    renderer: &mut R,
    session: &mut GameSession,
) -> io::Result<bool> {
    while !session.is_finished() {
        renderer.prompt_guess()?;
        let Some(line) = read_line(input)? else {
            return Ok(false);
        };
        let guess = line.trim().to_lowercase();
        if !guess.is_ascii() {
            debug!(%guess, "refusing non-ASCII guess");
            renderer.unsupported_letters(&guess)?;
            continue;
        }

        match session.guess(&guess) {
            Ok(outcome) => {
                renderer.scored(&guess, &outcome.result)?;
                if let GameState::InProgress { .. } = outcome.state {
                    renderer.attempts_left(session.attempts_left())?;
                }
            }
            Err(err) => renderer.rejected(&err)?,
        }
    }

    renderer.finished(session.state(), session.secret())?;
    Ok(true)
}

fn print_menu<W: Write>(out: &mut W, config: &GameConfig, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "\n{}", "!! Wordle Game !!".bright_cyan().bold())?;
    writeln!(out, "1. Start New Game")?;
    writeln!(
        out,
        "2. Set Maximum Attempts (currently {})",
        config.max_attempts()
    )?;
    writeln!(out, "3. Exit")?;
    if stats.total_games > 0 {
        writeln!(
            out,
            "{}",
            format!(
                "Games: {} | Win Rate: {:.0}%",
                stats.total_games,
                stats.win_rate()
            )
            .bright_black()
        )?;
    }
    write!(out, "Enter your choice: ")?;
    out.flush()
}

/// Read one line, `None` at end of input
fn read_line<I: BufRead>(input: &mut I) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ScoreResult, Word};
    use crate::game::SessionError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;
    use std::num::NonZeroU32;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Render for Recorder {
        fn prompt_guess(&mut self) -> io::Result<()> {
            self.events.push("prompt".into());
            Ok(())
        }

        fn scored(&mut self, guess: &str, result: &ScoreResult) -> io::Result<()> {
            self.events.push(format!("{guess} {result}"));
            Ok(())
        }

        fn rejected(&mut self, error: &SessionError) -> io::Result<()> {
            self.events.push(format!("rejected: {error}"));
            Ok(())
        }

        fn unsupported_letters(&mut self, guess: &str) -> io::Result<()> {
            self.events.push(format!("unsupported: {guess}"));
            Ok(())
        }

        fn attempts_left(&mut self, remaining: u32) -> io::Result<()> {
            self.events.push(format!("left {remaining}"));
            Ok(())
        }

        fn finished(&mut self, state: GameState, secret: &Word) -> io::Result<()> {
            self.events.push(format!("{state:?} {secret}"));
            Ok(())
        }
    }

    fn play(input: &str) -> (String, Statistics, GameConfig) {
        colored::control::set_override(false);
        let words = WordList::from_lines(["apple"], "test").unwrap();
        let mut config = GameConfig::default();
        let mut out = Vec::new();
        let stats = run_simple(
            &mut Cursor::new(input),
            &mut out,
            &words,
            &mut config,
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap();
        (String::from_utf8(out).unwrap(), stats, config)
    }

    #[test]
    fn session_events_in_order() {
        let mut session =
            GameSession::new(Word::new("apple").unwrap(), NonZeroU32::new(6).unwrap());
        let mut recorder = Recorder::default();
        let mut input = Cursor::new("PLEAS\napp\n apple \n");

        assert!(play_session(&mut input, &mut recorder, &mut session).unwrap());
        assert_eq!(
            recorder.events,
            vec![
                "prompt",
                "pleas YYYY-",
                "left 5",
                "prompt",
                "rejected: Guess must be 5 letters long, got 3",
                "prompt",
                "apple GGGGG",
                "Won apple",
            ]
        );
    }

    #[test]
    fn non_ascii_guess_costs_no_attempt() {
        let mut session =
            GameSession::new(Word::new("apple").unwrap(), NonZeroU32::new(6).unwrap());
        let mut recorder = Recorder::default();
        let mut input = Cursor::new("CAFÉE\npleas\n");

        assert!(!play_session(&mut input, &mut recorder, &mut session).unwrap());
        assert_eq!(
            recorder.events,
            vec![
                "prompt",
                "unsupported: cafée",
                "prompt",
                "pleas YYYY-",
                "left 5",
                "prompt",
            ]
        );
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.attempts_left(), 5);
    }

    #[test]
    fn non_ascii_guess_shown_intact() {
        let (out, stats, _) = play("1
cafée
apple
3
");

        assert!(out.contains("Invalid guess 'cafée'. Use plain letters A-Z only."));
        assert!(!out.contains('Ã'));
        assert_eq!(stats.games_won, 1);
    }

    #[test]
    fn session_ends_with_input() {
        let mut session =
            GameSession::new(Word::new("apple").unwrap(), NonZeroU32::new(6).unwrap());
        let mut recorder = Recorder::default();

        assert!(!play_session(&mut Cursor::new("crane\n"), &mut recorder, &mut session).unwrap());
        assert!(!session.is_finished());
    }

    #[test]
    fn win_from_menu() {
        let (out, stats, _) = play("1\npleas\napple\n3\n");

        assert!(out.contains("The word has 5 letters"));
        assert!(out.contains("You have 5 attempts left."));
        assert!(out.contains("Congratulations! You guessed the word correctly!"));
        assert!(out.contains("Goodbye"));
        assert_eq!(stats.games_won, 1);
    }

    #[test]
    fn loss_reveals_word() {
        let (out, stats, config) = play("2\n2\n1\ncrane\nslate\n3\n");

        assert_eq!(config.max_attempts().get(), 2);
        assert!(out.contains("Maximum attempts updated to 2."));
        assert!(out.contains("You have 1 attempt left."));
        assert!(out.contains("The word was: APPLE"));
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 0);
    }

    #[test]
    fn invalid_max_attempts_kept() {
        let (out, _, config) = play("2\nmany\n2\n-1\n3\n");

        assert!(out.contains("'many' is not a number"));
        assert!(out.contains("must be positive"));
        assert_eq!(config.max_attempts().get(), 6);
    }

    #[test]
    fn unknown_menu_choice_reprompts() {
        let (out, stats, _) = play("9\nhello\n3\n");
        assert_eq!(out.matches("Enter your choice:").count(), 3);
        assert_eq!(stats.total_games, 0);
    }

    #[test]
    fn end_of_input_exits() {
        let (_, stats, _) = play("1\ncrane\n");
        assert_eq!(stats.total_games, 0);
    }
}

//! Terminal Wordle - CLI
//!
//! Word-guessing game with TUI and line-based modes, plus opener analysis.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::num::NonZeroU32;
use termwordle::{
    commands::{analyze_word, rank_openers, run_simple},
    game::{DEFAULT_MAX_ATTEMPTS, GameConfig},
    logging::init_tracing,
    output::{print_analysis_result, print_rank_result},
    wordlists::WordList,
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "termwordle",
    about = "Guess the secret word, one colored letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Maximum attempts per game
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: NonZeroU32,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode with a text menu
    Simple,

    /// Show how much a word reveals as an opening guess
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Rank every list word as an opening guess
    Rank {
        /// Number of words to show
        #[arg(short, long, default_value = "10")]
        top: usize,
    },
}

/// Load the word list selected by the -w flag
fn load_wordlist(wordlist: &str) -> Result<WordList> {
    match wordlist {
        "embedded" => WordList::embedded().context("embedded word list is unusable"),
        path => WordList::from_file(path)
            .with_context(|| format!("cannot start a game without words from '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // No word, no game: abort before any session starts
    let words = load_wordlist(&cli.wordlist)?;
    info!(words = words.len(), source = %cli.wordlist, "word list ready");

    let mut config = GameConfig::new(cli.max_attempts);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&words, config),
        Commands::Simple => {
            let stdin = io::stdin();
            run_simple(
                &mut stdin.lock(),
                io::stdout(),
                &words,
                &mut config,
                &mut rand::rng(),
            )?;
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &words)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Rank { top } => {
            run_rank_command(&words, top);
            Ok(())
        }
    }
}

fn run_rank_command(words: &WordList, top: usize) {
    let pb = ProgressBar::new(0);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {eta}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let result = rank_openers(words, top, &pb);
    print_rank_result(&result);
}

fn run_play_command(words: &WordList, config: GameConfig) -> Result<()> {
    use termwordle::interactive::{App, run_tui};

    let app = App::new(words, config);
    run_tui(app)
}

//! Word list loading and secret word selection

use crate::core::Word;
use rand::Rng;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Failure to produce a usable word list
#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("Failed to read word list {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Word list {origin} contains no usable words")]
    Empty { origin: String },
}

/// A non-empty list of candidate secret words
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Build a list from raw lines
    ///
    /// Lines are trimmed and lowercased; blank lines are skipped, as are lines
    /// that do not form a valid word.
    ///
    /// # Errors
    /// Returns `WordSourceError::Empty` if no usable word remains.
    ///
    /// # Examples
    /// ```
    /// use termwordle::wordlists::loader::WordList;
    ///
    /// let list = WordList::from_lines(["Crane", "", "  slate "], "inline").unwrap();
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.words()[0].text(), "crane");
    ///
    /// assert!(WordList::from_lines(Vec::<&str>::new(), "inline").is_err());
    /// ```
    pub fn from_lines<I, S>(lines: I, origin: &str) -> Result<Self, WordSourceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<Word> = lines
            .into_iter()
            .enumerate()
            .filter_map(|(n, line)| {
                let trimmed = line.as_ref().trim();
                if trimmed.is_empty() {
                    return None;
                }
                match Word::new(trimmed.to_lowercase()) {
                    Ok(word) => Some(word),
                    Err(err) => {
                        warn!(origin, line = n + 1, %err, "skipping word list entry");
                        None
                    }
                }
            })
            .collect();

        if words.is_empty() {
            return Err(WordSourceError::Empty {
                origin: origin.to_string(),
            });
        }

        debug!(origin, count = words.len(), "word list loaded");
        Ok(Self { words })
    }

    /// Load a newline-delimited word list from a file
    ///
    /// # Errors
    ///
    /// Returns `WordSourceError::Unreadable` if the file cannot be read and
    /// `WordSourceError::Empty` if it holds no usable words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordSourceError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| WordSourceError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_lines(content.lines(), &path.display().to_string())
    }

    /// The list compiled into the binary
    ///
    /// # Errors
    /// Returns `WordSourceError::Empty` if the build shipped an empty list.
    pub fn embedded() -> Result<Self, WordSourceError> {
        Self::from_lines(super::WORDS, "<embedded>")
    }

    /// Pick a word uniformly at random
    pub fn choose<R: Rng>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // Lists are never empty
    pub fn len(&self) -> usize {
        self.words.len()
    }
}

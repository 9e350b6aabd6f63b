//! Opener analysis command
//!
//! Scores one guess against every word in the list to show how much an
//! opening guess tends to reveal.

use crate::core::{LetterStatus, Word, WordError, score};
use crate::wordlists::WordList;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Result of analyzing an opening guess
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub word: String,
    pub total_words: usize,
    pub avg_correct: f64,
    pub avg_present: f64,
    /// Percentage of secret words sharing no letter with the guess
    pub miss_rate: f64,
    pub distinct_patterns: usize,
}

impl AnalysisResult {
    /// Ranking value: a correct letter is worth two present ones
    #[must_use]
    pub fn strength(&self) -> f64 {
        self.avg_correct * 2.0 + self.avg_present
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    #[error("Invalid word: {0}")]
    InvalidWord(#[from] WordError),
    #[error("Word list has no {0}-letter words")]
    NoWordsOfLength(usize),
}

/// Analyze `word` as an opening guess against the list
///
/// The word is lowercased before scoring, like player guesses.
///
/// # Errors
///
/// Returns an error if the word is invalid or no list word has its length.
pub fn analyze_word(word: &str, list: &WordList) -> Result<AnalysisResult, AnalyzeError> {
    let guess = Word::new(word.trim().to_lowercase())?;
    let targets = distinct_targets(list, guess.len());

    if targets.is_empty() {
        return Err(AnalyzeError::NoWordsOfLength(guess.len()));
    }

    Ok(analyze_against(guess.text(), &targets))
}

/// Distinct list words of length `len`, in lexical order
pub(crate) fn distinct_targets(list: &WordList, len: usize) -> Vec<&Word> {
    let mut targets: Vec<&Word> = list.words().iter().filter(|w| w.len() == len).collect();
    targets.sort_unstable_by(|a, b| a.text().cmp(b.text()));
    targets.dedup();
    targets
}

/// Score `guess` against each target; all targets must share its length
pub(crate) fn analyze_against(guess: &str, targets: &[&Word]) -> AnalysisResult {
    let mut correct = 0;
    let mut present = 0;
    let mut misses = 0;
    let mut patterns = FxHashSet::default();

    for result in targets.iter().filter_map(|target| score(target, guess).ok()) {
        let c = result.count(LetterStatus::Correct);
        let p = result.count(LetterStatus::Present);
        correct += c;
        present += p;
        if c + p == 0 {
            misses += 1;
        }
        patterns.insert(result);
    }

    let total = targets.len().max(1) as f64;
    AnalysisResult {
        word: guess.to_string(),
        total_words: targets.len(),
        avg_correct: correct as f64 / total,
        avg_present: present as f64 / total,
        miss_rate: misses as f64 / total * 100.0,
        distinct_patterns: patterns.len(),
    }
}

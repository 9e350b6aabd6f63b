//! Guess scoring
//!
//! Classifies every letter of a guess against the secret word as
//! [`LetterStatus::Correct`], [`LetterStatus::Present`] or
//! [`LetterStatus::Absent`], handling duplicate letters the way Wordle does.

use super::Word;
use std::fmt;
use thiserror::Error;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    /// Letter not in word (or every occurrence already claimed)
    Absent,
    /// Letter in word, wrong position
    Present,
    /// Letter in correct position
    Correct,
}

/// Guess length does not match the secret word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Guess must be {expected} letters long, got {actual}")]
pub struct LengthMismatch {
    pub expected: usize,
    pub actual: usize,
}

/// Per-letter feedback for one guess, aligned with the guess positions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoreResult(Vec<LetterStatus>);

impl ScoreResult {
    /// All statuses in guess order
    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = LetterStatus> + '_ {
        self.0.iter().copied()
    }

    /// Number of scored letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Count letters with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            let c = match status {
                LetterStatus::Correct => 'G',
                LetterStatus::Present => 'Y',
                LetterStatus::Absent => '-',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Score `guess` against the secret `word`
///
/// Letters are compared byte for byte; no case folding happens here.
///
/// # Algorithm
/// 1. First pass: mark all exact matches Correct and consume those word positions
/// 2. Second pass: for each remaining letter, claim the leftmost unconsumed
///    occurrence in the word (Present), or mark it Absent
///
/// The first pass finishes before the second starts, so a later exact match is
/// never stolen by an earlier misplaced letter. A letter that appears k times in
/// the word is reported Correct or Present at most k times.
///
/// # Errors
/// Returns `LengthMismatch` if the guess length differs from the word length.
///
/// # Examples
/// ```
/// use termwordle::core::{score, LetterStatus::*, Word};
///
/// let word = Word::new("apple").unwrap();
/// let result = score(&word, "pleas").unwrap();
/// assert_eq!(result.statuses(), &[Present, Present, Present, Present, Absent]);
///
/// assert!(score(&word, "app").is_err());
/// ```
pub fn score(word: &Word, guess: &str) -> Result<ScoreResult, LengthMismatch> {
    let answer = word.as_bytes();
    let guess = guess.as_bytes();

    if guess.len() != answer.len() {
        return Err(LengthMismatch {
            expected: answer.len(),
            actual: guess.len(),
        });
    }

    let mut result = vec![LetterStatus::Absent; guess.len()];
    let mut consumed = vec![false; answer.len()];

    // First pass: exact position matches
    for (i, (&g, &a)) in guess.iter().zip(answer).enumerate() {
        if g == a {
            result[i] = LetterStatus::Correct;
            consumed[i] = true;
        }
    }

    // Second pass: leftmost unclaimed occurrence elsewhere in the word
    for (i, &g) in guess.iter().enumerate() {
        if result[i] == LetterStatus::Correct {
            continue;
        }

        let claim = answer
            .iter()
            .zip(consumed.iter())
            .position(|(&a, &used)| !used && a == g);

        if let Some(j) = claim {
            consumed[j] = true;
            result[i] = LetterStatus::Present;
        }
    }

    Ok(ScoreResult(result))
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::{Absent, Correct, Present};
    use super::*;

    fn statuses(word: &str, guess: &str) -> Vec<LetterStatus> {
        score(&Word::new(word).unwrap(), guess)
            .unwrap()
            .statuses()
            .to_vec()
    }

    #[test]
    fn exact_guess_is_win() {
        let word = Word::new("APPLE").unwrap();
        let result = score(&word, "APPLE").unwrap();

        assert_eq!(result.statuses(), &[Correct; 5]);
        assert!(result.is_win());
    }

    #[test]
    fn all_letters_misplaced() {
        assert_eq!(
            statuses("APPLE", "PLEAS"),
            vec![Present, Present, Present, Present, Absent]
        );
    }

    #[test]
    fn all_absent() {
        let result = score(&Word::new("abcde").unwrap(), "fghij").unwrap();
        assert_eq!(result.count(Absent), 5);
        assert!(!result.is_win());
    }

    #[test]
    fn duplicate_guess_letters_limited_by_word() {
        // Word ABCAB: A at 0 and 3, B at 1 and 4, C at 2
        // Guess AABBB: A(0) and B(4) exact; second A claims word[3];
        // first spare B claims word[1]; last spare B has nothing left
        assert_eq!(
            statuses("ABCAB", "AABBB"),
            vec![Correct, Present, Present, Absent, Correct]
        );
    }

    #[test]
    fn exact_match_is_not_stolen_by_earlier_letter() {
        // The E at guess[4] must stay Correct even though guess[0] scans first
        assert_eq!(
            statuses("abcde", "exxxe"),
            vec![Absent, Absent, Absent, Absent, Correct]
        );
    }

    #[test]
    fn duplicate_letters_green_takes_priority() {
        // SPEED vs ERASE: S yellow, P gray, both E yellow, D gray
        assert_eq!(
            statuses("erase", "speed"),
            vec![Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn duplicate_letters_complex() {
        // ROBOT vs FLOOR: R yellow, first O yellow, B gray, second O green, T gray
        assert_eq!(
            statuses("floor", "robot"),
            vec![Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert_eq!(statuses("ab", "AB"), vec![Absent, Absent]);
    }

    #[test]
    fn length_mismatch_rejected() {
        let word = Word::new("apple").unwrap();

        assert_eq!(
            score(&word, "app"),
            Err(LengthMismatch {
                expected: 5,
                actual: 3
            })
        );
        assert_eq!(
            score(&word, "apples"),
            Err(LengthMismatch {
                expected: 5,
                actual: 6
            })
        );
        assert!(score(&word, "").is_err());
    }

    #[test]
    fn result_length_matches_word() {
        for (word, guess) in [("a", "b"), ("ab", "ba"), ("abcdefg", "gfedcba")] {
            let result = score(&Word::new(word).unwrap(), guess).unwrap();
            assert_eq!(result.len(), word.len());
        }
    }

    #[test]
    fn scoring_is_deterministic() {
        let word = Word::new("speed").unwrap();
        assert_eq!(score(&word, "eerie"), score(&word, "eerie"));
    }

    #[test]
    fn matches_never_exceed_word_occurrences() {
        let words = ["apple", "speed", "abcab", "aaaaa", "floor", "geese"];
        let guesses = ["eeeee", "ppppp", "aabbb", "esepe", "ooooo", "sheep"];

        for word in words {
            let word = Word::new(word).unwrap();
            for guess in guesses {
                let result = score(&word, guess).unwrap();
                for letter in guess.bytes() {
                    let matched = guess
                        .bytes()
                        .zip(result.iter())
                        .filter(|&(g, s)| g == letter && s != Absent)
                        .count();
                    assert!(
                        matched <= word.occurrences(letter),
                        "{guess} vs {word}: '{}' matched {matched} times",
                        letter as char
                    );
                }
            }
        }
    }

    #[test]
    fn win_only_for_identical_guess() {
        let word = Word::new("sheep").unwrap();
        for guess in ["sheep", "sheet", "peehs", "SHEEP"] {
            let result = score(&word, guess).unwrap();
            assert_eq!(result.is_win(), guess == "sheep", "{guess}");
        }
    }

    #[test]
    fn display_uses_pattern_letters() {
        let result = score(&Word::new("ABCAB").unwrap(), "AABBB").unwrap();
        assert_eq!(result.to_string(), "GYY-G");
    }
}

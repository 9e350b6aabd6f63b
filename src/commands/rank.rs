//! Opener ranking command
//!
//! Analyzes every word of the list as an opening guess and ranks them.

use super::analyze::{AnalysisResult, analyze_against, distinct_targets};
use crate::wordlists::WordList;
use indicatif::ProgressBar;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Outcome of a ranking run
#[derive(Debug)]
pub struct RankResult {
    pub word_length: usize,
    pub candidates: usize,
    pub top: Vec<AnalysisResult>,
    pub duration: Duration,
}

/// Word length shared by the most list words (shortest wins ties)
#[must_use]
pub fn dominant_length(list: &WordList) -> usize {
    let mut counts: FxHashMap<usize, usize> = FxHashMap::default();
    for word in list.words() {
        *counts.entry(word.len()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .max_by(|(len_a, count_a), (len_b, count_b)| {
            count_a.cmp(count_b).then(len_b.cmp(len_a))
        })
        .map_or(0, |(len, _)| len)
}

/// Rank every word of the dominant length as an opener
///
/// Candidates are analyzed in parallel; `progress` is advanced once per word.
#[must_use]
pub fn rank_openers(list: &WordList, top: usize, progress: &ProgressBar) -> RankResult {
    let start = Instant::now();
    let word_length = dominant_length(list);
    let targets = distinct_targets(list, word_length);

    debug!(word_length, candidates = targets.len(), "ranking openers");
    progress.set_length(targets.len() as u64);

    let mut ranked: Vec<AnalysisResult> = targets
        .par_iter()
        .map(|candidate| {
            let result = analyze_against(candidate.text(), &targets);
            progress.inc(1);
            result
        })
        .collect();

    progress.finish_and_clear();

    ranked.sort_by(|a, b| {
        b.strength()
            .total_cmp(&a.strength())
            .then_with(|| a.word.cmp(&b.word))
    });
    ranked.truncate(top);

    RankResult {
        word_length,
        candidates: targets.len(),
        top: ranked,
        duration: start.elapsed(),
    }
}

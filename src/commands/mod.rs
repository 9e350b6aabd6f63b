//! Command implementations

pub mod analyze;
pub mod rank;
pub mod simple;

pub use analyze::{AnalysisResult, AnalyzeError, analyze_word};
pub use rank::{RankResult, rank_openers};
pub use simple::{play_session, run_simple};

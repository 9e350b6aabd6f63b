//! Terminal output formatting
//!
//! Game event rendering, display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;
mod render;

pub use display::{print_analysis_result, print_rank_result};
pub use render::{ConsoleRenderer, Render};

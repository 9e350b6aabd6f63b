//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{AnalysisResult, RankResult};
use colored::Colorize;

/// Print the result of analyzing an opener
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "OPENER ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let letters = result.word.len() as f64;
    println!("\n📊 Against {} possible words:", result.total_words);
    println!(
        "   Correct:     [{}] {}",
        create_progress_bar(result.avg_correct, letters, 30).green(),
        format!("{:.2} letters", result.avg_correct).bright_yellow()
    );
    println!(
        "   Present:     [{}] {}",
        create_progress_bar(result.avg_present, letters, 30).yellow(),
        format!("{:.2} letters", result.avg_present).bright_yellow()
    );
    println!("   No hits:     {:.1}% of words", result.miss_rate);
    println!("   Patterns:    {} distinct", result.distinct_patterns);
}

/// Print the best openers from a ranking run
pub fn print_rank_result(result: &RankResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "OPENER RANKING".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📈 {} {}-letter words ranked in {:.2}s",
        result.candidates,
        result.word_length,
        result.duration.as_secs_f64()
    );
    println!();

    for (i, entry) in result.top.iter().enumerate() {
        println!(
            "   {:>3}. {}  {} correct  {} present  {} patterns",
            (i + 1).to_string().bright_black(),
            entry.word.to_uppercase().bright_white().bold(),
            format!("{:.2}", entry.avg_correct).green(),
            format!("{:.2}", entry.avg_present).yellow(),
            entry.distinct_patterns
        );
    }
}

//! Display functions for command results

use super::formatters::{feedback_to_emoji, lives_bar};
use crate::commands::CheckResult;
use crate::core::LetterStatus;
use crate::game::Session;
use colored::Colorize;

/// Print the result of a one-shot guess evaluation
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess:  {}",
        colorize_guess(result.guess.text(), result.feedback.statuses())
    );
    println!("Secret: {}", result.secret.text().bright_yellow().bold());
    println!("{}", "─".repeat(40).cyan());

    println!("\n{}", feedback_to_emoji(&result.feedback));
    println!(
        "{} correct, {} present, {} absent",
        result.feedback.count_correct().to_string().green(),
        result.feedback.count_present().to_string().yellow(),
        (result.feedback.len() - result.feedback.count_correct() - result.feedback.count_present())
            .to_string()
            .bright_black()
    );

    if result.feedback.is_perfect() {
        println!("\n{}", "Exact match!".green().bold());
    }
}

/// Print a one-line colored rendering of a guess
#[must_use]
pub fn colorize_guess(text: &str, statuses: &[LetterStatus]) -> String {
    text.chars()
        .zip(statuses)
        .map(|(c, status)| {
            let cell = format!(" {c} ");
            match status {
                LetterStatus::Correct => cell.black().on_green().to_string(),
                LetterStatus::Present => cell.black().on_yellow().to_string(),
                LetterStatus::Absent => cell.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Print the terminal win/loss banner for a finished session
pub fn print_session_result(session: &Session) {
    println!("\n{}", "═".repeat(60).cyan());
    if session.lives_left() > 0 {
        println!(
            "{}",
            "    🎉 ✨  A L L   W O R D S   F O U N D !  ✨ 🎉    "
                .bright_green()
                .bold()
        );
    } else {
        println!("{}", "    💀  O U T   O F   L I V E S  💀    ".red().bold());
    }
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n  Words resolved: {}/{}",
        session.completed().len().to_string().bright_cyan().bold(),
        session.words_total()
    );
    println!("  Lives: {}", lives_bar(session.lives()).bright_red());
    println!("\n{}", "═".repeat(60).cyan());
}

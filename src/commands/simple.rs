//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI

use crate::core::Word;
use crate::game::{KeyInput, NoticeKind, Phase, Session};
use crate::output::display::{colorize_guess, print_session_result};
use crate::output::formatters::{feedback_to_emoji, lives_bar};
use colored::Colorize;
use std::io::{self, Write};
use std::thread;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(words: &[Word]) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                W O R D   G A U N T L E T                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess every word in the list. Six tries per word; every wrong");
    println!("guess spends one life from the shared pool.\n");
    println!("Commands: 'quit' to exit, 'new' to restart\n");

    let mut session = Session::new(words, &mut rand::rng());

    loop {
        if session.is_game_over() {
            print_session_result(&session);

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    session = Session::new(words, &mut rand::rng());
                    println!("\n🔄 New gauntlet started!\n");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        // Drop any partial input left over from a rejected guess
        while !session.input().is_empty() {
            session.handle_key(KeyInput::Backspace);
        }

        let Some(secret_len) = session.secret_len() else {
            continue;
        };

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Word {}/{} | {} letters | lives {}",
            session.completed().len() + 1,
            session.words_total(),
            secret_len,
            lives_bar(session.lives())
        );
        println!("────────────────────────────────────────────────────────────");

        for guess in session.guesses() {
            if let Some(feedback) = session.feedback_for(guess) {
                println!(
                    "  {}  {}",
                    colorize_guess(guess.text(), feedback.statuses()),
                    feedback_to_emoji(&feedback)
                );
            }
        }

        let input = get_user_input(&format!("Guess ({secret_len} letters)"))?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session = Session::new(words, &mut rand::rng());
                println!("\n🔄 New gauntlet started!\n");
                continue;
            }
            text => {
                if text.len() > secret_len {
                    println!("{}", format!("The word must be {secret_len} letters long.\n").yellow());
                    continue;
                }
                for c in text.chars() {
                    session.handle_key(KeyInput::Letter(c));
                }
                session.handle_key(KeyInput::Enter);
            }
        }

        if let Some(notice) = session.notice() {
            let styled = match notice.kind {
                NoticeKind::Info => notice.text.normal(),
                NoticeKind::Success => notice.text.green().bold(),
                NoticeKind::Error => notice.text.red().bold(),
            };
            println!("\n{styled}\n");
        }

        // A finished round pauses on screen, then rolls into the next one
        if let Phase::RoundOver(outcome) = session.phase() {
            thread::sleep(outcome.display_pause());
            session.advance_round();
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

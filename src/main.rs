//! Word Gauntlet - CLI
//!
//! Multi-round word-guessing gauntlet with TUI and plain CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use word_gauntlet::{
    commands::{check_guess, run_simple},
    core::Word,
    output::print_check_result,
    wordlists::{WORDS, loader},
};

#[derive(Parser)]
#[command(
    name = "word_gauntlet",
    about = "Guess every word in the gauntlet before your lives run out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default, 10 words) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Evaluate one guess against a secret word
    Check {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },
}

/// Load the word list based on the -w flag
fn load_words(wordlist_mode: &str) -> Result<Vec<Word>> {
    let words = match wordlist_mode {
        "embedded" => loader::words_from_slice(WORDS),
        path => loader::load_from_file(path)?,
    };

    anyhow::ensure!(!words.is_empty(), "Word list '{wordlist_mode}' is empty");
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let words = load_words(&cli.wordlist)?;
            run_play_command(words)
        }
        Commands::Simple => {
            let words = load_words(&cli.wordlist)?;
            run_simple(&words).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Check { guess, secret } => {
            let result = check_guess(&guess, &secret).map_err(|e| anyhow::anyhow!(e))?;
            print_check_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(words: Vec<Word>) -> Result<()> {
    use word_gauntlet::interactive::{App, run_tui};

    let app = App::new(words);
    run_tui(app)
}

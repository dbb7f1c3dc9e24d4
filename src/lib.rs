//! Word Gauntlet
//!
//! A multi-round word-guessing game for the terminal: guess every word in a
//! shuffled list, six tries per word, with one shared pool of lives for the
//! whole run.
//!
//! # Quick Start
//!
//! ```rust
//! use word_gauntlet::core::{Feedback, Word};
//!
//! // Evaluate a guess against a secret
//! let guess = Word::new("apple").unwrap();
//! let secret = Word::new("apply").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &secret);
//! assert_eq!(feedback.count_correct(), 4);
//! ```

// Core domain types
pub mod core;

// Round and session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

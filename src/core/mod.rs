//! Core domain types for the word gauntlet
//!
//! This module contains the fundamental domain types with zero external
//! state. All types here are pure, testable, and have clear properties.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterStatus, keyboard_status};
pub use word::{MAX_LEN, MIN_LEN, Word, WordError};

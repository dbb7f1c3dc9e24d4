//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus};
use crate::game::Life;

/// Emoji square for a single letter status
#[must_use]
pub const fn status_symbol(status: LetterStatus) -> char {
    match status {
        LetterStatus::Correct => '🟩',
        LetterStatus::Present => '🟨',
        LetterStatus::Absent => '⬜',
    }
}

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.statuses().iter().copied().map(status_symbol).collect()
}

/// Format the lives pool as a row of hearts
///
/// Alive markers render as filled hearts, spent ones as hollow hearts.
#[must_use]
pub fn lives_bar(lives: &[Life]) -> String {
    lives
        .iter()
        .map(|life| if life.is_alive() { '♥' } else { '♡' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn feedback_to_emoji_all_absent() {
        let feedback = Feedback::evaluate(
            &Word::new("fall").unwrap(),
            &Word::new("town").unwrap(),
        );
        assert_eq!(feedback_to_emoji(&feedback), "⬜⬜⬜⬜");
    }

    #[test]
    fn feedback_to_emoji_all_correct() {
        let word = Word::new("cheer").unwrap();
        let feedback = Feedback::evaluate(&word, &word);
        assert_eq!(feedback_to_emoji(&feedback), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn feedback_to_emoji_mixed() {
        let feedback = Feedback::evaluate(
            &Word::new("apple").unwrap(),
            &Word::new("apply").unwrap(),
        );
        assert_eq!(feedback_to_emoji(&feedback), "🟩🟩🟩🟩⬜");
    }

    #[test]
    fn lives_bar_mixed() {
        let lives = [Life::Spent, Life::Alive, Life::Alive];
        assert_eq!(lives_bar(&lives), "♡♥♥");
    }

    #[test]
    fn lives_bar_empty() {
        assert_eq!(lives_bar(&[]), "");
    }
}

//! Word lists for the gauntlet
//!
//! Provides the embedded session word list compiled into the binary, plus a
//! loader for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MAX_LEN, MIN_LEN};

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        for &word in WORDS {
            assert!(
                (MIN_LEN..=MAX_LEN).contains(&word.len()),
                "Word '{word}' length out of range"
            );
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_have_no_duplicates() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn expected_count() {
        assert_eq!(WORDS_COUNT, 10, "Expected a 10-word gauntlet");
    }

    #[test]
    fn lengths_span_the_board_range() {
        let lengths: Vec<usize> = WORDS.iter().map(|w| w.len()).collect();
        assert!(lengths.contains(&MIN_LEN));
        assert!(lengths.contains(&MAX_LEN));
    }
}

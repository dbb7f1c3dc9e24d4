//! Guess evaluation against a secret word
//!
//! Evaluating a guess classifies each letter position as correct (right
//! letter, right spot), present (right letter, wrong spot), or absent. The
//! two-pass algorithm resolves exact matches first so duplicate letters are
//! credited at most as many times as they occur in the secret.

use super::Word;
use rustc_hash::FxHashMap;

/// Per-position verdict for one guessed letter
///
/// Variants are ordered so that `Correct > Present > Absent`, which lets the
/// keyboard aggregation keep the best status seen with a plain `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

/// Feedback for a full guess: one `LetterStatus` per position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback(Vec<LetterStatus>);

impl Feedback {
    /// Evaluate `guess` against `secret`
    ///
    /// Both words must have the same length; callers enforce this before
    /// submission (the controller rejects short guesses, and the secret is
    /// drawn from the same validated list).
    ///
    /// # Algorithm
    /// 1. First pass: mark exact-position matches as correct and remove each
    ///    matched letter from a multiset of the secret's letters
    /// 2. Second pass: remaining positions are present if the multiset still
    ///    holds the letter (removing one instance), absent otherwise
    ///
    /// # Examples
    /// ```
    /// use word_gauntlet::core::{Feedback, LetterStatus, Word};
    ///
    /// let guess = Word::new("apple").unwrap();
    /// let secret = Word::new("apply").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &secret);
    ///
    /// assert_eq!(feedback.statuses()[4], LetterStatus::Absent);
    /// assert_eq!(feedback.count_correct(), 4);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        debug_assert_eq!(guess.len(), secret.len(), "guess/secret length mismatch");

        let len = guess.len();
        let mut result = vec![LetterStatus::Absent; len];
        let mut available = secret.char_counts();

        // First pass: exact-position matches
        // Allow: index needed to access guess[i], secret[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..len {
            if guess.chars()[i] == secret.chars()[i] {
                result[i] = LetterStatus::Correct;

                // Remove from the available pool
                let letter = guess.chars()[i];
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: letters in the wrong position
        // Allow: index needed to access guess[i] and check/set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..len {
            if result[i] == LetterStatus::Absent {
                let letter = guess.chars()[i];
                if let Some(count) = available.get_mut(&letter)
                    && *count > 0
                {
                    result[i] = LetterStatus::Present;
                    *count -= 1;
                }
            }
        }

        Self(result)
    }

    /// The per-position statuses, in guess order
    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length feedback (never produced by `evaluate`)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Count positions classified as correct
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0
            .iter()
            .filter(|&&s| s == LetterStatus::Correct)
            .count()
    }

    /// Count positions classified as present
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0
            .iter()
            .filter(|&&s| s == LetterStatus::Present)
            .count()
    }

    /// True if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&s| s == LetterStatus::Correct)
    }
}

/// Best status seen for each letter across a whole guess history
///
/// Drives on-screen keyboard coloring: a letter that was ever correct stays
/// correct even if a later guess placed it badly.
#[must_use]
pub fn keyboard_status(guesses: &[Word], secret: &Word) -> FxHashMap<u8, LetterStatus> {
    let mut best: FxHashMap<u8, LetterStatus> = FxHashMap::default();

    for guess in guesses {
        let feedback = Feedback::evaluate(guess, secret);
        for (i, &status) in feedback.statuses().iter().enumerate() {
            let letter = guess.chars()[i];
            best.entry(letter)
                .and_modify(|current| *current = (*current).max(status))
                .or_insert(status);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    /// Per letter, correct+present never exceeds occurrences in the secret
    fn assert_letter_count_invariant(guess: &Word, secret: &Word) {
        let feedback = Feedback::evaluate(guess, secret);
        let secret_counts = secret.char_counts();

        let mut credited: FxHashMap<u8, u8> = FxHashMap::default();
        for (i, &status) in feedback.statuses().iter().enumerate() {
            if status != LetterStatus::Absent {
                *credited.entry(guess.chars()[i]).or_insert(0) += 1;
            }
        }

        for (letter, count) in credited {
            assert!(
                count <= *secret_counts.get(&letter).unwrap_or(&0),
                "letter {} credited {} times against {}",
                letter as char,
                count,
                secret.text()
            );
        }
    }

    #[test]
    fn evaluate_same_word_all_correct() {
        for text in ["the", "fall", "cheer", "harvest"] {
            let w = word(text);
            let feedback = Feedback::evaluate(&w, &w);
            assert!(feedback.is_perfect());
            assert_eq!(feedback.count_correct(), w.len());
            assert_eq!(feedback.count_present(), 0);
        }
    }

    #[test]
    fn evaluate_no_common_letters() {
        let feedback = Feedback::evaluate(&word("fall"), &word("town"));
        assert_eq!(
            feedback.statuses(),
            &[
                LetterStatus::Absent,
                LetterStatus::Absent,
                LetterStatus::Absent,
                LetterStatus::Absent
            ]
        );
    }

    #[test]
    fn evaluate_apple_vs_apply() {
        let feedback = Feedback::evaluate(&word("apple"), &word("apply"));
        assert_eq!(
            feedback.statuses(),
            &[
                LetterStatus::Correct,
                LetterStatus::Correct,
                LetterStatus::Correct,
                LetterStatus::Correct,
                LetterStatus::Absent
            ]
        );
    }

    #[test]
    fn evaluate_length_matches_guess() {
        let feedback = Feedback::evaluate(&word("cheer"), &word("arbor"));
        assert_eq!(feedback.len(), 5);
    }

    #[test]
    fn evaluate_correct_count_matches_positions() {
        let guess = word("bests");
        let secret = word("fests");
        let feedback = Feedback::evaluate(&guess, &secret);

        let expected = guess
            .chars()
            .iter()
            .zip(secret.chars())
            .filter(|(g, s)| g == s)
            .count();
        assert_eq!(feedback.count_correct(), expected);
    }

    #[test]
    fn evaluate_duplicate_letters() {
        // ALLEE vs LEVEL:
        // Pass 1 matches only position 3 (E), leaving {L, E, V, L}.
        // Pass 2: A absent, both Ls present, trailing E present.
        let feedback = Feedback::evaluate(&word("allee"), &word("level"));
        assert_eq!(
            feedback.statuses(),
            &[
                LetterStatus::Absent,
                LetterStatus::Present,
                LetterStatus::Present,
                LetterStatus::Correct,
                LetterStatus::Present
            ]
        );
    }

    #[test]
    fn evaluate_duplicate_guess_letters_not_overcredited() {
        // THE has one E; a guess with three Es gets credit for exactly one
        let feedback = Feedback::evaluate(&word("eke"), &word("the"));
        let credited = feedback.count_correct() + feedback.count_present();
        assert!(credited <= 2); // E once, K never
        assert_eq!(feedback.statuses()[2], LetterStatus::Correct);
        assert_eq!(feedback.statuses()[0], LetterStatus::Absent);
    }

    #[test]
    fn evaluate_exact_match_beats_loose_match() {
        // Second R in ARBOR must not steal the positional match
        let feedback = Feedback::evaluate(&word("arbor"), &word("arbor"));
        assert!(feedback.is_perfect());
    }

    #[test]
    fn letter_count_invariant_holds() {
        let pairs = [
            ("allee", "level"),
            ("apple", "apply"),
            ("cheer", "erect"),
            ("eke", "the"),
            ("fest", "fell"),
            ("harvest", "started"),
        ];
        for (g, s) in pairs {
            assert_letter_count_invariant(&word(g), &word(s));
        }
    }

    #[test]
    fn keyboard_status_keeps_best() {
        let secret = word("cheer");
        let guesses = vec![word("erect"), word("cheer")];
        let status = keyboard_status(&guesses, &secret);

        // C was present in ERECT, then correct in CHEER: best wins
        assert_eq!(status.get(&b'C'), Some(&LetterStatus::Correct));
        assert_eq!(status.get(&b'T'), Some(&LetterStatus::Absent));
        // Letter never guessed has no status
        assert_eq!(status.get(&b'Z'), None);
    }

    #[test]
    fn keyboard_status_does_not_downgrade() {
        let secret = word("fall");
        // L correct in pos 2 of FALL via "fall"... use two guesses where the
        // second places A badly after the first placed it correctly
        let guesses = vec![word("fall"), word("alfa")];
        let status = keyboard_status(&guesses, &secret);
        assert_eq!(status.get(&b'A'), Some(&LetterStatus::Correct));
        assert_eq!(status.get(&b'F'), Some(&LetterStatus::Correct));
    }

    #[test]
    fn keyboard_status_empty_history() {
        let status = keyboard_status(&[], &word("fall"));
        assert!(status.is_empty());
    }
}

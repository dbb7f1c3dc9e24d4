//! Session state machine
//!
//! A session walks the player through a shuffled word list. Each round offers
//! up to [`MAX_ATTEMPTS`] guesses at one secret word; every wrong guess
//! spends one life from a pool shared across the whole session. The session
//! ends when every word has been resolved (won) or the pool is empty (lost).
//!
//! All mutation goes through the key-press and round-advance entry points, so
//! hosts hold one `Session` value and never touch its fields directly.

use crate::core::{Feedback, LetterStatus, Word, keyboard_status};
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashMap;
use std::time::Duration;

/// Maximum guesses per round
pub const MAX_ATTEMPTS: usize = 6;

/// Size of the session-wide lives pool
pub const INITIAL_LIVES: usize = 20;

/// A discrete input event forwarded by the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// A single letter key
    Letter(char),
    /// Submit the current input as a guess
    Enter,
    /// Remove the last typed letter
    Backspace,
}

/// How the current round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The player guessed the word
    Solved,
    /// Attempts ran out and the word was revealed
    Revealed,
}

impl RoundOutcome {
    /// How long hosts display the outcome before advancing to the next round
    #[must_use]
    pub const fn display_pause(self) -> Duration {
        match self {
            Self::Solved => Duration::from_millis(2000),
            Self::Revealed => Duration::from_millis(3000),
        }
    }
}

/// Where the session currently stands
///
/// `RoundOver` is the transition window between rounds: input is ignored
/// until the host calls [`Session::advance_round`] after the display pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InRound,
    RoundOver(RoundOutcome),
    Won,
    Lost,
}

/// One marker in the lives pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Life {
    Alive,
    Spent,
}

impl Life {
    #[inline]
    #[must_use]
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }
}

/// Styling hint for a transient message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// Transient user-facing message, replaced or cleared by later transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

impl Notice {
    fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Success,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Error,
        }
    }
}

/// Full game state for one session
#[derive(Debug, Clone)]
pub struct Session {
    /// Word list in play order, shuffled once at session start
    words: Vec<Word>,
    /// Secret of the current round; None once the session is won
    secret: Option<Word>,
    /// Guesses submitted against the current secret
    guesses: Vec<Word>,
    /// Letters typed but not yet submitted
    input: String,
    /// Words resolved so far, by solving or by revealing
    completed: Vec<Word>,
    lives: Vec<Life>,
    notice: Option<Notice>,
    phase: Phase,
}

impl Session {
    /// Start a new session with the standard lives pool
    ///
    /// Shuffles a copy of `words` and begins the first round. Restarting the
    /// game is just constructing a fresh session.
    pub fn new<R: Rng + ?Sized>(words: &[Word], rng: &mut R) -> Self {
        Self::with_lives(words, INITIAL_LIVES, rng)
    }

    /// Start a new session with a custom lives pool size
    pub fn with_lives<R: Rng + ?Sized>(words: &[Word], lives: usize, rng: &mut R) -> Self {
        let mut shuffled = words.to_vec();
        shuffled.shuffle(rng);

        let mut session = Self {
            words: shuffled,
            secret: None,
            guesses: Vec::new(),
            input: String::new(),
            completed: Vec::new(),
            lives: vec![Life::Alive; lives],
            notice: None,
            phase: Phase::InRound,
        };
        session.start_next_round();
        session
    }

    /// Feed one key-press event into the session
    ///
    /// Ignored entirely outside an active round: after game over, during the
    /// round-transition window, and in the degenerate no-secret state.
    pub fn handle_key(&mut self, key: KeyInput) {
        if self.phase != Phase::InRound {
            return;
        }
        let Some(secret_len) = self.secret.as_ref().map(Word::len) else {
            return;
        };

        match key {
            KeyInput::Enter => {
                if self.input.len() != secret_len {
                    self.notice = Some(Notice::error(format!(
                        "The word must be {secret_len} letters long."
                    )));
                    return;
                }
                self.submit_guess();
            }
            KeyInput::Backspace => {
                self.input.pop();
            }
            KeyInput::Letter(c) => {
                if c.is_ascii_alphabetic() && self.input.len() < secret_len {
                    self.input.push(c.to_ascii_uppercase());
                }
            }
        }
    }

    /// Advance past a finished round
    ///
    /// The delayed continuation target: hosts call this once the outcome's
    /// display pause has elapsed. No-op in any other phase, so a restart that
    /// replaced the session state cancels the pending advance implicitly.
    pub fn advance_round(&mut self) {
        if matches!(self.phase, Phase::RoundOver(_)) {
            self.start_next_round();
        }
    }

    fn start_next_round(&mut self) {
        if self.completed.len() == self.words.len() {
            self.notice = Some(Notice::success(
                "Congratulations! You've found all the words!",
            ));
            self.secret = None;
            self.phase = Phase::Won;
            return;
        }

        self.secret = Some(self.words[self.completed.len()].clone());
        self.guesses.clear();
        self.input.clear();
        self.notice = None;
        self.phase = Phase::InRound;
    }

    fn submit_guess(&mut self) {
        let Some(secret) = self.secret.clone() else {
            return;
        };
        // Input is letter-filtered and length-checked, so this cannot fail;
        // treat a failure as a rejected guess rather than panic.
        let Ok(guess) = Word::new(&self.input) else {
            self.input.clear();
            return;
        };
        self.input.clear();
        self.guesses.push(guess.clone());

        if guess == secret {
            self.completed.push(secret);
            self.notice = Some(Notice::success("Correct! On to the next word."));
            self.phase = Phase::RoundOver(RoundOutcome::Solved);
            return;
        }

        self.spend_life();

        if self.lives_left() == 0 {
            self.notice = Some(Notice::error("Out of lives! The gauntlet ends here."));
            self.phase = Phase::Lost;
        } else if self.guesses.len() >= MAX_ATTEMPTS {
            self.notice = Some(Notice::error(format!("Out of tries! The word was {secret}.")));
            self.completed.push(secret);
            self.phase = Phase::RoundOver(RoundOutcome::Revealed);
        }
    }

    /// Convert the first alive marker; only the spent count is meaningful
    fn spend_life(&mut self) {
        if let Some(slot) = self.lives.iter_mut().find(|l| l.is_alive()) {
            *slot = Life::Spent;
        }
    }

    /// Length of the current secret, if a round is active
    #[must_use]
    pub fn secret_len(&self) -> Option<usize> {
        self.secret.as_ref().map(Word::len)
    }

    /// Classify a guess against the current secret
    ///
    /// Returns None when no round is active or the lengths differ, so callers
    /// can only ever evaluate guesses that were actually submitted.
    #[must_use]
    pub fn feedback_for(&self, guess: &Word) -> Option<Feedback> {
        let secret = self.secret.as_ref()?;
        if guess.len() != secret.len() {
            return None;
        }
        Some(Feedback::evaluate(guess, secret))
    }

    /// Best status per letter across the round's guess history
    #[must_use]
    pub fn keyboard_status(&self) -> FxHashMap<u8, LetterStatus> {
        match &self.secret {
            Some(secret) => keyboard_status(&self.guesses, secret),
            None => FxHashMap::default(),
        }
    }

    /// Guesses submitted in the current round, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Letters typed but not yet submitted
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Words resolved so far, in resolution order
    #[must_use]
    pub fn completed(&self) -> &[Word] {
        &self.completed
    }

    /// Total number of words in the session
    #[must_use]
    pub fn words_total(&self) -> usize {
        self.words.len()
    }

    /// The lives pool in display order
    #[must_use]
    pub fn lives(&self) -> &[Life] {
        &self.lives
    }

    /// Count of unspent lives
    #[must_use]
    pub fn lives_left(&self) -> usize {
        self.lives.iter().filter(|l| l.is_alive()).count()
    }

    /// Current transient message, if any
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once the session reached a terminal state
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::Won | Phase::Lost)
    }

    /// True while a finished round waits for [`Session::advance_round`]
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::RoundOver(_))
    }
}

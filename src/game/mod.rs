//! Round and session control
//!
//! The [`Session`] state machine owns all game state; frontends forward
//! [`KeyInput`] events into it and read snapshots back out for rendering.

mod session;

pub use session::{
    INITIAL_LIVES, KeyInput, Life, MAX_ATTEMPTS, Notice, NoticeKind, Phase, RoundOutcome, Session,
};

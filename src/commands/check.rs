//! One-shot guess evaluation command

use crate::core::{Feedback, Word};

/// Result of evaluating one guess against one secret
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub guess: Word,
    pub secret: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word fails validation or the lengths differ.
pub fn check_guess(guess: &str, secret: &str) -> Result<CheckResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret: {e}"))?;

    if guess.len() != secret.len() {
        return Err(format!(
            "Guess and secret must be the same length ({} vs {})",
            guess.len(),
            secret.len()
        ));
    }

    let feedback = Feedback::evaluate(&guess, &secret);
    Ok(CheckResult {
        guess,
        secret,
        feedback,
    })
}

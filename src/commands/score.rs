//! One-shot scoring command
//!
//! Scores a single guess against a given secret without starting a game.

use crate::core::{Feedback, Word};
use anyhow::{Context, Result};

/// Result of scoring one guess
#[derive(Debug)]
pub struct ScoreResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is not 5 letters A-Z.
pub fn score_words(secret: &str, guess: &str) -> Result<ScoreResult> {
    let secret = Word::new(secret).context("Invalid secret word")?;
    let guess = Word::new(guess).context("Invalid guess")?;
    let feedback = Feedback::calculate(&secret, &guess);

    Ok(ScoreResult {
        secret,
        guess,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFeedback::{Absent, Correct, Present};

    #[test]
    fn scores_valid_words() {
        let result = score_words("robot", "books").unwrap();
        assert_eq!(result.secret.text(), "ROBOT");
        assert_eq!(
            result.feedback,
            Feedback::new([Present, Correct, Present, Absent, Absent])
        );
    }

    #[test]
    fn reports_which_word_is_invalid() {
        let err = score_words("robo", "books").unwrap_err();
        assert_eq!(err.to_string(), "Invalid secret word");

        let err = score_words("robot", "b00ks").unwrap_err();
        assert_eq!(err.to_string(), "Invalid guess");
    }
}

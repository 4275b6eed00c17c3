//! Core domain types for Wordle
//!
//! Words and the scoring engine. Everything here is pure: scoring a guess has
//! no side effects and needs no game state.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterFeedback, ScoreError};
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

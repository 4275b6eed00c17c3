//! Per-letter feedback for a guess
//!
//! Each position of a guess receives one of three tags:
//! - `Absent` (gray): letter not in the secret, or all its occurrences are claimed
//! - `Present` (yellow): letter in the secret at another position
//! - `Correct` (green): letter in the correct position

use super::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::Hash;
use std::ops::Index;

/// Feedback tag for a single letter position
///
/// Variants are ordered by strength: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterFeedback {
    /// Letter not in the secret word (gray)
    Absent,
    /// Letter in the secret word, wrong position (yellow)
    Present,
    /// Letter in the correct position (green)
    Correct,
}

impl LetterFeedback {
    /// Emoji tile for this tag
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-letter code: G, Y or -
    #[must_use]
    pub const fn to_code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Error returned when raw scoring input is not two 5-letter words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    InvalidInput { secret_len: usize, guess_len: usize },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput {
                secret_len,
                guess_len,
            } => write!(
                f,
                "Cannot score: secret and guess must both be {WORD_LENGTH} letters \
                 (secret has {secret_len}, guess has {guess_len})"
            ),
        }
    }
}

impl std::error::Error for ScoreError {}

/// Feedback for a whole guess, aligned position by position with the guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_LENGTH]);

impl Feedback {
    /// All greens
    pub const PERFECT: Self = Self([LetterFeedback::Correct; WORD_LENGTH]);

    /// Create feedback from explicit tags
    #[inline]
    #[must_use]
    pub const fn new(tags: [LetterFeedback; WORD_LENGTH]) -> Self {
        Self(tags)
    }

    /// Score `guess` against `secret`
    ///
    /// Implements the duplicate-aware Wordle rules.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches (greens) and remove them from the
    ///    secret's letter pool
    /// 2. Second pass: mark remaining letters yellow while the pool still
    ///    holds that letter, gray otherwise
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterFeedback::*, Word};
    ///
    /// let secret = Word::new("shirt").unwrap();
    /// let guess = Word::new("sassy").unwrap();
    ///
    /// // Only one S in SHIRT, and the green claims it
    /// assert_eq!(
    ///     Feedback::calculate(&secret, &guess),
    ///     Feedback::new([Correct, Absent, Absent, Absent, Absent])
    /// );
    /// ```
    #[must_use]
    pub fn calculate(secret: &Word, guess: &Word) -> Self {
        score_letters(secret.chars(), guess.chars(), secret.char_counts())
    }

    /// Score raw strings, validating that both are 5 characters
    ///
    /// Letters are compared case-insensitively. Prefer [`Feedback::calculate`]
    /// when both sides are already [`Word`]s.
    ///
    /// # Errors
    /// Returns `ScoreError::InvalidInput` if either input is not exactly
    /// 5 characters long.
    pub fn score(secret: &str, guess: &str) -> Result<Self, ScoreError> {
        let secret_len = secret.chars().count();
        let guess_len = guess.chars().count();
        if secret_len != WORD_LENGTH || guess_len != WORD_LENGTH {
            return Err(ScoreError::InvalidInput {
                secret_len,
                guess_len,
            });
        }

        // Case folding can change the length ('ß' becomes "SS"), so fold
        // per character and keep the first character of each fold
        let secret = fold_letters(secret);
        let guess = fold_letters(guess);

        let mut pool: FxHashMap<char, u8> = FxHashMap::default();
        for &ch in &secret {
            *pool.entry(ch).or_insert(0) += 1;
        }

        Ok(score_letters(&secret, &guess, pool))
    }

    /// Iterate over the tags in position order
    pub fn iter(&self) -> impl Iterator<Item = LetterFeedback> + '_ {
        self.0.iter().copied()
    }

    /// Check if every position is green
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count of green positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.iter().filter(|&t| t == LetterFeedback::Correct).count()
    }

    /// Count of yellow positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.iter().filter(|&t| t == LetterFeedback::Present).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.iter().map(LetterFeedback::to_emoji).collect()
    }
}

impl Index<usize> for Feedback {
    type Output = LetterFeedback;

    fn index(&self, position: usize) -> &Self::Output {
        &self.0[position]
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in self.iter() {
            write!(f, "{}", tag.to_code())?;
        }
        Ok(())
    }
}

/// Uppercase each of the 5 characters of an already length-checked string
fn fold_letters(text: &str) -> [char; WORD_LENGTH] {
    let mut letters = [' '; WORD_LENGTH];
    for (slot, ch) in letters.iter_mut().zip(text.chars()) {
        *slot = ch.to_uppercase().next().unwrap_or(ch);
    }
    letters
}

/// Two-pass scoring over any letter type
///
/// `pool` must hold the letter counts of `secret`.
fn score_letters<T: Copy + Eq + Hash>(
    secret: &[T; WORD_LENGTH],
    guess: &[T; WORD_LENGTH],
    mut pool: FxHashMap<T, u8>,
) -> Feedback {
    let mut result = [LetterFeedback::Absent; WORD_LENGTH];

    // First pass: greens consume from the pool
    for (i, (g, s)) in guess.iter().zip(secret).enumerate() {
        if g == s {
            result[i] = LetterFeedback::Correct;
            if let Some(count) = pool.get_mut(g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: yellows claim whatever is left
    for (i, letter) in guess.iter().enumerate() {
        if result[i] == LetterFeedback::Correct {
            continue;
        }
        if let Some(count) = pool.get_mut(letter)
            && *count > 0
        {
            result[i] = LetterFeedback::Present;
            *count -= 1;
        }
    }

    Feedback(result)
}

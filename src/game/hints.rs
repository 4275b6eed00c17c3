//! Cumulative keyboard hints
//!
//! Tracks the strongest feedback seen for each letter across a session so a
//! front end can color its on-screen keyboard.

use crate::core::{Feedback, LetterFeedback, Word};
use rustc_hash::FxHashMap;

/// Best-known feedback per letter
///
/// Tags only ever upgrade (`Absent` → `Present` → `Correct`). A letter with no
/// entry has not been guessed yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyHintMap {
    hints: FxHashMap<u8, LetterFeedback>,
}

impl KeyHintMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation for `letter`, keeping the stronger tag
    pub fn record(&mut self, letter: u8, tag: LetterFeedback) {
        let entry = self
            .hints
            .entry(letter.to_ascii_uppercase())
            .or_insert(tag);
        if tag > *entry {
            *entry = tag;
        }
    }

    /// Fold a scored guess into the map, one letter at a time
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterFeedback, Word};
    /// use wordle_game::game::KeyHintMap;
    ///
    /// let secret = Word::new("bread").unwrap();
    /// let guess = Word::new("table").unwrap();
    ///
    /// let mut hints = KeyHintMap::new();
    /// hints.apply(&guess, &Feedback::calculate(&secret, &guess));
    ///
    /// assert_eq!(hints.get('b'), Some(LetterFeedback::Present));
    /// assert_eq!(hints.get('T'), Some(LetterFeedback::Absent));
    /// assert_eq!(hints.get('Z'), None);
    /// ```
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, tag) in guess.chars().iter().zip(feedback.iter()) {
            self.record(letter, tag);
        }
    }

    /// Current hint for a letter (case-insensitive)
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterFeedback> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        self.hints
            .get(&(letter.to_ascii_uppercase() as u8))
            .copied()
    }

    /// Iterate over all hinted letters in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterFeedback)> + '_ {
        (b'A'..=b'Z').filter_map(|letter| {
            self.hints
                .get(&letter)
                .map(|&tag| (char::from(letter), tag))
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }
}

//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use super::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// One word per line. Blank lines and entries that are not 5 letters are
/// skipped; valid entries are uppercased.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["sport", "toolong", "bread"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// The embedded default secret words
#[must_use]
pub fn default_words() -> Vec<Word> {
    let mut words = Vec::with_capacity(DEFAULT_WORDS_COUNT);
    words.extend(DEFAULT_WORDS.iter().filter_map(|&s| Word::new(s).ok()));
    words
}

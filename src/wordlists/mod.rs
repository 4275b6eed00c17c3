//! Word lists for picking secret words
//!
//! Provides the default list compiled into the binary and a loader for
//! custom lists.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_count_matches_const() {
        assert_eq!(DEFAULT_WORDS.len(), DEFAULT_WORDS_COUNT);
    }

    #[test]
    fn default_words_are_valid() {
        // All secret words should be 5 letters, uppercase
        for &word in DEFAULT_WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn default_words_contents() {
        assert_eq!(
            DEFAULT_WORDS,
            &["SPORT", "BREAD", "WHISK", "GUESS", "LAYUP", "STATE", "TABLE", "GREAT", "SHIRT"]
        );
    }
}

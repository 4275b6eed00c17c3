//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterFeedback, Word};
use crate::game::KeyHintMap;
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// A single letter tile colored by its feedback
///
/// Letters without feedback (unused keys) are left plain.
#[must_use]
pub fn colored_tile(letter: char, tag: Option<LetterFeedback>) -> ColoredString {
    let tile = format!(" {letter} ");
    match tag {
        Some(LetterFeedback::Correct) => tile.black().on_green().bold(),
        Some(LetterFeedback::Present) => tile.black().on_yellow().bold(),
        Some(LetterFeedback::Absent) => tile.white().on_bright_black(),
        None => tile.normal(),
    }
}

/// A scored guess as a row of colored tiles
#[must_use]
pub fn row_tiles(word: &Word, feedback: &Feedback) -> String {
    word.chars()
        .iter()
        .zip(feedback.iter())
        .map(|(&letter, tag)| colored_tile(char::from(letter), Some(tag)).to_string())
        .collect()
}

/// The keyboard, one string per row, colored by the session's hints
#[must_use]
pub fn keyboard_lines(hints: &KeyHintMap) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|letter| colored_tile(letter, hints.get(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFeedback::{Absent, Correct};

    #[test]
    fn tile_text_without_color() {
        colored::control::set_override(false);
        assert_eq!(colored_tile('A', Some(Correct)).to_string(), " A ");
        assert_eq!(colored_tile('B', None).to_string(), " B ");
    }

    #[test]
    fn row_tiles_spells_word() {
        colored::control::set_override(false);
        let word = Word::new("sport").unwrap();
        let feedback = Feedback::calculate(&word, &word);
        assert_eq!(row_tiles(&word, &feedback), " S  P  O  R  T ");
    }

    #[test]
    fn keyboard_has_all_letters() {
        colored::control::set_override(false);
        let mut hints = KeyHintMap::new();
        hints.record(b'Q', Absent);

        let lines = keyboard_lines(&hints);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(" Q "));
        assert!(lines[2].starts_with("     Z "));

        let letters: usize = lines
            .iter()
            .map(|line| line.chars().filter(char::is_ascii_uppercase).count())
            .sum();
        assert_eq!(letters, 26);
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}

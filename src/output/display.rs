//! Display functions for game and command results

use super::formatters::{create_progress_bar, keyboard_lines, row_tiles};
use crate::commands::ScoreResult;
use crate::core::WORD_LENGTH;
use crate::game::{GameSession, MAX_ATTEMPTS, Outcome, Statistics, SubmitResult, TurnStatus};
use colored::Colorize;
use std::io::{self, Write};

/// Print the welcome banner for the line-based mode
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_banner(out: &mut impl Write, pool_size: usize) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", "W O R D L E".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        "\nGuess the {WORD_LENGTH}-letter word in {MAX_ATTEMPTS} tries ({pool_size} possible words)."
    )?;
    writeln!(out, "Commands: 'new' for a new game, 'quit' to exit\n")
}

/// Print an accepted guess: the tile row plus the updated keyboard
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_turn(
    out: &mut impl Write,
    result: &SubmitResult,
    session: &GameSession,
) -> io::Result<()> {
    writeln!(
        out,
        "\n  {}  {}  {}",
        session.attempts_used().to_string().bright_black(),
        row_tiles(&result.guess, &result.feedback),
        result.feedback.to_emoji()
    )?;

    writeln!(out)?;
    for line in keyboard_lines(session.key_hints()) {
        writeln!(out, "  {line}")?;
    }

    match &result.status {
        TurnStatus::Won { attempts_used } => {
            writeln!(
                out,
                "\n{}",
                format!(
                    "🎉 You guessed correctly! It took you {attempts_used} {}.",
                    if *attempts_used == 1 {
                        "attempt"
                    } else {
                        "attempts"
                    }
                )
                .green()
                .bold()
            )
        }
        TurnStatus::Lost { secret } => writeln!(
            out,
            "\n{} {}",
            "❌ You ran out of guesses. The word was:".red().bold(),
            secret.text().bright_yellow().bold()
        ),
        TurnStatus::InProgress { attempts_remaining } => writeln!(
            out,
            "\n{attempts_remaining} {} left",
            if *attempts_remaining == 1 {
                "guess"
            } else {
                "guesses"
            }
        ),
    }
}

/// Print the share grid of a finished game
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_summary(out: &mut impl Write, session: &GameSession) -> io::Result<()> {
    let score = if session.outcome() == Outcome::Won {
        session.attempts_used().to_string()
    } else {
        "X".to_string()
    };
    writeln!(out, "\n  Wordle {score}/{MAX_ATTEMPTS}")?;
    for (_, feedback) in session.rows() {
        writeln!(out, "  {}", feedback.to_emoji())?;
    }
    Ok(())
}

/// Print play statistics
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_statistics(out: &mut impl Write, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "\n📊 {}", "Statistics:".bright_cyan().bold())?;
    writeln!(out, "   Played:    {}", stats.games_played)?;
    writeln!(out, "   Win rate:  {:.0}%", stats.win_rate())?;

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, most as f64, 20);
        writeln!(out, "   {}: {} {count}", i + 1, bar.green())?;
    }
    Ok(())
}

/// Print the result of the score command
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_score_result(out: &mut impl Write, result: &ScoreResult) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(40).cyan())?;
    writeln!(
        out,
        "Secret: {}   Guess: {}",
        result.secret.text().bright_yellow().bold(),
        result.guess.text().bold()
    )?;
    writeln!(out, "{}", "─".repeat(40).cyan())?;

    writeln!(
        out,
        "\n  {}  {}  {}",
        row_tiles(&result.guess, &result.feedback),
        result.feedback.to_emoji(),
        result.feedback
    )?;

    for (letter, tag) in result.guess.text().chars().zip(result.feedback.iter()) {
        writeln!(out, "  {letter}: {tag:?}")?;
    }

    writeln!(
        out,
        "\n  Correct: {}  Present: {}",
        result.feedback.count_correct(),
        result.feedback.count_present()
    )?;

    if result.feedback.is_perfect() {
        writeln!(out, "\n{}", "✅ Exact match!".green().bold())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::score_words;
    use crate::core::Word;

    fn output_of(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn turn_shows_remaining_guesses() {
        let mut session = GameSession::new(Word::new("bread").unwrap());
        let result = session.submit_guess("table").unwrap();

        let text = output_of(|out| print_turn(out, &result, &session));
        assert!(text.contains("⬜🟨🟨⬜🟨"));
        assert!(text.contains("5 guesses left"));
    }

    #[test]
    fn turn_reveals_secret_on_loss() {
        let mut session = GameSession::new(Word::new("bread").unwrap());
        let mut last = None;
        for _ in 0..MAX_ATTEMPTS {
            last = Some(session.submit_guess("sport").unwrap());
        }

        let text = output_of(|out| print_turn(out, &last.unwrap(), &session));
        assert!(text.contains("The word was: BREAD"));
    }

    #[test]
    fn summary_for_win() {
        let mut session = GameSession::new(Word::new("bread").unwrap());
        session.submit_guess("table").unwrap();
        session.submit_guess("bread").unwrap();

        let text = output_of(|out| print_summary(out, &session));
        assert!(text.contains("Wordle 2/6"));
        assert!(text.contains("🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn statistics_lists_distribution() {
        let stats = Statistics {
            games_played: 2,
            games_won: 1,
            guess_distribution: [0, 0, 1, 0, 0, 0],
        };
        let text = output_of(|out| print_statistics(out, &stats));
        assert!(text.contains("Win rate:  50%"));
        assert!(text.contains("3: ████████████████████ 1"));
    }

    #[test]
    fn score_result_lists_letters_and_counts() {
        let result = score_words("robot", "books").unwrap();
        let text = output_of(|out| print_score_result(out, &result));

        assert!(text.contains("Secret: ROBOT   Guess: BOOKS"));
        assert!(text.contains("YGY--"));
        assert!(text.contains("  B: Present\n  O: Correct\n  O: Present\n  K: Absent\n  S: Absent\n"));
        assert!(text.contains("Correct: 1  Present: 2"));
        assert!(!text.contains("Exact match"));
    }

    #[test]
    fn score_result_exact_match() {
        let result = score_words("robot", "robot").unwrap();
        let text = output_of(|out| print_score_result(out, &result));

        assert!(text.contains("Correct: 5  Present: 0"));
        assert!(text.contains("✅ Exact match!"));
    }
}

//! Simple interactive CLI mode
//!
//! Line-based game without the TUI.

use crate::config::GameConfig;
use crate::game::{GameSession, MAX_ATTEMPTS, Statistics};
use crate::output::{print_banner, print_statistics, print_summary, print_turn};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if no
/// secret word can be picked.
pub fn run_simple(config: &mut GameConfig) -> Result<Statistics> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(&mut stdin.lock(), &mut stdout.lock(), config)
}

/// Run the game loop on arbitrary input and output streams
///
/// Returns the statistics of the games finished before the player quit.
///
/// # Errors
///
/// Returns an error if reading or writing fails or if no secret word can be
/// picked.
pub fn run_simple_with<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &mut GameConfig,
) -> Result<Statistics> {
    print_banner(out, config.pool_size())?;

    let mut stats = Statistics::default();
    let mut session = config.new_session()?;

    loop {
        if session.is_terminal() {
            stats.record(&session);
            print_summary(out, &session)?;
            print_statistics(out, &stats)?;

            match get_user_input(input, out, "\nPlay again? (yes/no)")? {
                Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                    session = start_over(out, config)?;
                    continue;
                }
                _ => break,
            }
        }

        let prompt = format!(
            "Guess {}/{MAX_ATTEMPTS}",
            session.current_attempt_index() + 1
        );
        let Some(line) = get_user_input(input, out, &prompt)? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                session = start_over(out, config)?;
                continue;
            }
            _ => {}
        }

        match session.submit_guess(&line) {
            Ok(result) => print_turn(out, &result, &session)?,
            Err(e) => writeln!(out, "{}\n", format!("⚠ {e}").red())?,
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(stats)
}

fn start_over(out: &mut impl Write, config: &mut GameConfig) -> Result<GameSession> {
    writeln!(out, "\n🔄 New game started!\n")?;
    Ok(config.new_session()?)
}

/// Get user input with a prompt; `None` on end of input
fn get_user_input(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

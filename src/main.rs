//! Wordle Game - CLI
//!
//! Wordle in the terminal, with TUI and plain CLI modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use wordle_game::{
    commands::{run_simple, score_words},
    config::GameConfig,
    core::Word,
    output::{print_score_result, print_statistics},
    wordlists::loader::{default_words, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the secret 5-letter word in 6 tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'default' (built-in secret words) or path to file
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// Seed for picking secret words (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Play with this secret word instead of a random one
    #[arg(long, global = true)]
    word: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Score one guess against a secret word
    Score {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },
}

/// Load the secret word pool based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    let words = match wordlist_mode {
        "default" => default_words(),
        path => load_from_file(path)
            .with_context(|| format!("Failed to read word list from {path}"))?,
    };

    if words.is_empty() {
        bail!("Word list '{wordlist_mode}' contains no valid 5-letter words");
    }
    Ok(words)
}

fn build_config(cli: &Cli) -> Result<GameConfig> {
    let fixed_secret = cli
        .word
        .as_deref()
        .map(Word::new)
        .transpose()
        .context("Invalid --word")?;

    let words = if fixed_secret.is_some() {
        Vec::new()
    } else {
        load_wordlist(&cli.wordlist)?
    };

    Ok(GameConfig::new(words, fixed_secret, cli.seed)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    match cli.command.as_ref().unwrap_or(&Commands::Play) {
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
        Commands::Score { secret, guess } => run_score_command(secret, guess),
    }
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let result = score_words(secret, guess)?;
    print_score_result(&mut io::stdout(), &result)?;
    Ok(())
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let mut config = build_config(cli)?;
    run_simple(&mut config)?;
    Ok(())
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let config = build_config(cli)?;
    let app = App::new(config)?;
    let stats = run_tui(app)?;

    if stats.games_played > 0 {
        print_statistics(&mut io::stdout(), &stats)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_play() {
        let cli = Cli::parse_from(["wordle_game"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.wordlist, "default");
    }

    #[test]
    fn parses_score_command() {
        let cli = Cli::parse_from(["wordle_game", "score", "robot", "books"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Score { ref secret, ref guess }) if secret == "robot" && guess == "books"
        ));
    }

    #[test]
    fn forced_word_skips_wordlist() {
        let cli = Cli::parse_from(["wordle_game", "simple", "--word", "layup", "-w", "missing.txt"]);
        let mut config = build_config(&cli).unwrap();
        assert_eq!(config.new_session().unwrap().secret().text(), "LAYUP");
    }

    #[test]
    fn invalid_forced_word_rejected() {
        let cli = Cli::parse_from(["wordle_game", "--word", "toolong"]);
        assert!(build_config(&cli).is_err());
    }

    #[test]
    fn missing_wordlist_file_errors() {
        assert!(load_wordlist("definitely/not/here.txt").is_err());
        assert_eq!(load_wordlist("default").unwrap().len(), 9);
    }
}

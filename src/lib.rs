//! Wordle Game
//!
//! A terminal Wordle with a duplicate-aware scoring engine and a UI-agnostic
//! game session that any front end can drive.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Feedback, LetterFeedback, Word};
//! use wordle_game::game::{GameSession, Outcome};
//!
//! // Score a single guess
//! let secret = Word::new("robot").unwrap();
//! let guess = Word::new("books").unwrap();
//! println!("{}", Feedback::calculate(&secret, &guess).to_emoji());
//!
//! // Play a game
//! let mut session = GameSession::new(secret);
//! let result = session.submit_guess("books").unwrap();
//! assert_eq!(result.outcome(), Outcome::InProgress);
//! assert_eq!(session.key_hint('O'), Some(LetterFeedback::Correct));
//! ```

// Core domain types and scoring
pub mod core;

// Game session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

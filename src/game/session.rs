//! Game session state machine
//!
//! A session owns the secret word and everything that changes while a game is
//! played. Front ends drive it with [`GameSession::submit_guess`] and render
//! from its read-only queries.

use super::KeyHintMap;
use crate::core::{Feedback, LetterFeedback, WORD_LENGTH, Word, WordError};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

/// Number of guesses a player gets
pub const MAX_ATTEMPTS: usize = 6;

/// Lifecycle of a session
///
/// `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// Errors from starting or playing a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Guess did not have exactly 5 letters
    InvalidLength(usize),
    /// Guess had 5 characters but not all were letters
    InvalidCharacters,
    /// Guess submitted after the game was won or lost
    SessionTerminated,
    /// No secret word to pick from
    EmptyWordList,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(_) => write!(f, "Please enter a {WORD_LENGTH} letter word"),
            Self::InvalidCharacters => write!(f, "Guesses may only contain letters A-Z"),
            Self::SessionTerminated => write!(f, "The game is over, start a new one"),
            Self::EmptyWordList => write!(f, "Word list is empty"),
        }
    }
}

impl std::error::Error for GameError {}

/// Where the game stands after an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnStatus {
    Won { attempts_used: usize },
    Lost { secret: Word },
    InProgress { attempts_remaining: usize },
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResult {
    pub guess: Word,
    pub feedback: Feedback,
    pub status: TurnStatus,
}

impl SubmitResult {
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        match self.status {
            TurnStatus::Won { .. } => Outcome::Won,
            TurnStatus::Lost { .. } => Outcome::Lost,
            TurnStatus::InProgress { .. } => Outcome::InProgress,
        }
    }
}

/// One game of Wordle
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    attempts: usize,
    hints: KeyHintMap,
    outcome: Outcome,
    rows: Vec<(Word, Feedback)>,
}

/// Start a session with a secret picked uniformly from `word_list`
///
/// # Errors
/// Returns `GameError::EmptyWordList` if `word_list` is empty.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_game::core::Word;
/// use wordle_game::game::start_new_session;
///
/// let words = vec![Word::new("sport").unwrap()];
/// let session = start_new_session(&words, &mut StdRng::seed_from_u64(7)).unwrap();
/// assert_eq!(session.secret().text(), "SPORT");
/// ```
pub fn start_new_session<R: Rng + ?Sized>(
    word_list: &[Word],
    rng: &mut R,
) -> Result<GameSession, GameError> {
    let secret = word_list.choose(rng).ok_or(GameError::EmptyWordList)?;
    Ok(GameSession::new(secret.clone()))
}

impl GameSession {
    /// Start a session with a known secret word
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            attempts: 0,
            hints: KeyHintMap::new(),
            outcome: Outcome::InProgress,
            rows: Vec::with_capacity(MAX_ATTEMPTS),
        }
    }

    /// Score a guess and advance the game
    ///
    /// The guess is trimmed and uppercased first. Rejected guesses leave the
    /// session untouched.
    ///
    /// # Errors
    /// - `GameError::InvalidLength` if the guess is not 5 characters
    /// - `GameError::SessionTerminated` if the game is already won or lost
    /// - `GameError::InvalidCharacters` if the guess contains non-letters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{GameError, GameSession, Outcome};
    ///
    /// let mut session = GameSession::new(Word::new("bread").unwrap());
    ///
    /// assert_eq!(session.submit_guess("brd"), Err(GameError::InvalidLength(3)));
    /// assert_eq!(session.current_attempt_index(), 0);
    ///
    /// let result = session.submit_guess("bread").unwrap();
    /// assert_eq!(result.outcome(), Outcome::Won);
    /// assert!(session.is_terminal());
    /// ```
    pub fn submit_guess(&mut self, raw: &str) -> Result<SubmitResult, GameError> {
        let normalized = raw.trim().to_uppercase();

        let len = normalized.chars().count();
        if len != WORD_LENGTH {
            return Err(GameError::InvalidLength(len));
        }

        if self.is_terminal() {
            return Err(GameError::SessionTerminated);
        }

        let guess = Word::new(&normalized).map_err(|e| match e {
            WordError::InvalidLength(len) => GameError::InvalidLength(len),
            WordError::NonAscii | WordError::InvalidCharacters => GameError::InvalidCharacters,
        })?;

        let feedback = Feedback::calculate(&self.secret, &guess);
        self.hints.apply(&guess, &feedback);
        self.rows.push((guess.clone(), feedback));
        self.attempts += 1;

        let status = if guess == self.secret {
            self.outcome = Outcome::Won;
            TurnStatus::Won {
                attempts_used: self.attempts,
            }
        } else if self.attempts == MAX_ATTEMPTS {
            self.outcome = Outcome::Lost;
            TurnStatus::Lost {
                secret: self.secret.clone(),
            }
        } else {
            TurnStatus::InProgress {
                attempts_remaining: self.attempts_remaining(),
            }
        };

        Ok(SubmitResult {
            guess,
            feedback,
            status,
        })
    }

    /// 0-based grid row the next guess goes into
    #[inline]
    #[must_use]
    pub const fn current_attempt_index(&self) -> usize {
        self.attempts
    }

    /// Best-known feedback for a keyboard letter
    #[must_use]
    pub fn key_hint(&self, letter: char) -> Option<LetterFeedback> {
        self.hints.get(letter)
    }

    /// All keyboard hints
    #[must_use]
    pub const fn key_hints(&self) -> &KeyHintMap {
        &self.hints
    }

    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.attempts
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.attempts
    }

    /// Accepted guesses with their feedback, oldest first
    #[must_use]
    pub fn rows(&self) -> &[(Word, Feedback)] {
        &self.rows
    }

    /// The secret word
    ///
    /// Front ends should only show this once the game is lost.
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }
}

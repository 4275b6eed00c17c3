//! Game configuration
//!
//! Holds what a front end needs to start games: the secret word pool, an
//! optional forced secret and the random source.

use crate::core::Word;
use crate::game::{GameError, GameSession, start_new_session};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Source of new game sessions
pub struct GameConfig {
    words: Vec<Word>,
    fixed_secret: Option<Word>,
    rng: StdRng,
}

impl GameConfig {
    /// Create a config from a word pool
    ///
    /// With a `seed` the sequence of secret words is reproducible. A
    /// `fixed_secret` overrides the pool for every game.
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if `words` is empty and no
    /// `fixed_secret` is given.
    pub fn new(
        words: Vec<Word>,
        fixed_secret: Option<Word>,
        seed: Option<u64>,
    ) -> Result<Self, GameError> {
        if words.is_empty() && fixed_secret.is_none() {
            return Err(GameError::EmptyWordList);
        }

        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Ok(Self {
            words,
            fixed_secret,
            rng,
        })
    }

    /// Start the next game
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if there is nothing to pick from.
    pub fn new_session(&mut self) -> Result<GameSession, GameError> {
        match &self.fixed_secret {
            Some(secret) => Ok(GameSession::new(secret.clone())),
            None => start_new_session(&self.words, &mut self.rng),
        }
    }

    /// Number of words secrets are picked from
    #[must_use]
    pub fn pool_size(&self) -> usize {
        if self.fixed_secret.is_some() {
            1
        } else {
            self.words.len()
        }
    }
}

//! Per-run play statistics
//!
//! Kept in memory for the lifetime of a front end; nothing is persisted.

use super::{GameSession, MAX_ATTEMPTS, Outcome};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    /// Wins by number of guesses; index 0 is a win in one
    pub guess_distribution: [usize; MAX_ATTEMPTS],
}

impl Statistics {
    /// Count a finished session. Sessions still in progress are ignored.
    pub fn record(&mut self, session: &GameSession) {
        match session.outcome() {
            Outcome::InProgress => {}
            Outcome::Lost => self.games_played += 1,
            Outcome::Won => {
                self.games_played += 1;
                self.games_won += 1;
                if let Some(slot) = self
                    .guess_distribution
                    .get_mut(session.attempts_used().saturating_sub(1))
                {
                    *slot += 1;
                }
            }
        }
    }

    /// Percentage of games won (0-100)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn finished(secret: &str, guesses: &[&str]) -> GameSession {
        let mut session = GameSession::new(Word::new(secret).unwrap());
        for guess in guesses {
            session.submit_guess(guess).unwrap();
        }
        session
    }

    #[test]
    fn empty_statistics() {
        let stats = Statistics::default();
        assert_eq!(stats.games_played, 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn records_wins_and_losses() {
        let mut stats = Statistics::default();
        stats.record(&finished("great", &["table", "great"]));
        stats.record(&finished("great", &["sport"; MAX_ATTEMPTS]));

        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution, [0, 1, 0, 0, 0, 0]);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ignores_unfinished_session() {
        let mut stats = Statistics::default();
        stats.record(&finished("great", &["table"]));
        assert_eq!(stats, Statistics::default());
    }
}

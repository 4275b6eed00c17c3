//! Game session and keyboard hints
//!
//! Stateful side of the engine. The scoring itself lives in [`crate::core`].

mod hints;
mod session;
mod stats;

pub use hints::KeyHintMap;
pub use session::{
    GameError, GameSession, MAX_ATTEMPTS, Outcome, SubmitResult, TurnStatus, start_new_session,
};
pub use stats::Statistics;

//! Error taxonomy for match configuration and execution.

use crate::board::Move;

/// Errors raised while configuring or running a match.
///
/// Game-over is not an error: wins and draws are ordinary
/// [`Outcome`](crate::match_runner::Outcome) values. These variants cover
/// contract violations by the caller or a player. Neither is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// The supplied player count does not match the number of sides.
    ///
    /// Raised synchronously by [`set_players`](crate::match_runner::MatchRunner::set_players);
    /// not recoverable without correcting the caller.
    #[error("expected {expected} players, got {actual}")]
    PlayerCount {
        /// Number of sides to bind.
        expected: usize,
        /// Number of players supplied.
        actual: usize,
    },

    /// A player returned a coordinate that is occupied or out of range.
    ///
    /// Fatal to the in-progress match: this indicates a defect in the player,
    /// not a transient condition, so the runner aborts instead of retrying.
    #[error("not a valid move: {0}")]
    IllegalMove(Move),
}

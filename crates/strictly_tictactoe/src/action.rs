//! Reasons a player intent can be rejected.
//!
//! The reducers on [`GameState`](crate::GameState) swallow these and leave
//! the state unchanged; the `try_` variants surface them for callers that
//! want to log or test the reason.

use super::{Player, Position};

/// Error that can occur when validating a move or a history jump.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed board already has a winner.
    #[display("Game is already over: {} won", _0)]
    GameOver(Player),

    /// The requested history step does not exist.
    #[display("Step {} is out of range (history holds {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of history entries.
        len: usize,
    },
}

impl std::error::Error for MoveError {}

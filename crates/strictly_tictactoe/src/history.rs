//! Board snapshots recorded after each move.

use crate::{Board, Position};
use serde::{Deserialize, Serialize};

/// One snapshot in the game history.
///
/// The first entry holds the empty board and no position; every later
/// entry records the cell whose mark produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    position: Option<Position>,
}

impl HistoryEntry {
    /// The entry every game starts from.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            position: None,
        }
    }

    /// Creates an entry for a board produced by a move at `position`.
    pub fn after_move(board: Board, position: Position) -> Self {
        Self {
            board,
            position: Some(position),
        }
    }

    /// Returns the board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cell of the move that produced this entry.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// 1-based column of the move, unset for the initial entry.
    pub fn column(&self) -> Option<u8> {
        self.position.map(Position::column)
    }

    /// 1-based row of the move, unset for the initial entry.
    pub fn row(&self) -> Option<u8> {
        self.position.map(Position::row)
    }
}

impl Default for HistoryEntry {
    fn default() -> Self {
        Self::initial()
    }
}

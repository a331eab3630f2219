//! Derived, read-only view of a [`GameState`].
//!
//! Nothing here is stored: a [`GameView`] is recomputed from the state after
//! every transition and handed to whichever presentation draws it.

use crate::rules::{Win, evaluate, is_full};
use crate::{GameState, HistoryEntry, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status line for the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The displayed board has a completed line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The displayed board is full with no completed line.
    #[display("Draw")]
    Draw,
    /// Play continues with this side to move.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// One cell of the rendered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Which cell this is.
    pub position: Position,
    /// The mark it holds.
    pub square: Square,
    /// True if the cell belongs to the winning line.
    pub highlighted: bool,
}

/// A clickable entry of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDescription {
    /// History index this entry jumps to.
    pub step: usize,
    /// Cell played to reach this entry, unset for the game start.
    pub position: Option<Position>,
    /// True for the entry on display.
    pub is_current: bool,
}

impl MoveDescription {
    fn new(step: usize, entry: &HistoryEntry, current: usize) -> Self {
        Self {
            step,
            position: entry.position(),
            is_current: step == current,
        }
    }
}

impl std::fmt::Display for MoveDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Some(pos) if self.step > 0 => write!(
                f,
                "Go to move #{}({},{})",
                self.step,
                pos.column(),
                pos.row()
            ),
            _ => f.write_str("Go to game start"),
        }
    }
}

/// Everything a presentation needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The nine cells in index order.
    pub cells: [CellView; 9],
    /// Winning line of the displayed board, if any.
    pub win: Option<Win>,
    /// Status line.
    pub status: Status,
    /// Move list in display order (last-first when reversed).
    pub moves: Vec<MoveDescription>,
    /// Index of the displayed snapshot.
    pub step: usize,
    /// Whether the move list is reversed.
    pub reversed: bool,
}

impl GameView {
    /// Derives the view for `state`.
    #[instrument(skip_all, fields(step = state.step(), reversed = state.is_reversed()))]
    pub fn from_state(state: &GameState) -> Self {
        let board = state.current().board();
        let win = evaluate(board);

        let cells = Position::ALL.map(|position| CellView {
            position,
            square: board.get(position),
            highlighted: win.is_some_and(|w| w.contains(position)),
        });

        let status = match win {
            Some(w) => Status::Winner(w.winner),
            None if is_full(board) => Status::Draw,
            None => Status::NextPlayer(state.next_player()),
        };

        let mut moves: Vec<_> = state
            .history()
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveDescription::new(step, entry, state.step()))
            .collect();
        if state.is_reversed() {
            moves.reverse();
        }

        Self {
            cells,
            win,
            status,
            moves,
            step: state.step(),
            reversed: state.is_reversed(),
        }
    }

    /// Returns the cell view for `pos`.
    pub fn cell(&self, pos: Position) -> &CellView {
        &self.cells[pos.to_index()]
    }
}

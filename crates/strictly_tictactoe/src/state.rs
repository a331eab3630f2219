//! Branching game history and its transitions.
//!
//! [`GameState`] is a plain value. Every transition consumes the current
//! state and returns the next one, so the presentation layer can hold the
//! latest value and swap it out after each intent.

use crate::action::MoveError;
use crate::history::HistoryEntry;
use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use crate::rules::{Win, evaluate};
use crate::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// History of board snapshots plus the step currently on display.
///
/// Invariants:
/// - `history` is never empty and `history[0]` is the empty board
/// - `step < history.len()`
/// - the side to move is X on even steps and O on odd steps
///
/// Deserialization checks [`GameInvariants`] and rejects any state that
/// play could not have produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    history: Vec<HistoryEntry>,
    step: usize,
    reversed: bool,
}

impl GameState {
    /// Creates a game at its start: one empty snapshot, step 0.
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            step: 0,
            reversed: false,
        }
    }

    /// Assembles a state without checking it.
    pub(crate) fn from_parts(history: Vec<HistoryEntry>, step: usize, reversed: bool) -> Self {
        Self {
            history,
            step,
            reversed,
        }
    }

    /// Builds the state reached by selecting `positions` in order.
    ///
    /// Rejected selections are skipped exactly as they are in play.
    #[instrument(skip_all, fields(moves = positions.len()))]
    pub fn replay(positions: &[Position]) -> Self {
        positions
            .iter()
            .fold(Self::new(), |state, pos| state.select_cell(*pos))
    }

    /// Returns every recorded snapshot, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the index of the snapshot on display.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns true if the move list is displayed last-first.
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Returns the snapshot on display.
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.step]
    }

    /// Returns the side to move, derived from the step parity.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Evaluates the displayed board for a winning line.
    pub fn win(&self) -> Option<Win> {
        evaluate(self.current().board())
    }

    /// Places the next player's mark on `pos`, discarding any history
    /// beyond the displayed step.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the displayed board has a winner
    /// - [`MoveError::SquareOccupied`] if `pos` is taken
    #[instrument(skip(self), fields(step = self.step, player = %self.next_player()))]
    pub fn try_select_cell(&self, pos: Position) -> Result<Self, MoveError> {
        let current = self.current();
        if let Some(win) = evaluate(current.board()) {
            return Err(MoveError::GameOver(win.winner));
        }
        if !current.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let board = current.board().with_mark(pos, self.next_player());
        let mut history = self.history[..=self.step].to_vec();
        let discarded = self.history.len() - history.len();
        history.push(HistoryEntry::after_move(board, pos));

        let next = Self {
            step: history.len() - 1,
            history,
            reversed: self.reversed,
        };
        debug!(step = next.step, discarded, "Move recorded");
        debug_assert!(
            GameInvariants::check_all(&next).is_ok(),
            "select_cell broke a history invariant"
        );
        Ok(next)
    }

    /// Cell-click transition. Illegal selections leave the state unchanged.
    pub fn select_cell(self, pos: Position) -> Self {
        match self.try_select_cell(pos) {
            Ok(next) => next,
            Err(e) => {
                debug!(error = %e, "Ignoring cell selection");
                self
            }
        }
    }

    /// Displays the snapshot at `step` without touching the history.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::StepOutOfRange`] if no such snapshot exists.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn try_jump_to(&self, step: usize) -> Result<Self, MoveError> {
        if step >= self.history.len() {
            return Err(MoveError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        Ok(Self {
            step,
            ..self.clone()
        })
    }

    /// History-navigation transition. Unknown steps leave the state unchanged.
    pub fn jump_to(self, step: usize) -> Self {
        match self.try_jump_to(step) {
            Ok(next) => next,
            Err(e) => {
                debug!(error = %e, "Ignoring history jump");
                self
            }
        }
    }

    /// Flips the move-list display order.
    #[instrument(skip(self), fields(reversed = !self.reversed))]
    pub fn toggle_reverse(mut self) -> Self {
        self.reversed = !self.reversed;
        self
    }
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<HistoryEntry>,
    step: usize,
    reversed: bool,
}

/// A deserialized state that breaks one or more history invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidGameState {
    /// Every invariant the state failed.
    pub violations: Vec<InvariantViolation>,
}

impl std::fmt::Display for InvalidGameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reasons: Vec<_> = self
            .violations
            .iter()
            .map(|v| v.description.as_str())
            .collect();
        write!(f, "Invalid game state: {}", reasons.join("; "))
    }
}

impl std::error::Error for InvalidGameState {}

impl TryFrom<RawGameState> for GameState {
    type Error = InvalidGameState;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self::from_parts(raw.history, raw.step, raw.reversed);
        GameInvariants::check_all(&state).map_err(|violations| {
            debug!(count = violations.len(), "Rejecting deserialized state");
            InvalidGameState { violations }
        })?;
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

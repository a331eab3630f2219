//! First-class invariants for the game history.
//!
//! Invariants are logical properties every reachable [`GameState`] satisfies.
//! Transitions check them in debug builds, and deserializing a
//! [`GameState`] rejects any value that fails them.

use crate::rules::check_winner;
use crate::{GameState, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// The displayed step indexes an existing snapshot.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(state: &GameState) -> bool {
        state.step() < state.history().len()
    }

    fn description() -> &'static str {
        "Displayed step must index an existing history entry"
    }
}

/// X moves first, so every snapshot holds as many X marks as O marks, or one more.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().iter().all(|entry| {
            let x = entry.board().count(Player::X);
            let o = entry.board().count(Player::O);
            x == o || x == o + 1
        })
    }

    fn description() -> &'static str {
        "X count must equal O count or exceed it by one"
    }
}

/// Each snapshot follows from its predecessor by one legal move.
///
/// Entry 0 is the empty board with no recorded position. Entry k places
/// the mark of the side to move at step k-1 on an empty cell of a board
/// that had no winner, and changes nothing else.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        let Some(first) = history.first() else {
            return false;
        };
        if first.position().is_some() || first.board().occupied() != 0 {
            return false;
        }

        history.windows(2).enumerate().all(|(k, pair)| {
            let [before, after] = pair else {
                return false;
            };
            let Some(pos) = after.position() else {
                return false;
            };
            before.board().is_empty(pos)
                && check_winner(before.board()).is_none()
                && *after.board() == before.board().with_mark(pos, Player::for_step(k))
        })
    }

    fn description() -> &'static str {
        "Each history entry must follow from the previous one by a single legal move"
    }
}

/// All history invariants as a composable set.
pub type GameInvariants = (
    StepInRangeInvariant,
    MarkBalanceInvariant,
    HistoryConsistentInvariant,
);

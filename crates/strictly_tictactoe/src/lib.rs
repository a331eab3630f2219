//! Pure tic-tac-toe game logic with a branching move history.
//!
//! # Architecture
//!
//! - **Rules**: win and draw detection over a single [`Board`] snapshot
//! - **State**: [`GameState`] owns every snapshot played so far and the step
//!   on display; transitions consume the state and return the next one
//! - **View**: [`GameView`] is derived from a state for presentation
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameState, GameView, Position};
//!
//! let state = GameState::new()
//!     .select_cell(Position::TopLeft)
//!     .select_cell(Position::Center)
//!     .jump_to(1)
//!     .select_cell(Position::BottomRight);
//!
//! assert_eq!(state.history().len(), 3);
//! assert_eq!(GameView::from_state(&state).status.to_string(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod types;
mod view;

pub use action::MoveError;
pub use history::HistoryEntry;
pub use position::Position;
pub use rules::{Win, evaluate};
pub use state::{GameState, InvalidGameState};
pub use types::{Board, BoardParseError, Player, Square};
pub use view::{CellView, GameView, MoveDescription, Status};

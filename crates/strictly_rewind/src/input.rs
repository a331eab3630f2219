//! Key and mouse translation into player intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position as ScreenPosition, Rect};
use strictly_tictactoe::Position;

/// A user intent the game state understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Place the next mark on a cell.
    SelectCell(Position),
    /// Display a history step.
    JumpTo(usize),
    /// Flip the move-list order.
    ToggleReverse,
    /// Leave the game.
    Quit,
}

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move list.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Moves the board cursor with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (column, row) = (cursor.column(), cursor.row());
    let (column, row) = match key {
        KeyCode::Left => (column.saturating_sub(1), row),
        KeyCode::Right => (column + 1, row),
        KeyCode::Up => (column, row.saturating_sub(1)),
        KeyCode::Down => (column, row + 1),
        _ => (column, row),
    };
    Position::from_coords(column, row).unwrap_or(cursor)
}

/// Keys that produce an intent regardless of focus.
pub fn global_intent(key: KeyEvent) -> Option<Intent> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Intent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Intent::Quit),
        KeyCode::Char('r') => Some(Intent::ToggleReverse),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Intent::SelectCell),
        _ => None,
    }
}

/// Screen regions recorded by the last draw, used to resolve mouse clicks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    /// Rect of each drawn board cell.
    pub cells: Vec<(Rect, Position)>,
    /// Rect of each visible move-list row and the step it jumps to.
    pub moves: Vec<(Rect, usize)>,
    /// Rect of the reverse toggle control.
    pub toggle: Option<Rect>,
}

impl HitMap {
    /// Resolves a left click into an intent.
    pub fn click(&self, mouse: MouseEvent) -> Option<Intent> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let at = ScreenPosition::new(mouse.column, mouse.row);

        if let Some((_, pos)) = self.cells.iter().find(|(rect, _)| rect.contains(at)) {
            return Some(Intent::SelectCell(*pos));
        }
        if let Some((_, step)) = self.moves.iter().find(|(rect, _)| rect.contains(at)) {
            return Some(Intent::JumpTo(*step));
        }
        self.toggle
            .filter(|rect| rect.contains(at))
            .map(|_| Intent::ToggleReverse)
    }
}

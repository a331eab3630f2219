//! Application state and logic.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use strictly_tictactoe::{GameState, GameView, Position};
use tracing::{debug, info, instrument};

use crate::input::{self, Focus, HitMap, Intent};

/// Main application state.
///
/// Owns the current [`GameState`] value plus the purely visual bits
/// (cursors, focus, click regions) the game logic never sees.
#[derive(Debug, Clone)]
pub struct App {
    state: GameState,
    cursor: Position,
    focus: Focus,
    /// Index into the move list as displayed.
    selected_move: usize,
    hits: HitMap,
    should_quit: bool,
}

impl App {
    /// Creates an application over a fresh game.
    pub fn new(start_reversed: bool) -> Self {
        let state = if start_reversed {
            GameState::new().toggle_reverse()
        } else {
            GameState::new()
        };
        Self::from_state(state)
    }

    /// Creates an application over an existing game state.
    pub fn from_state(state: GameState) -> Self {
        let mut app = Self {
            state,
            cursor: Position::Center,
            focus: Focus::Board,
            selected_move: 0,
            hits: HitMap::default(),
            should_quit: false,
        };
        app.follow_current_step();
        app
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Derives the view to draw.
    pub fn view(&self) -> GameView {
        GameView::from_state(&self.state)
    }

    /// Returns the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns the highlighted row of the displayed move list.
    pub fn selected_move(&self) -> usize {
        self.selected_move
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Stores the click regions of the frame just drawn.
    pub fn set_hit_map(&mut self, hits: HitMap) {
        self.hits = hits;
    }

    /// Applies an intent to the game.
    #[instrument(skip(self))]
    pub fn apply(&mut self, intent: Intent) {
        let state = std::mem::take(&mut self.state);
        self.state = match intent {
            Intent::SelectCell(pos) => {
                self.cursor = pos;
                state.select_cell(pos)
            }
            Intent::JumpTo(step) => state.jump_to(step),
            Intent::ToggleReverse => state.toggle_reverse(),
            Intent::Quit => {
                info!("User quit");
                self.should_quit = true;
                state
            }
        };
        self.follow_current_step();
        debug!(
            step = self.state.step(),
            history = self.state.history().len(),
            "Intent applied"
        );
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(intent) = input::global_intent(key) {
            self.apply(intent);
            return;
        }

        match (self.focus, key.code) {
            (_, KeyCode::Tab | KeyCode::BackTab) => self.focus = self.focus.toggle(),
            (Focus::Board, KeyCode::Enter | KeyCode::Char(' ')) => {
                self.apply(Intent::SelectCell(self.cursor));
            }
            (Focus::Board, code) => self.cursor = input::move_cursor(self.cursor, code),
            (Focus::History, KeyCode::Up) => {
                self.selected_move = self.selected_move.saturating_sub(1);
            }
            (Focus::History, KeyCode::Down) => {
                let last = self.state.history().len() - 1;
                self.selected_move = (self.selected_move + 1).min(last);
            }
            (Focus::History, KeyCode::Enter | KeyCode::Char(' ')) => {
                let step = self.displayed_step(self.selected_move);
                self.apply(Intent::JumpTo(step));
            }
            _ => {}
        }
    }

    /// Handles a mouse event using the regions of the last draw.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let Some(intent) = self.hits.click(mouse) {
            debug!(?intent, column = mouse.column, row = mouse.row, "Click resolved");
            self.apply(intent);
        }
    }

    /// Maps a row of the displayed move list to its history step.
    fn displayed_step(&self, row: usize) -> usize {
        if self.state.is_reversed() {
            self.state.history().len() - 1 - row
        } else {
            row
        }
    }

    /// Moves the move-list highlight onto the displayed step.
    fn follow_current_step(&mut self) {
        let step = self.state.step();
        // The row <-> step mapping is its own inverse.
        self.selected_move = self.displayed_step(step);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(false)
    }
}

//! Headless replay of cell selections.

use anyhow::{Context, Result};
use std::io::Write;
use strictly_tictactoe::{GameState, GameView, Position};
use tracing::{info, instrument, warn};

use crate::cli::OutputFormat;
use crate::text;

/// Applies `cells` through the normal transitions, then the optional
/// jump and reverse toggle.
///
/// Selections the game rejects are skipped, exactly as clicks would be.
#[instrument]
pub fn replay_state(cells: &[u8], jump: Option<usize>, reverse: bool) -> GameState {
    let positions: Vec<Position> = cells
        .iter()
        .filter_map(|cell| {
            let pos = Position::from_index(usize::from(*cell));
            if pos.is_none() {
                warn!(cell, "Skipping cell outside the grid");
            }
            pos
        })
        .collect();

    let mut state = GameState::replay(&positions);
    if let Some(step) = jump {
        state = state.jump_to(step);
    }
    if reverse {
        state = state.toggle_reverse();
    }
    info!(
        step = state.step(),
        history = state.history().len(),
        "Replay finished"
    );
    state
}

/// Writes the view of `state` to `out` in the requested format.
pub fn write_view(state: &GameState, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let view = GameView::from_state(state);
    match format {
        OutputFormat::Text => out.write_all(text::render(&view).as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &view).context("Failed to encode view")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

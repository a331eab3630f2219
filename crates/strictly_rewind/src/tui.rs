//! Terminal session: setup, event loop, teardown.

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use strictly_tictactoe::GameState;
use tracing::{error, info, instrument};

use crate::app::App;
use crate::config::Palette;
use crate::input::HitMap;
use crate::ui;

/// Runs the terminal UI until the user quits and returns the final state.
pub fn run_tui(app: App, palette: Palette) -> Result<GameState> {
    info!("Starting Strictly Rewind TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, &palette);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, wait for one event, apply it. Each event runs to completion
/// before the next is read.
#[instrument(skip_all)]
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    palette: &Palette,
) -> Result<GameState>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        let mut hits = HitMap::default();
        terminal.draw(|f| hits = ui::draw(f, &app, palette))?;
        app.set_hit_map(hits);

        if app.should_quit() {
            info!(
                step = app.state().step(),
                history = app.state().history().len(),
                "Leaving game"
            );
            return Ok(app.state().clone());
        }

        match event::read()? {
            // Skip key release events (crossterm fires both press and release on some platforms).
            Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }
}

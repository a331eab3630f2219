//! Strictly Rewind - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use strictly_rewind::{
    App, Cli, Command, RewindConfig, init_file_logging, init_stderr_logging, replay_state,
    run_tui, write_view,
};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file so RUST_LOG can live there
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = RewindConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command.unwrap_or(Command::Play { reversed: false }) {
        Command::Play { reversed } => {
            init_file_logging(config.log_file(), config.log_filter())?;
            let palette = config.theme().palette()?;
            let app = App::new(reversed || *config.start_reversed());
            let final_state = run_tui(app, palette)?;
            info!(moves = final_state.history().len() - 1, "Game closed");
            Ok(())
        }
        Command::Replay {
            cells,
            jump,
            reverse,
            format,
        } => {
            init_stderr_logging(config.log_filter());
            let state = replay_state(&cells, jump, reverse || *config.start_reversed());
            write_view(&state, format, &mut std::io::stdout().lock())
        }
    }
}

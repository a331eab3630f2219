//! Strictly Rewind - tic-tac-toe with move-history navigation.
//!
//! The game logic lives in [`strictly_tictactoe`]; this crate binds it to
//! a terminal (ratatui + crossterm) and to plain text.
//!
//! # Architecture
//!
//! - **Input**: keys and clicks become [`Intent`]s
//! - **App**: applies intents to the current [`GameState`](strictly_tictactoe::GameState)
//! - **UI**: draws a [`GameView`](strictly_tictactoe::GameView) and records click regions
//! - **Replay**: headless selections printed as text or JSON

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod replay;
pub mod text;
mod tui;
mod ui;

// Crate-level exports - CLI
pub use cli::{Cli, Command, OutputFormat};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, Palette, RewindConfig, Theme};

// Crate-level exports - Application
pub use app::App;
pub use input::{Focus, HitMap, Intent};
pub use tui::run_tui;
pub use ui::draw;

// Crate-level exports - Replay and logging
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::{replay_state, write_view};

//! Command-line interface for strictly_rewind.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Strictly Rewind - tic-tac-toe with move-history navigation
#[derive(Parser, Debug)]
#[command(name = "strictly_rewind")]
#[command(about = "Tic-tac-toe with a rewindable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./strictly_rewind.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Start with the move list shown newest-first
        #[arg(long)]
        reversed: bool,
    },

    /// Apply cell selections headlessly and print the resulting view
    Replay {
        /// Cell indices (0-8, row-major) selected in order
        #[arg(value_parser = clap::value_parser!(u8).range(0..=8))]
        cells: Vec<u8>,

        /// History step to display after the selections
        #[arg(long)]
        jump: Option<usize>,

        /// Show the move list newest-first
        #[arg(long)]
        reverse: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for `replay`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain-text grid, status and move list
    #[default]
    Text,
    /// The full view as pretty-printed JSON
    Json,
}

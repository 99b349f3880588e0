//! Command-line interface for rewind.

use crate::report::ReportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Two-player tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "rewind.toml", global = true)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Show the move list newest first
        #[arg(long)]
        descending: bool,
    },

    /// Apply moves without a UI and print the resulting position
    Replay {
        /// Comma-separated cell indices (0-8, row-major)
        #[arg(long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// History step to display after the moves are applied
        #[arg(long)]
        jump: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        /// Show the move list newest first
        #[arg(long)]
        descending: bool,
    },
}

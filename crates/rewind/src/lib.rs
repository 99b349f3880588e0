//! Rewind - terminal front end for time-travel tic-tac-toe.
//!
//! # Architecture
//!
//! - **TUI**: the view; turns keys into [`Intent`]s and renders the
//!   [`GameState`](rewind_tictactoe::GameState) it owns
//! - **Report**: headless replay rendered as text or JSON
//! - **Config**: TOML settings and CLI parsing

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod report;
mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig};
pub use report::{Report, ReportFormat, render, replay};
pub use tui::{App, Focus, Intent, run_tui};

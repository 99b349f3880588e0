//! Rewind - tic-tac-toe with move history and time travel.

use anyhow::{Context, Result};
use clap::Parser;
use rewind::{Cli, Command, GameConfig, ReportFormat, render, replay, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    init_tracing(&config)?;
    info!(config = %cli.config.display(), "Starting rewind");

    match cli.command.unwrap_or(Command::Play { descending: false }) {
        Command::Play { descending } => run_tui(*config.sort_ascending() && !descending),
        Command::Replay {
            moves,
            jump,
            format,
            descending,
        } => run_replay(&config, &moves, jump, format, descending),
    }
}

/// Sends tracing output to the configured log file so it never draws over
/// the terminal UI.
fn init_tracing(config: &GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;
    Ok(())
}

/// Applies the moves and prints the resulting position.
#[instrument(skip(config))]
fn run_replay(
    config: &GameConfig,
    moves: &[usize],
    jump: Option<usize>,
    format: ReportFormat,
    descending: bool,
) -> Result<()> {
    let game = replay(moves, jump, *config.sort_ascending() && !descending)
        .context("Replay failed")?;
    let output = render(&game, format).context("Failed to render report")?;
    println!("{output}");
    Ok(())
}

//! Headless replay: apply moves and describe the resulting position.

use rewind_tictactoe::{GameState, GameStatus, MoveError, MoveListItem, MoveResult, Player, Square};
use serde::Serialize;
use tracing::{info, instrument};

/// Output format for replay reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Board, status and move list as plain text.
    #[default]
    Text,
    /// A JSON object.
    Json,
}

/// Snapshot of a game as seen by a front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Cells in row-major order; `None` for empty.
    pub board: [Option<Player>; 9],
    /// Displayed history step.
    pub current_step: usize,
    /// Number of recorded entries.
    pub history_len: usize,
    /// Structured status.
    pub status: GameStatus,
    /// Human-readable status line.
    pub status_text: String,
    /// Move list in display order.
    pub moves: Vec<MoveListItem>,
}

impl Report {
    /// Builds a report for the displayed position of `game`.
    #[instrument(skip(game))]
    pub fn new(game: &GameState) -> Self {
        Self {
            board: game.current_board().squares().map(Square::player),
            current_step: game.current_step(),
            history_len: game.history().len(),
            status: game.status(),
            status_text: game.status().to_string(),
            moves: game.move_list(),
        }
    }
}

/// Applies `moves` (raw cell indices) to a new game, then jumps to `jump`.
///
/// # Errors
///
/// Fails on the first index outside 0-8 or rejected move, or on a jump
/// outside the resulting history.
#[instrument]
pub fn replay(
    moves: &[usize],
    jump: Option<usize>,
    ascending: bool,
) -> Result<GameState, MoveError> {
    let mut game = GameState::new().with_sort_ascending(ascending);
    for (index, &cell) in moves.iter().enumerate() {
        game = match game.play_index(cell)? {
            MoveResult::Played(next) => next,
            MoveResult::NoOp(reason) => return Err(MoveError::Rejected { index, reason }),
        };
    }

    let game = match jump {
        Some(step) => game.jump_to(step)?,
        None => game,
    };

    info!(step = game.current_step(), entries = game.history().len(), "Replay complete");
    Ok(game)
}

/// Renders `game` in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
#[instrument(skip(game))]
pub fn render(game: &GameState, format: ReportFormat) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(render_text(game)),
        ReportFormat::Json => serde_json::to_string_pretty(&Report::new(game)),
    }
}

fn render_text(game: &GameState) -> String {
    let direction = if game.sort_ascending() {
        "ascending"
    } else {
        "descending"
    };

    let mut out = game.current_board().display();
    out.push_str("\n\n");
    out.push_str(&game.status().to_string());
    out.push_str(&format!("\n\nMoves ({direction}):\n"));
    for item in game.move_list() {
        let marker = if item.is_current { '>' } else { ' ' };
        out.push_str(&format!("{marker} {}\n", item.label));
    }
    out
}

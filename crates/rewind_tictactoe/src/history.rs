//! History entries and move-list presentation.

use super::{Board, Position};
use serde::{Deserialize, Serialize};

/// Label of the first move-list entry.
pub const START_LABEL: &str = "Go to game start";

/// A board snapshot plus the cell played to reach it.
///
/// Entries are plain values; once pushed into a history they are never
/// modified, only copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// Cell played to reach this board; `None` for the starting entry.
    last_played: Option<Position>,
}

impl HistoryEntry {
    /// The all-empty starting entry.
    pub fn start() -> Self {
        Self::new(Board::new(), None)
    }

    /// Returns the board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cell played to reach this entry.
    pub fn last_played(&self) -> Option<Position> {
        self.last_played
    }

    /// Move-list label for this entry at `step`.
    ///
    /// `Go to game start` for the starting entry, otherwise
    /// `Go to move #step (row, col)` with 1-based coordinates.
    pub fn label(&self, step: usize) -> String {
        match self.last_played {
            Some(pos) if step > 0 => format!("Go to move #{step} {pos}"),
            _ => START_LABEL.to_string(),
        }
    }
}

/// One row of the rendered move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveListItem {
    /// History step this row jumps to.
    pub step: usize,
    /// Display label.
    pub label: String,
    /// Whether this is the step currently displayed.
    pub is_current: bool,
}

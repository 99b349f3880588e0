//! Rejections and errors raised by game transitions.

use super::{Player, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Why `play_move` left the state unchanged.
///
/// Not an error: a rejected move is an ordinary outcome of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum NoOpReason {
    /// The position already has a winner.
    #[display("Game already won by {_0}")]
    GameDecided(Player),
    /// The target square is occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),
}

/// Error from a game transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Jump target outside the recorded history.
    #[display("Step {step} is out of range (history has {len} entries)")]
    OutOfRange {
        /// Requested step.
        step: usize,
        /// Number of history entries.
        len: usize,
    },
    /// Raw cell index outside 0-8.
    #[display("Cell index {_0} is out of bounds (must be 0-8)")]
    InvalidIndex(#[error(not(source))] usize),
    /// A replayed move was rejected.
    #[display("Move {index} was rejected: {reason}")]
    Rejected {
        /// Zero-based index of the move in the replayed sequence.
        index: usize,
        /// Why the move was rejected.
        reason: NoOpReason,
    },
}

//! Game state with move history and time travel.
//!
//! [`GameState`] is an immutable value: every transition returns a new state
//! and leaves the receiver untouched. Whoever owns the state (a UI loop, a
//! test) replaces its copy with the returned one.

use super::error::{MoveError, NoOpReason};
use super::history::{HistoryEntry, MoveListItem};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::{Outcome, evaluate, is_draw};
use super::{Board, Player, Position};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Result of [`GameState::play_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum MoveResult {
    /// The move was applied.
    Played(GameState),
    /// The move was rejected; the previous state stands.
    NoOp(NoOpReason),
}

impl MoveResult {
    /// Returns the new state if the move was applied.
    pub fn played(self) -> Option<GameState> {
        match self {
            MoveResult::Played(state) => Some(state),
            MoveResult::NoOp(_) => None,
        }
    }
}

/// Status of the currently displayed position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum GameStatus {
    /// No winner and empty squares remain.
    #[display("Next player: {next}")]
    InProgress {
        /// Player to move.
        next: Player,
    },
    /// A line is complete.
    #[display("Winner: {winner}")]
    Won {
        /// The winning player.
        winner: Player,
        /// The completed line.
        line: [Position; 3],
    },
    /// Full board, no winner.
    #[display("Draw! Everyone loses.")]
    Draw,
}

/// Complete game state: history, displayed step and move-list order.
///
/// The player to move is derived from the parity of the displayed step and
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) current_step: usize,
    pub(crate) sort_ascending: bool,
}

impl GameState {
    /// Creates a new game with a single empty entry.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::start()],
            current_step: 0,
            sort_ascending: true,
        }
    }

    /// Returns a copy with the given move-list order.
    pub fn with_sort_ascending(mut self, ascending: bool) -> Self {
        self.sort_ascending = ascending;
        self
    }

    /// Plays the next player's mark at `pos` from the displayed step.
    ///
    /// History after the displayed step is discarded before the new entry is
    /// appended. The move is a no-op if the displayed position already has a
    /// winner or `pos` is occupied.
    #[instrument(skip(self), fields(position = ?pos, step = self.current_step))]
    pub fn play_move(&self, pos: Position) -> MoveResult {
        let base = self.current_board();

        if let Some(winner) = evaluate(base).winner() {
            debug!(%winner, "Rejected move on decided board");
            return MoveResult::NoOp(NoOpReason::GameDecided(winner));
        }

        if !base.is_empty(pos) {
            debug!("Rejected move on occupied square");
            return MoveResult::NoOp(NoOpReason::SquareOccupied(pos));
        }

        let player = self.next_player();
        let mut history = self.history[..=self.current_step].to_vec();
        let discarded = self.history.len() - history.len();
        history.push(HistoryEntry::new(base.with_mark(pos, player), Some(pos)));

        let next = Self {
            current_step: history.len() - 1,
            history,
            sort_ascending: self.sort_ascending,
        };

        debug_assert!(
            HistoryInvariants::check_all(&next).is_ok(),
            "History invariants violated after move: {:?}",
            HistoryInvariants::check_all(&next)
        );

        info!(%player, step = next.current_step, discarded, "Move played");
        MoveResult::Played(next)
    }

    /// Plays at a raw cell index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidIndex`] if `index` is not a board cell.
    #[instrument(skip(self))]
    pub fn play_index(&self, index: usize) -> Result<MoveResult, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::InvalidIndex(index))?;
        Ok(self.play_move(pos))
    }

    /// Displays the position at `step` without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if `step` is not a recorded entry.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&self, step: usize) -> Result<Self, MoveError> {
        if step >= self.history.len() {
            return Err(MoveError::OutOfRange {
                step,
                len: self.history.len(),
            });
        }

        debug!(to = step, "Jumping through history");
        Ok(Self {
            history: self.history.clone(),
            current_step: step,
            sort_ascending: self.sort_ascending,
        })
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_sort(&self) -> Self {
        Self {
            history: self.history.clone(),
            current_step: self.current_step,
            sort_ascending: !self.sort_ascending,
        }
    }

    /// Plays `moves` in order from a new game.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Rejected`] with the index of the first move
    /// that was a no-op.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Position]) -> Result<Self, MoveError> {
        let mut state = Self::new();
        for (index, pos) in moves.iter().enumerate() {
            state = match state.play_move(*pos) {
                MoveResult::Played(next) => next,
                MoveResult::NoOp(reason) => return Err(MoveError::Rejected { index, reason }),
            };
        }
        Ok(state)
    }

    /// Returns every recorded entry, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the displayed step.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the displayed entry.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.history[self.current_step]
    }

    /// Returns the displayed board.
    pub fn current_board(&self) -> &Board {
        self.current_entry().board()
    }

    /// Player to move at the displayed step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Whether the move list is shown oldest first.
    pub fn sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    /// Win evaluation of the displayed board.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.current_board())
    }

    /// Whether the displayed board is a draw.
    pub fn is_draw(&self) -> bool {
        is_draw(self.current_board())
    }

    /// Status of the displayed position.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        match self.outcome() {
            Outcome::Win { mark, line } => GameStatus::Won { winner: mark, line },
            Outcome::NoWinner if self.is_draw() => GameStatus::Draw,
            Outcome::NoWinner => GameStatus::InProgress {
                next: self.next_player(),
            },
        }
    }

    /// Move-list rows in the current sort order.
    #[instrument(skip(self))]
    pub fn move_list(&self) -> Vec<MoveListItem> {
        let mut items: Vec<MoveListItem> = self
            .history
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveListItem {
                step,
                label: entry.label(step),
                is_current: step == self.current_step,
            })
            .collect();
        if !self.sort_ascending {
            items.reverse();
        }
        items
    }

    /// Whether an earlier entry exists.
    pub fn can_step_back(&self) -> bool {
        self.current_step > 0
    }

    /// Whether a later entry exists.
    pub fn can_step_forward(&self) -> bool {
        self.current_step + 1 < self.history.len()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

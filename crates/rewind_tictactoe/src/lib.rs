//! Pure tic-tac-toe game logic with move history and time travel.
//!
//! # Architecture
//!
//! - **[`GameState`]**: immutable history of board snapshots, the displayed
//!   step and the move-list order. Transitions return new values.
//! - **[`rules`]**: win and draw evaluation over a single [`Board`].
//! - **[`invariants`]**: composable checks of the history guarantees,
//!   verified after every move in debug builds.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, GameStatus, Player, Position};
//!
//! let game = GameState::replay(&[
//!     Position::TopLeft,
//!     Position::Center,
//!     Position::TopCenter,
//!     Position::MiddleLeft,
//!     Position::TopRight,
//! ])?;
//! assert!(matches!(game.status(), GameStatus::Won { winner: Player::X, .. }));
//!
//! // Time travel never truncates; the next move from step 2 does.
//! let rewound = game.jump_to(2)?;
//! assert_eq!(rewound.history().len(), 6);
//! # Ok::<(), rewind_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use error::{MoveError, NoOpReason};
pub use game::{GameState, GameStatus, MoveResult};
pub use history::{HistoryEntry, MoveListItem, START_LABEL};
pub use position::Position;
pub use rules::{Outcome, evaluate, is_draw, is_full};
pub use types::{Board, Player, Square};

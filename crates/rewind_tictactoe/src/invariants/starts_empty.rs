//! Start invariant: history begins with the empty board and the displayed
//! step is a recorded entry.

use super::super::{GameState, Square};
use super::Invariant;
use tracing::{instrument, warn};

/// Invariant: entry 0 is the empty board with no last move, and
/// `current_step` indexes into the history.
pub struct StartsEmptyInvariant;

impl Invariant<GameState> for StartsEmptyInvariant {
    #[instrument(skip(game))]
    fn holds(game: &GameState) -> bool {
        let Some(first) = game.history().first() else {
            warn!("History is empty");
            return false;
        };

        if first.board().squares().iter().any(|s| *s != Square::Empty)
            || first.last_played().is_some()
        {
            warn!("Starting entry is not the empty board");
            return false;
        }

        let in_range = game.current_step() < game.history().len();
        if !in_range {
            warn!(
                step = game.current_step(),
                len = game.history().len(),
                "Displayed step out of range"
            );
        }
        in_range
    }

    fn description() -> &'static str {
        "History must start from the empty board and the displayed step must be recorded"
    }
}

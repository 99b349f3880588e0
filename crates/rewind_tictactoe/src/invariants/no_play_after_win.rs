//! Terminal invariant: nothing is recorded after a won position.

use super::super::GameState;
use super::super::rules::evaluate;
use super::Invariant;
use tracing::{instrument, warn};

/// Invariant: only the last history entry may contain a winning line.
pub struct NoPlayAfterWinInvariant;

impl Invariant<GameState> for NoPlayAfterWinInvariant {
    #[instrument(skip(game))]
    fn holds(game: &GameState) -> bool {
        let last = game.history().len().saturating_sub(1);
        match game.history()[..last]
            .iter()
            .position(|entry| evaluate(entry.board()).winner().is_some())
        {
            Some(step) => {
                warn!(step, "Entries recorded after a win");
                false
            }
            None => true,
        }
    }

    fn description() -> &'static str {
        "No move may be recorded after a winning position"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HistoryEntry, Player, Position};

    #[test]
    fn test_holds_when_win_is_last() {
        let game = GameState::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::TopRight,
        ])
        .expect("valid");
        assert!(NoPlayAfterWinInvariant::holds(&game));
    }

    #[test]
    fn test_detects_move_after_win() {
        let mut game = GameState::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::TopRight,
        ])
        .expect("valid");
        let board = game
            .current_board()
            .with_mark(Position::BottomRight, Player::O);
        game.history.push(HistoryEntry::new(board, Some(Position::BottomRight)));
        assert!(!NoPlayAfterWinInvariant::holds(&game));
    }
}

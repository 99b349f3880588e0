//! Step invariant: consecutive entries differ by exactly one new mark.

use super::super::{GameState, Player, Position, Square};
use super::Invariant;
use tracing::{instrument, warn};

/// Invariant: for every `i > 0`, entry `i` equals entry `i - 1` plus the
/// mark of the player to move at step `i - 1`, placed on the recorded cell.
pub struct SingleMoveStepsInvariant;

impl Invariant<GameState> for SingleMoveStepsInvariant {
    #[instrument(skip(game))]
    fn holds(game: &GameState) -> bool {
        game.history()
            .windows(2)
            .enumerate()
            .all(|(prev_step, pair)| {
                let (before, after) = (pair[0].board(), pair[1].board());
                let changed: Vec<Position> = Position::ALL
                    .into_iter()
                    .filter(|pos| before.get(*pos) != after.get(*pos))
                    .collect();

                let expected = Square::Occupied(Player::for_step(prev_step));
                let valid = match changed.as_slice() {
                    [pos] => {
                        before.get(*pos) == Square::Empty
                            && after.get(*pos) == expected
                            && pair[1].last_played() == Some(*pos)
                    }
                    _ => false,
                };
                if !valid {
                    warn!(
                        step = prev_step + 1,
                        changed = changed.len(),
                        "Step is not a single legal move"
                    );
                }
                valid
            })
    }

    fn description() -> &'static str {
        "Each history entry must add exactly one mark for the player to move"
    }
}

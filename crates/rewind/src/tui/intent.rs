//! User intents raised by the view.

use rewind_tictactoe::Position;

/// An action the user asked for, independent of how it was entered.
///
/// The view turns key presses into intents; [`App::dispatch`](super::App::dispatch)
/// applies them to the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Play the next mark on a cell.
    CellClicked(Position),
    /// Display a recorded history step.
    MoveSelected(usize),
    /// Flip the move-list order.
    SortToggled,
}

//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines, in evaluation order: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Result of evaluating a board for a winning line.
///
/// Draws are not reported here; see [`super::draw::is_draw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is uniformly marked.
    NoWinner,
    /// `mark` occupies every cell of `line`.
    Win {
        /// The winning player.
        mark: Player,
        /// The three cells of the winning line.
        line: [Position; 3],
    },
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::NoWinner => None,
            Outcome::Win { mark, .. } => Some(*mark),
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<[Position; 3]> {
        match self {
            Outcome::NoWinner => None,
            Outcome::Win { line, .. } => Some(*line),
        }
    }

    /// Returns true if `pos` lies on the winning line.
    pub fn highlights(&self, pos: Position) -> bool {
        self.line().is_some_and(|line| line.contains(&pos))
    }
}

/// Evaluates the board against the winning lines.
///
/// Lines are checked in [`LINES`] order and the first uniformly occupied
/// line is reported.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    for line @ [a, b, c] in LINES {
        let sq = board.get(a);
        if let Square::Occupied(mark) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Outcome::Win { mark, line };
        }
    }

    Outcome::NoWinner
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for (pos, player) in marks {
            board.set(*pos, Square::Occupied(*player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), Outcome::NoWinner);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_from(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(
            evaluate(&board),
            Outcome::Win {
                mark: Player::X,
                line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
            }
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_from(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        let outcome = evaluate(&board);
        assert_eq!(outcome.winner(), Some(Player::O));
        assert_eq!(
            outcome.line(),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
        assert!(outcome.highlights(Position::Center));
        assert!(!outcome.highlights(Position::TopLeft));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board = board_from(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(evaluate(&board), Outcome::NoWinner);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Top row and left column both complete; the row is listed first.
        let board = board_from(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::BottomLeft, Player::X),
        ]);
        assert_eq!(
            evaluate(&board).line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let board = board_from(&line.map(|pos| (pos, Player::O)));
            assert_eq!(evaluate(&board), Outcome::Win { mark: Player::O, line });
        }
    }
}

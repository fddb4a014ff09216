//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in evaluation order.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct WinnerResult {
    /// Owner of the line.
    pub player: Player,
    /// The three cells of the line, in ascending index order.
    pub line: [Position; 3],
}

impl WinnerResult {
    /// Whether `pos` lies on the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Evaluates a board against the winning lines.
///
/// Returns the first line in [`WINNING_LINES`] order whose three squares are
/// occupied by the same player, or `None`.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<WinnerResult> {
    WINNING_LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        match board.get(a) {
            Square::Occupied(player)
                if board.get(b) == board.get(a) && board.get(c) == board.get(a) =>
            {
                Some(WinnerResult { player, line })
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |board, (pos, player)| board.with_mark(*pos, *player))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(
            evaluate(&board),
            Some(WinnerResult {
                player: Player::X,
                line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
            })
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        let result = evaluate(&board).unwrap();
        assert_eq!(result.player, Player::O);
        assert_eq!(result.line, WINNING_LINES[7]);
        assert!(result.contains(Position::Center));
        assert!(!result.contains(Position::TopLeft));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_first_line_wins_ties() {
        // Malformed board with both the top row and left column complete.
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::BottomLeft, Player::X),
        ]);
        assert_eq!(evaluate(&board).unwrap().line, WINNING_LINES[0]);
    }

    #[test]
    fn test_later_line_found_when_earlier_lines_mixed() {
        let board = board_with(&[
            (Position::TopRight, Player::O),
            (Position::MiddleRight, Player::O),
            (Position::BottomRight, Player::O),
            (Position::TopLeft, Player::X),
        ]);
        let result = evaluate(&board).unwrap();
        assert_eq!(result.player, Player::O);
        assert_eq!(result.line, WINNING_LINES[5]);
    }
}

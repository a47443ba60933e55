//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark, Position};
use tracing::{instrument, trace};

/// The eight winning lines, in evaluation order.
///
/// Rows first, then columns, then the two diagonals. The first uniform line
/// in this order decides the game.
pub const LINES: [[Position; 3]; 8] = [
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
    [Position::BottomLeft, Position::Center, Position::TopRight],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first line (in [`LINES`] order) whose three
/// cells hold the same mark, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.get(a).mark()?;
        let owned = |pos| board.get(pos) == Cell::Marked(mark);
        if owned(b) && owned(c) {
            trace!(?a, ?b, ?c, %mark, "Line completed");
            Some(mark)
        } else {
            None
        }
    })
}

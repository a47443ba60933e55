//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Separated from the engine so they can
//! be tested and reasoned about without a running game.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use super::{Board, GameResult, Mark};

/// Terminal outcome of a board, if any.
///
/// Lines are checked first; only a board with no completed line can be a
/// draw. Returns `None` while the game should go on.
pub fn terminal_result(board: &Board) -> Option<GameResult> {
    match check_winner(board) {
        Some(Mark::X) => Some(GameResult::Player1Won),
        Some(Mark::O) => Some(GameResult::Player2Won),
        None if is_full(board) => Some(GameResult::Draw),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_open_board_not_terminal() {
        assert_eq!(terminal_result(&Board::new()), None);
    }

    #[test]
    fn test_full_board_with_line_is_a_win() {
        // X X X / O O X / X O O
        let marks = [
            Mark::X,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::O,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::O,
        ];
        let mut board = Board::new();
        for (pos, mark) in Position::ALL.into_iter().zip(marks) {
            board.place(pos, mark);
        }
        assert_eq!(terminal_result(&board), Some(GameResult::Player1Won));
    }
}

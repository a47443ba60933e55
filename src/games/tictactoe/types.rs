//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Mark written into a cell by a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// Player 1's mark.
    X,
    /// Player 2's mark.
    O,
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// True if no mark has been written here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Writes a mark into an empty cell.
    ///
    /// Occupied cells are left untouched and `false` is returned, so a cell
    /// can never go back to empty or change owner through this method.
    pub(crate) fn place(&mut self, pos: Position, mark: Mark) -> bool {
        let cell = &mut self.cells[pos.to_index()];
        if !cell.is_empty() {
            return false;
        }
        *cell = Cell::Marked(mark);
        true
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of cells holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Marked(mark))
            .count()
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Empty positions in board order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their 1-based number so a presentation layer can
    /// prompt with them directly.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => (pos + 1).to_string(),
                    Cell::Marked(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(|c| c.is_empty()));
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_cell_mark() {
        assert_eq!(Cell::Empty.mark(), None);
        assert_eq!(Cell::Marked(Mark::O).mark(), Some(Mark::O));
    }

    #[test]
    fn test_place_refuses_occupied_cell() {
        let mut board = Board::new();
        assert!(board.place(Position::Center, Mark::X));
        assert!(!board.place(Position::Center, Mark::O));
        assert_eq!(board.get(Position::Center), Cell::Marked(Mark::X));
    }

    #[test]
    fn test_counts() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::X);
        board.place(Position::Center, Mark::O);
        board.place(Position::BottomRight, Mark::X);
        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.count(Mark::O), 1);
        assert_eq!(board.occupied(), 3);
        assert_eq!(board.empty_positions().len(), 6);
    }

    #[test]
    fn test_render() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::X);
        board.place(Position::Center, Mark::O);
        assert_eq!(board.render(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}

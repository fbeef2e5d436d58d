//! Board module - the grid that pieces drop into.
//!
//! Flat row-major storage, row 0 at the top. Pieces are only ever placed,
//! never removed or rearranged, so the gravity invariant (no empty cell
//! below an occupied one in the same column) holds by construction.

use thiserror::Error;

use crate::types::{BoardConfig, Cell, Player};

/// A rejected placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("invalid column {column}")]
    InvalidColumn { column: usize },
    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

/// The game board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major cells (row * cols + col).
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with the given geometry.
    pub fn new(config: BoardConfig) -> Self {
        Self {
            rows: config.rows,
            cols: config.cols,
            cells: vec![None; config.rows * config.cols],
        }
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell contents at (row, col). Row 0 is the top.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.rows && col < self.cols, "out of bounds");
        self.cells[self.index(row, col)]
    }

    /// Drop `player`'s piece into `column`. The piece lands on the lowest
    /// empty row of the column; the landing row is returned. This is the
    /// board's sole mutator.
    pub fn drop(&mut self, column: usize, player: Player) -> Result<usize, MoveError> {
        if column >= self.cols {
            return Err(MoveError::InvalidColumn { column });
        }
        for row in (0..self.rows).rev() {
            let idx = self.index(row, column);
            if self.cells[idx].is_none() {
                self.cells[idx] = Some(player);
                return Ok(row);
            }
        }
        Err(MoveError::ColumnFull { column })
    }

    /// Whether the column exists and has room for another piece.
    pub fn is_column_open(&self, column: usize) -> bool {
        column < self.cols && self.cells[self.index(0, column)].is_none()
    }

    /// True iff no cell anywhere is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Number of empty cells left.
    pub fn remaining(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(BoardConfig::default())
    }

    #[test]
    fn new_board_is_empty() {
        let board = board();
        assert_eq!(board.rows(), 6);
        assert_eq!(board.cols(), 7);
        assert_eq!(board.remaining(), 42);
        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(board.get(row, col), None);
            }
        }
    }

    #[test]
    fn drop_lands_on_the_bottom_row() {
        let mut board = board();
        assert_eq!(board.drop(3, Player::One), Ok(5));
        assert_eq!(board.get(5, 3), Some(Player::One));
        assert_eq!(board.get(4, 3), None);
    }

    #[test]
    fn drops_stack_upward_until_full() {
        let mut board = board();
        for expected_row in (0..6).rev() {
            assert_eq!(board.drop(0, Player::One), Ok(expected_row));
        }
        assert_eq!(
            board.drop(0, Player::Two),
            Err(MoveError::ColumnFull { column: 0 })
        );
    }

    #[test]
    fn drop_rejects_out_of_range_column() {
        let mut board = board();
        assert_eq!(
            board.drop(7, Player::One),
            Err(MoveError::InvalidColumn { column: 7 })
        );
        assert_eq!(
            board.drop(usize::MAX, Player::One),
            Err(MoveError::InvalidColumn { column: usize::MAX })
        );
    }

    #[test]
    fn column_open_tracks_capacity() {
        let mut board = board();
        assert!(board.is_column_open(2));
        for _ in 0..6 {
            board.drop(2, Player::One).unwrap();
        }
        assert!(!board.is_column_open(2));
        assert!(!board.is_column_open(7));
    }

    #[test]
    fn full_board_reports_full() {
        let mut board = board();
        for col in 0..7 {
            for _ in 0..6 {
                board.drop(col, Player::One).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.remaining(), 0);
    }
}

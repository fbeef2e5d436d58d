//! Plain-text board rendering for the terminal client.
//!
//! Pure formatting (no I/O), so it can be unit-tested against exact
//! strings. Piece glyphs and colors live here and nowhere else; the domain
//! types know nothing about presentation.

use crossterm::style::Stylize;

use crate::core::Board;
use crate::types::{Cell, Player};

/// Formats a board as the classic bracketed grid:
///
/// ```text
///   0  1  2  3  4  5  6
/// 0[.][.][.][.][.][.][.]
/// 1[.][.][.][.][.][.][.]
/// ...
/// ```
pub struct BoardView {
    color: bool,
}

impl BoardView {
    /// `color` enables ANSI styling; pass false when stdout is not a tty.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Render the board with a column header and row numbers.
    pub fn render(&self, board: &Board) -> String {
        let mut out = String::new();

        out.push(' ');
        for col in 0..board.cols() {
            out.push_str(&format!(" {col} "));
        }
        out.push('\n');

        for row in 0..board.rows() {
            out.push_str(&row.to_string());
            for col in 0..board.cols() {
                out.push('[');
                out.push_str(&self.glyph(board.get(row, col)));
                out.push(']');
            }
            out.push('\n');
        }

        out
    }

    fn glyph(&self, cell: Cell) -> String {
        let plain = match cell {
            Some(Player::One) => "X",
            Some(Player::Two) => "O",
            None => ".",
        };
        if !self.color {
            return plain.to_string();
        }
        match cell {
            Some(Player::One) => plain.red().to_string(),
            Some(Player::Two) => plain.yellow().to_string(),
            None => plain.dim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoardConfig;

    #[test]
    fn renders_the_starting_grid() {
        let board = Board::new(BoardConfig::default());
        let view = BoardView::new(false);

        let expected = "  0  1  2  3  4  5  6 \n\
                        0[.][.][.][.][.][.][.]\n\
                        1[.][.][.][.][.][.][.]\n\
                        2[.][.][.][.][.][.][.]\n\
                        3[.][.][.][.][.][.][.]\n\
                        4[.][.][.][.][.][.][.]\n\
                        5[.][.][.][.][.][.][.]\n";
        assert_eq!(view.render(&board), expected);
    }

    #[test]
    fn renders_pieces_where_they_landed() {
        let mut board = Board::new(BoardConfig::default());
        board.drop(3, Player::One).unwrap();
        board.drop(3, Player::Two).unwrap();

        let rendered = BoardView::new(false).render(&board);
        let rows: Vec<&str> = rendered.lines().collect();
        assert_eq!(rows[6], "5[.][.][.][X][.][.][.]");
        assert_eq!(rows[5], "4[.][.][.][O][.][.][.]");
    }
}

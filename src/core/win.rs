//! Win and tie detection.
//!
//! A full-board rescan runs after every move: for each occupied cell and
//! each of the 8 unit directions, test whether `win_len` consecutive cells
//! stay in bounds and match the starting cell. Every real line is found
//! from both of its ends, so 4 of the 8 directions are redundant; checking
//! all 8 keeps the bounds/equality logic to a single step function.
//! O(rows * cols * win_len) per scan, which is nothing at this board size,
//! and there is no incremental state to get out of sync.

use crate::core::board::Board;
use crate::types::Player;

/// The 8 unit steps: (row delta, column delta).
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Whether any line of `win_len` same-valued cells exists on the board.
pub fn has_winning_line(board: &Board, win_len: usize) -> bool {
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let Some(player) = board.get(row, col) else {
                continue;
            };
            for (dr, dc) in DIRECTIONS {
                if line_matches(board, row, col, dr, dc, win_len, player) {
                    return true;
                }
            }
        }
    }
    false
}

/// Whether the `win_len` cells starting at (row, col) and stepping by
/// (dr, dc) all stay in bounds and all belong to `player`.
fn line_matches(
    board: &Board,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    win_len: usize,
    player: Player,
) -> bool {
    let steps = win_len as isize - 1;
    let end_row = row as isize + dr * steps;
    let end_col = col as isize + dc * steps;
    if end_row < 0
        || end_row >= board.rows() as isize
        || end_col < 0
        || end_col >= board.cols() as isize
    {
        return false;
    }
    (1..win_len as isize).all(|step| {
        let r = (row as isize + dr * step) as usize;
        let c = (col as isize + dc * step) as usize;
        board.get(r, c) == Some(player)
    })
}

/// Tie: the board is full and holds no winning line. Only meaningful once
/// the win check for the move just made has come back negative.
pub fn is_tied(board: &Board, win_len: usize) -> bool {
    board.is_full() && !has_winning_line(board, win_len)
}

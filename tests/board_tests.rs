//! Board placement properties.

use connect_four::core::{Board, MoveError};
use connect_four::types::{BoardConfig, Player};

#[test]
fn every_column_fills_from_the_bottom_row_upward() {
    let config = BoardConfig::default();
    for column in 0..config.cols {
        let mut board = Board::new(config);
        for expected_row in (0..config.rows).rev() {
            let player = if expected_row % 2 == 0 {
                Player::One
            } else {
                Player::Two
            };
            assert_eq!(board.drop(column, player), Ok(expected_row));
            assert_eq!(board.get(expected_row, column), Some(player));
        }
        assert_eq!(
            board.drop(column, Player::One),
            Err(MoveError::ColumnFull { column })
        );
    }
}

#[test]
fn out_of_range_columns_are_invalid() {
    let mut board = Board::new(BoardConfig::default());
    for column in [7, 8, 100, usize::MAX] {
        assert_eq!(
            board.drop(column, Player::One),
            Err(MoveError::InvalidColumn { column })
        );
    }
}

#[test]
fn gravity_never_leaves_a_hole_below_a_piece() {
    let mut board = Board::new(BoardConfig::default());
    // Scatter pieces across columns in an arbitrary order.
    for (column, player) in [
        (3, Player::One),
        (3, Player::Two),
        (0, Player::One),
        (6, Player::Two),
        (3, Player::One),
        (0, Player::Two),
    ] {
        board.drop(column, player).unwrap();
    }

    for col in 0..board.cols() {
        let mut seen_piece = false;
        for row in 0..board.rows() {
            if board.get(row, col).is_some() {
                seen_piece = true;
            } else {
                assert!(!seen_piece, "empty cell below a piece at col {col} row {row}");
            }
        }
    }
}

#[test]
fn custom_geometry_is_respected() {
    let config = BoardConfig {
        rows: 2,
        cols: 2,
        win_len: 3,
    };
    let mut board = Board::new(config);
    assert_eq!(board.rows(), 2);
    assert_eq!(board.cols(), 2);
    assert_eq!(board.drop(0, Player::One), Ok(1));
    assert_eq!(board.drop(0, Player::Two), Ok(0));
    assert_eq!(
        board.drop(0, Player::One),
        Err(MoveError::ColumnFull { column: 0 })
    );
    assert_eq!(
        board.drop(2, Player::One),
        Err(MoveError::InvalidColumn { column: 2 })
    );
}

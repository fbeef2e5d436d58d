//! Shared types and board geometry.
//!
//! Pure data definitions with no I/O, networking, or rendering concerns.
//! The player enumeration deliberately carries no display symbol; glyph
//! mapping belongs to the terminal view.
//!
//! # Board Dimensions
//!
//! Standard Connect Four geometry:
//!
//! - **Rows**: 6 (indexed 0-5, row 0 at the top)
//! - **Columns**: 7 (indexed 0-6)
//! - **Win length**: 4 consecutive same-valued cells along a principal
//!   direction (horizontal, vertical, or either diagonal)
//!
//! Gravity fills each column from the bottom row upward.

/// Default number of board rows.
pub const BOARD_ROWS: usize = 6;

/// Default number of board columns.
pub const BOARD_COLS: usize = 7;

/// Default length of a winning line.
pub const WIN_LEN: usize = 4;

/// One of the two participants. Player one always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The other participant.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// A single board cell: empty, or occupied by a player's piece.
pub type Cell = Option<Player>;

/// Board geometry. The defaults match the standard 6x7 game with a win
/// length of 4; both board sides (server engine and client mirror) are
/// constructed from the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    pub win_len: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: BOARD_ROWS,
            cols: BOARD_COLS,
            win_len: WIN_LEN,
        }
    }
}

/// Lifecycle of one game. Starts `InProgress` and reaches exactly one
/// terminal variant; once terminal, the coordinator makes no further moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    WonBy(Player),
    Tied,
    Aborted(String),
}

impl GameStatus {
    /// Whether the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

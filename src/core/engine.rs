//! Game engine: board plus turn bookkeeping.
//!
//! The engine owns the board, the whose-turn indicator, and the status. It
//! does not classify win or tie itself; the coordinator runs the scan after
//! each applied move, which keeps win detection testable independently of
//! turn sequencing.

use std::sync::mpsc::Receiver;

use crate::core::board::{Board, MoveError};
use crate::core::events::{EventBus, GameEvent};
use crate::types::{BoardConfig, GameStatus, Player};

/// A successfully placed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub column: usize,
    pub row: usize,
    pub mover: Player,
}

/// Canonical game state for one game.
#[derive(Debug)]
pub struct GameEngine {
    board: Board,
    turn: Player,
    status: GameStatus,
    win_len: usize,
    events: EventBus,
}

impl GameEngine {
    /// Fresh game: empty board, player one to move.
    pub fn new(config: BoardConfig) -> Self {
        Self {
            board: Board::new(config),
            turn: Player::One,
            status: GameStatus::InProgress,
            win_len: config.win_len,
            events: EventBus::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose move is expected next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn win_len(&self) -> usize {
        self.win_len
    }

    /// Listen for engine events.
    pub fn subscribe(&mut self) -> Receiver<GameEvent> {
        self.events.subscribe()
    }

    /// Apply the current player's move. On success the turn flips exactly
    /// once and the landing position is returned.
    pub fn apply_move(&mut self, column: usize) -> Result<AppliedMove, MoveError> {
        let mover = self.turn;
        let row = self.board.drop(column, mover)?;
        self.turn = mover.opponent();
        self.events.publish(GameEvent::MoveApplied {
            column,
            row,
            player: mover,
        });
        Ok(AppliedMove { column, row, mover })
    }

    /// Record the terminal status decided by the coordinator.
    pub fn set_status(&mut self, status: GameStatus) {
        if self.status == status {
            return;
        }
        self.status = status.clone();
        self.events.publish(GameEvent::StatusChanged(status));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> GameEngine {
        GameEngine::new(BoardConfig::default())
    }

    #[test]
    fn player_one_moves_first() {
        assert_eq!(engine().turn(), Player::One);
    }

    #[test]
    fn turn_flips_once_per_applied_move() {
        let mut engine = engine();
        for n in 0..6 {
            let expected = if n % 2 == 0 { Player::One } else { Player::Two };
            assert_eq!(engine.turn(), expected);
            let applied = engine.apply_move(n % 7).unwrap();
            assert_eq!(applied.mover, expected);
        }
    }

    #[test]
    fn rejected_move_leaves_the_turn_unchanged() {
        let mut engine = engine();
        assert_eq!(
            engine.apply_move(9),
            Err(MoveError::InvalidColumn { column: 9 })
        );
        assert_eq!(engine.turn(), Player::One);
    }

    #[test]
    fn applied_move_reports_landing_row() {
        let mut engine = engine();
        assert_eq!(engine.apply_move(3).unwrap().row, 5);
        assert_eq!(engine.apply_move(3).unwrap().row, 4);
    }

    #[test]
    fn events_flow_to_subscribers() {
        let mut engine = engine();
        let events = engine.subscribe();

        engine.apply_move(0).unwrap();
        engine.set_status(GameStatus::WonBy(Player::One));
        // A repeated status is not re-announced.
        engine.set_status(GameStatus::WonBy(Player::One));

        assert_eq!(
            events.try_recv(),
            Ok(GameEvent::MoveApplied {
                column: 0,
                row: 5,
                player: Player::One
            })
        );
        assert_eq!(
            events.try_recv(),
            Ok(GameEvent::StatusChanged(GameStatus::WonBy(Player::One)))
        );
        assert!(events.try_recv().is_err());
    }
}

//! One complete game between two connected sessions.
//!
//! The coordinator drives everything: it alternates move requests between
//! the two sessions, feeds each reply into the engine, broadcasts outcomes,
//! and terminates exactly once on win, tie, or protocol failure. The loop is
//! strictly sequential; at no point are both clients expected to respond at
//! the same time.

use tracing::{debug, info, warn};

use crate::core::{win, GameEngine};
use crate::server::session::PlayerSession;
use crate::server::GameError;
use crate::types::{GameStatus, Player};

/// Orchestrates one game to its single terminal status.
pub struct GameCoordinator {
    engine: GameEngine,
    /// Seat order: index 0 is player one.
    sessions: [PlayerSession; 2],
}

impl GameCoordinator {
    pub fn new(engine: GameEngine, player_one: PlayerSession, player_two: PlayerSession) -> Self {
        Self {
            engine,
            sessions: [player_one, player_two],
        }
    }

    /// Run the game loop until a terminal status, then close both sessions.
    pub async fn run(mut self) -> GameStatus {
        loop {
            match self.play_turn().await {
                Ok(None) => {}
                Ok(Some(status)) => {
                    self.engine.set_status(status);
                    break;
                }
                Err(err) => {
                    // Both clients get the same message; the coordinator
                    // does not distinguish which one caused the failure.
                    let message = err.to_string();
                    warn!(%message, "aborting game");
                    for session in &mut self.sessions {
                        session.notify_error(&message).await;
                    }
                    self.engine.set_status(GameStatus::Aborted(message));
                    break;
                }
            }
        }

        for session in &mut self.sessions {
            session.close().await;
        }

        let status = self.engine.status().clone();
        info!(?status, "game over");
        status
    }

    /// One round trip: request a move, apply it, broadcast it, classify the
    /// result. `Ok(None)` means the game continues with the other player.
    async fn play_turn(&mut self) -> Result<Option<GameStatus>, GameError> {
        let mover = match self.engine.turn() {
            Player::One => 0,
            Player::Two => 1,
        };
        let other = 1 - mover;

        let column = self.sessions[mover].request_move().await?;
        let applied = self.engine.apply_move(column)?;
        debug!(?applied.mover, applied.column, applied.row, "move applied");

        // Both sides mirror the move before the next request goes out;
        // mover first.
        self.sessions[mover].notify_move_made(applied.column).await;
        self.sessions[other].notify_move_made(applied.column).await;

        if win::has_winning_line(self.engine.board(), self.engine.win_len()) {
            self.sessions[mover].notify_won().await;
            self.sessions[other].notify_lost().await;
            return Ok(Some(GameStatus::WonBy(applied.mover)));
        }

        if win::is_tied(self.engine.board(), self.engine.win_len()) {
            self.sessions[mover].notify_tied().await;
            self.sessions[other].notify_tied().await;
            return Ok(Some(GameStatus::Tied));
        }

        Ok(None)
    }
}

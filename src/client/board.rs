//! Client-side mirror of the server's board.
//!
//! A passive model: it never originates game state, only replays the
//! server's broadcasts. Player one always moves first, so the owner of each
//! replayed piece follows by alternation. Interested views subscribe to the
//! model's event bus rather than registering callbacks on it.

use std::sync::mpsc::Receiver;

use tracing::warn;

use crate::core::{Board, EventBus, GameEvent};
use crate::protocol::ServerRequest;
use crate::types::{BoardConfig, GameStatus, Player};

/// How the game ended from this player's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
    Tied,
    Error(String),
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Local copy of the game as reconstructed from server broadcasts.
pub struct LocalBoard {
    board: Board,
    /// Owner of the next replayed piece; flips on every `MOVE_MADE`.
    current_piece: Player,
    my_turn: bool,
    outcome: Outcome,
    events: EventBus,
}

impl LocalBoard {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            board: Board::new(config),
            current_piece: Player::One,
            my_turn: false,
            outcome: Outcome::InProgress,
            events: EventBus::new(),
        }
    }

    /// Listen for model changes.
    pub fn subscribe(&mut self) -> Receiver<GameEvent> {
        self.events.subscribe()
    }

    /// Fold one server request into the local view.
    pub fn apply(&mut self, request: &ServerRequest) {
        match request {
            // Consumed during the connection handshake.
            ServerRequest::Connect => {}
            ServerRequest::MakeMove => {
                self.my_turn = true;
                self.events.publish(GameEvent::TurnGranted);
            }
            ServerRequest::MoveMade(column) => self.move_made(*column),
            ServerRequest::GameWon => self.finish(Outcome::Won),
            ServerRequest::GameLost => self.finish(Outcome::Lost),
            ServerRequest::GameTied => self.finish(Outcome::Tied),
            ServerRequest::Error(message) => self.finish(Outcome::Error(message.clone())),
        }
    }

    fn move_made(&mut self, column: usize) {
        let player = self.current_piece;
        match self.board.drop(column, player) {
            Ok(row) => {
                self.current_piece = player.opponent();
                self.my_turn = false;
                self.events.publish(GameEvent::MoveApplied { column, row, player });
            }
            // The server is authoritative; a rejected replay means this
            // mirror is out of sync with it.
            Err(err) => warn!(column, %err, "could not mirror broadcast move"),
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        let status = match &outcome {
            // Win notifications follow the winning MOVE_MADE, so the winner
            // is whoever moved last.
            Outcome::Won | Outcome::Lost => GameStatus::WonBy(self.current_piece.opponent()),
            Outcome::Tied => GameStatus::Tied,
            Outcome::Error(message) => GameStatus::Aborted(message.clone()),
            Outcome::InProgress => GameStatus::InProgress,
        };
        self.my_turn = false;
        self.outcome = outcome;
        self.events.publish(GameEvent::StatusChanged(status));
    }

    /// Pre-flight check so a locally bad choice never reaches the server
    /// (where it would end the game).
    pub fn is_valid_move(&self, column: usize) -> bool {
        self.board.is_column_open(column)
    }

    /// The user committed to a move; the turn flag drops until the server
    /// grants it again.
    pub fn chose_move(&mut self) {
        self.my_turn = false;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn my_turn(&self) -> bool {
        self.my_turn
    }

    pub fn moves_left(&self) -> usize {
        self.board.remaining()
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

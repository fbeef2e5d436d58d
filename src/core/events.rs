//! Event fan-out for presentation-layer listeners.
//!
//! The emitting side (engine on the server, board mirror on the client)
//! owns the bus; listeners hold plain channel receivers. A listener that
//! goes away is dropped on the next publish.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::types::{GameStatus, Player};

/// State-change notifications emitted by the board owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A piece landed at (row, column).
    MoveApplied {
        column: usize,
        row: usize,
        player: Player,
    },
    /// The game status changed (only ever to a terminal status).
    StatusChanged(GameStatus),
    /// It is now the local participant's turn to choose a column.
    TurnGranted,
}

/// Broadcast bus for [`GameEvent`]s.
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<Sender<GameEvent>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Events published after this call are delivered
    /// in order on the returned receiver.
    pub fn subscribe(&mut self) -> Receiver<GameEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Deliver `event` to every live listener, discarding dead ones.
    pub fn publish(&mut self, event: GameEvent) {
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }
}

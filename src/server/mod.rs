//! TCP server: accept, pair, and play.
//!
//! The accept loop waits for two inbound connections, wraps each in a
//! [`PlayerSession`], sends both the `CONNECT` handshake, and spawns one
//! task that runs a [`GameCoordinator`] to completion. Games are fully
//! isolated from each other: each has its own engine and pair of sessions,
//! and no state is shared between them.
//!
//! # Manual testing
//!
//! Two netcat sessions make a playable game:
//!
//! ```bash
//! connect-four-server 4444 &
//! nc 127.0.0.1 4444   # player one
//! nc 127.0.0.1 4444   # player two
//! MOVE 3              # whenever MAKE_MOVE arrives
//! ```

pub mod config;
pub mod coordinator;
pub mod session;

use std::io;
use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{info, warn};

use crate::core::{GameEngine, MoveError};
use crate::protocol::ProtocolViolation;
use crate::types::Player;

pub use config::ServerConfig;
pub use coordinator::GameCoordinator;
pub use session::PlayerSession;

/// Why a running game could not continue. Every variant is caught at the
/// coordinator boundary and converted into a best-effort `ERROR` to both
/// clients; nothing is retried.
#[derive(Debug, Error)]
pub enum GameError {
    /// The client's column was rejected by the board.
    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveError),
    /// The client's reply did not match the protocol grammar.
    #[error(transparent)]
    Protocol(#[from] ProtocolViolation),
    /// The transport failed or closed during a read or write.
    #[error("connection lost: {0}")]
    ConnectionLost(#[source] io::Error),
}

/// Bind and serve games forever, pairing clients in connection order.
///
/// `ready_tx`, when provided, receives the bound address once the listener
/// is up; tests use it with port 0.
pub async fn run_server(
    config: ServerConfig,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "listening");
    if let Some(tx) = ready_tx {
        let _ = tx.send(addr);
    }

    let mut game_id: u64 = 0;
    loop {
        let player_one = accept_player(&listener, Player::One, &config).await?;
        let player_two = accept_player(&listener, Player::Two, &config).await?;

        game_id += 1;
        let engine = GameEngine::new(config.board);
        let coordinator = GameCoordinator::new(engine, player_one, player_two);
        info!(game_id, "starting game");
        tokio::spawn(async move {
            let _ = coordinator.run().await;
        });
    }
}

/// Accept one connection and complete the handshake for the given seat. A
/// connection that drops before `CONNECT` goes out is discarded and the
/// seat re-offered to the next caller.
async fn accept_player(
    listener: &TcpListener,
    player: Player,
    config: &ServerConfig,
) -> io::Result<PlayerSession> {
    loop {
        info!(?player, "waiting for player");
        let (stream, peer) = listener.accept().await?;
        let mut session = PlayerSession::new(stream, player, config.move_timeout);
        match session.connect().await {
            Ok(()) => {
                info!(?player, %peer, "player connected");
                return Ok(session);
            }
            Err(err) => warn!(%peer, %err, "handshake failed, dropping connection"),
        }
    }
}

//! Protocol adapter around one accepted client connection.
//!
//! A session is a thin, stateless-between-calls wrapper: it sends requests,
//! performs exactly one blocking line read per move request, and owns no
//! game-state authority. The read in [`PlayerSession::request_move`] is the
//! only suspension point in a running game besides the accept loop.

use std::io;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tracing::debug;

use crate::protocol::{self, ServerRequest};
use crate::server::GameError;
use crate::types::Player;

/// One player's protocol session.
pub struct PlayerSession {
    player: Player,
    reader: BufReader<OwnedReadHalf>,
    /// Taken on close; all later sends report a lost connection.
    writer: Option<OwnedWriteHalf>,
    move_timeout: Option<Duration>,
    /// Reused line buffer for the one read per move request.
    line: String,
}

impl PlayerSession {
    pub fn new(stream: TcpStream, player: Player, move_timeout: Option<Duration>) -> Self {
        let (read_half, write_half) = stream.into_split();
        Self {
            player,
            reader: BufReader::new(read_half),
            writer: Some(write_half),
            move_timeout,
            line: String::new(),
        }
    }

    /// Which seat this session occupies.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Send the initial `CONNECT` handshake. No response is expected.
    pub async fn connect(&mut self) -> Result<(), GameError> {
        self.send(&ServerRequest::Connect).await
    }

    /// Send `MAKE_MOVE`, then perform exactly one blocking read of the
    /// reply. Only `MOVE <integer>` is accepted; any other shape is a
    /// protocol violation carrying the raw text, and a dropped connection
    /// or expired read timeout is reported as lost.
    pub async fn request_move(&mut self) -> Result<usize, GameError> {
        self.send(&ServerRequest::MakeMove).await?;

        self.line.clear();
        let read = match self.move_timeout {
            Some(limit) => {
                match tokio::time::timeout(limit, self.reader.read_line(&mut self.line)).await {
                    Ok(result) => result,
                    Err(_) => Err(io::ErrorKind::TimedOut.into()),
                }
            }
            None => self.reader.read_line(&mut self.line).await,
        };
        let bytes_read = read.map_err(GameError::ConnectionLost)?;
        if bytes_read == 0 {
            return Err(GameError::ConnectionLost(io::ErrorKind::UnexpectedEof.into()));
        }

        let reply = self.line.trim_end_matches(['\r', '\n']);
        debug!(player = ?self.player, reply, "move response");
        Ok(protocol::parse_move_response(reply)?)
    }

    /// Tell the client a move was accepted somewhere on the board.
    pub async fn notify_move_made(&mut self, column: usize) {
        let _ = self.send(&ServerRequest::MoveMade(column)).await;
    }

    /// Tell the client its own move just won.
    pub async fn notify_won(&mut self) {
        let _ = self.send(&ServerRequest::GameWon).await;
    }

    /// Tell the client the opponent's move just won.
    pub async fn notify_lost(&mut self) {
        let _ = self.send(&ServerRequest::GameLost).await;
    }

    /// Tell the client the board filled with no winner.
    pub async fn notify_tied(&mut self) {
        let _ = self.send(&ServerRequest::GameTied).await;
    }

    /// Tell the client the game is over because something went wrong. The
    /// game is already ending, so transport errors are swallowed here, as
    /// they are for every other one-way notification.
    pub async fn notify_error(&mut self, message: &str) {
        let _ = self.send(&ServerRequest::Error(message.to_string())).await;
    }

    /// Release the transport. Idempotent; never fails.
    pub async fn close(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            let _ = writer.shutdown().await;
        }
    }

    async fn send(&mut self, request: &ServerRequest) -> Result<(), GameError> {
        let Some(writer) = self.writer.as_mut() else {
            return Err(GameError::ConnectionLost(io::ErrorKind::NotConnected.into()));
        };
        let mut line = request.to_string();
        line.push('\n');
        writer
            .write_all(line.as_bytes())
            .await
            .map_err(GameError::ConnectionLost)
    }
}

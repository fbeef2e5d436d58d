//! Client-side network layer.
//!
//! Blocking TCP plus one reader thread. The thread decodes each server line
//! into a [`ServerRequest`] and hands it to the consumer over a channel; the
//! consumer owns all mutation of its local view, so nothing is shared with
//! the network side and no condition-variable signaling is needed. The
//! channel closing without a terminal request means the connection dropped.

pub mod board;

use std::io::{self, BufRead, BufReader, Write};
use std::net::{Shutdown, TcpStream};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use thiserror::Error;
use tracing::{debug, warn};

use crate::protocol::{self, ServerRequest};

/// Failures while establishing or using the server connection.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to connect to {addr}")]
    Connect {
        addr: String,
        #[source]
        source: io::Error,
    },
    #[error("server closed the connection before the handshake")]
    HandshakeClosed,
    #[error("expected CONNECT from server, got {raw:?}")]
    Handshake { raw: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A connection that has completed the `CONNECT` handshake.
pub struct NetworkClient {
    stream: TcpStream,
    reader: BufReader<TcpStream>,
}

impl NetworkClient {
    /// Connect to the server and block until its `CONNECT` line arrives,
    /// which confirms a seat in the next game. Play begins once the
    /// opponent is seated too.
    pub fn connect(host: &str, port: u16) -> Result<Self, ClientError> {
        let addr = format!("{host}:{port}");
        let stream = TcpStream::connect(&addr)
            .map_err(|source| ClientError::Connect { addr, source })?;
        let mut reader = BufReader::new(stream.try_clone()?);

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(ClientError::HandshakeClosed);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']);
        match protocol::parse_request(trimmed) {
            Ok(ServerRequest::Connect) => debug!("handshake complete"),
            _ => {
                return Err(ClientError::Handshake {
                    raw: trimmed.to_string(),
                })
            }
        }

        Ok(Self { stream, reader })
    }

    /// Spawn the reader thread and split into the move sender and the
    /// request stream. The stream ends after a terminal request, or earlier
    /// if the connection drops.
    pub fn start(self) -> (MoveSender, Receiver<ServerRequest>) {
        let (tx, rx) = mpsc::channel();
        let reader = self.reader;
        thread::spawn(move || read_loop(reader, tx));
        (MoveSender { stream: self.stream }, rx)
    }
}

fn read_loop(mut reader: BufReader<TcpStream>, tx: Sender<ServerRequest>) {
    let mut line = String::new();
    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                debug!(%err, "server read failed");
                break;
            }
        }

        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed.is_empty() {
            continue;
        }

        match protocol::parse_request(trimmed) {
            Ok(request) => {
                let terminal = request.is_terminal();
                if tx.send(request).is_err() || terminal {
                    break;
                }
            }
            Err(err) => {
                warn!(%err, "unrecognized server request");
                break;
            }
        }
    }
}

/// The write half of the connection, owned by the consuming side.
pub struct MoveSender {
    stream: TcpStream,
}

impl MoveSender {
    /// Reply to `MAKE_MOVE` with the chosen column.
    pub fn send_move(&mut self, column: usize) -> io::Result<()> {
        writeln!(self.stream, "{}", protocol::move_response(column))
    }

    /// Close the connection. Idempotent; errors are ignored since the
    /// server is already done with us.
    pub fn close(&self) {
        let _ = self.stream.shutdown(Shutdown::Both);
    }
}

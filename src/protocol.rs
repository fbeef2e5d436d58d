//! Wire protocol: newline-terminated text messages.
//!
//! Every message is a request keyword, optionally followed by
//! space-separated arguments:
//!
//! | Message          | Direction       | Meaning                                   |
//! |------------------|-----------------|-------------------------------------------|
//! | `CONNECT`        | server → client | Handshake; the game is about to start     |
//! | `MAKE_MOVE`      | server → client | The client must respond with a move       |
//! | `MOVE <col>`     | client → server | The chosen column                         |
//! | `MOVE_MADE <col>`| server → client | Broadcast after any accepted move         |
//! | `GAME_WON`       | server → client | The receiver's move just won              |
//! | `GAME_LOST`      | server → client | The opponent's move just won              |
//! | `GAME_TIED`      | server → client | Full board, no winner                     |
//! | `ERROR <message>`| server → client | Fatal; the connection closes afterwards   |
//!
//! A `MOVE` reply is accepted only as exactly two tokens with an integer
//! second token. Anything else is a violation carrying the raw offending
//! text for diagnostics.

use std::fmt;

use thiserror::Error;

pub const CONNECT: &str = "CONNECT";
pub const MAKE_MOVE: &str = "MAKE_MOVE";
pub const MOVE: &str = "MOVE";
pub const MOVE_MADE: &str = "MOVE_MADE";
pub const GAME_WON: &str = "GAME_WON";
pub const GAME_LOST: &str = "GAME_LOST";
pub const GAME_TIED: &str = "GAME_TIED";
pub const ERROR: &str = "ERROR";

/// A line that did not match the expected grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("protocol violation: {raw:?}")]
pub struct ProtocolViolation {
    /// The offending text, verbatim.
    pub raw: String,
}

impl ProtocolViolation {
    fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
        }
    }
}

/// A server-to-client request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerRequest {
    Connect,
    MakeMove,
    MoveMade(usize),
    GameWon,
    GameLost,
    GameTied,
    Error(String),
}

impl ServerRequest {
    /// Whether this request ends the game for the receiver.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ServerRequest::GameWon
                | ServerRequest::GameLost
                | ServerRequest::GameTied
                | ServerRequest::Error(_)
        )
    }
}

impl fmt::Display for ServerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerRequest::Connect => f.write_str(CONNECT),
            ServerRequest::MakeMove => f.write_str(MAKE_MOVE),
            ServerRequest::MoveMade(column) => write!(f, "{MOVE_MADE} {column}"),
            ServerRequest::GameWon => f.write_str(GAME_WON),
            ServerRequest::GameLost => f.write_str(GAME_LOST),
            ServerRequest::GameTied => f.write_str(GAME_TIED),
            ServerRequest::Error(message) => write!(f, "{ERROR} {message}"),
        }
    }
}

/// Encode the client's reply to `MAKE_MOVE` (without the trailing newline).
pub fn move_response(column: usize) -> String {
    format!("{MOVE} {column}")
}

/// Parse a client's reply to `MAKE_MOVE`.
///
/// Accepts exactly `MOVE <integer>`; a wrong keyword, a missing or
/// non-numeric argument, or extra tokens are all violations.
pub fn parse_move_response(line: &str) -> Result<usize, ProtocolViolation> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(MOVE), Some(column), None) => {
            column.parse().map_err(|_| ProtocolViolation::new(line))
        }
        _ => Err(ProtocolViolation::new(line)),
    }
}

/// Parse one server-to-client line (client side).
///
/// `ERROR`'s argument is free text: the remainder of the line, spaces and
/// all. Every other keyword takes either no argument or a single integer.
pub fn parse_request(line: &str) -> Result<ServerRequest, ProtocolViolation> {
    let (keyword, rest) = match line.split_once(' ') {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line.trim(), ""),
    };
    match keyword {
        CONNECT if rest.is_empty() => Ok(ServerRequest::Connect),
        MAKE_MOVE if rest.is_empty() => Ok(ServerRequest::MakeMove),
        MOVE_MADE => rest
            .parse()
            .map(ServerRequest::MoveMade)
            .map_err(|_| ProtocolViolation::new(line)),
        GAME_WON if rest.is_empty() => Ok(ServerRequest::GameWon),
        GAME_LOST if rest.is_empty() => Ok(ServerRequest::GameLost),
        GAME_TIED if rest.is_empty() => Ok(ServerRequest::GameTied),
        ERROR => Ok(ServerRequest::Error(rest.to_string())),
        _ => Err(ProtocolViolation::new(line)),
    }
}

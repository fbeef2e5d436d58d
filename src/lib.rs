//! Networked two-player Connect Four.
//!
//! The server owns the canonical game state; each remote player is
//! represented by a protocol session that never mutates state directly.
//!
//! - [`core`]: board, win/tie detection, and the game engine (pure, no I/O)
//! - [`protocol`]: the newline-terminated text wire format
//! - [`server`]: tokio TCP server pairing two clients per game
//! - [`client`]: blocking client network layer and local board mirror
//! - [`term`]: plain-text board rendering for the terminal client
//! - [`types`]: shared data definitions and default board geometry

pub mod client;
pub mod core;
pub mod protocol;
pub mod server;
pub mod term;
pub mod types;

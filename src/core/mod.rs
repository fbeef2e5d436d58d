//! Core game logic - pure, deterministic, and testable.
//!
//! This module contains the rules of the game and nothing else. It has zero
//! dependencies on networking or rendering, so every rule can be unit-tested
//! without a socket in sight.
//!
//! - [`board`]: the grid, piece placement with gravity, fullness queries
//! - [`win`]: full-board win scan and tie detection
//! - [`engine`]: board plus turn bookkeeping and game status
//! - [`events`]: event fan-out for presentation-layer listeners

pub mod board;
pub mod engine;
pub mod events;
pub mod win;

pub use board::{Board, MoveError};
pub use engine::{AppliedMove, GameEngine};
pub use events::{EventBus, GameEvent};
pub use win::{has_winning_line, is_tied};

//! Server configuration.

use std::time::Duration;

use crate::types::BoardConfig;

/// Configuration for [`run_server`](crate::server::run_server).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub board: BoardConfig,
    /// Per-move read timeout. `None` blocks indefinitely, like the
    /// reference protocol; an expired timeout is treated as a lost
    /// connection.
    pub move_timeout: Option<Duration>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4444,
            board: BoardConfig::default(),
            move_timeout: None,
        }
    }
}

impl ServerConfig {
    /// Create from environment variables, falling back to defaults:
    ///
    /// - `CONNECT_FOUR_HOST`: bind address
    /// - `CONNECT_FOUR_PORT`: listen port
    /// - `CONNECT_FOUR_MOVE_TIMEOUT_MS`: per-move read timeout (0 disables)
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();

        let host = env::var("CONNECT_FOUR_HOST").unwrap_or(defaults.host);
        let port = env::var("CONNECT_FOUR_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.port);
        let move_timeout = env::var("CONNECT_FOUR_MOVE_TIMEOUT_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|&millis| millis > 0)
            .map(Duration::from_millis);

        Self {
            host,
            port,
            board: defaults.board,
            move_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_standard_geometry() {
        let config = ServerConfig::default();
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.board.cols, 7);
        assert_eq!(config.board.win_len, 4);
        assert_eq!(config.move_timeout, None);
    }
}

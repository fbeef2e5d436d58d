//! Connect Four server binary.
//!
//! Takes the listening port as its one positional argument; host, board
//! geometry, and the optional per-move timeout come from the environment
//! (see [`ServerConfig::from_env`]).

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use connect_four::server::{run_server, ServerConfig};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn usage() -> ! {
    eprintln!("Usage: connect-four-server <port>");
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = ServerConfig::from_env();
    match args.as_slice() {
        [port] => match port.parse::<u16>() {
            Ok(port) => config.port = port,
            Err(_) => usage(),
        },
        _ => usage(),
    }

    run_server(config, None).await
}

//! Terminal Connect Four client (default binary).
//!
//! Connects to a server, mirrors the board from the server's broadcasts,
//! prompts for a column whenever it is this player's turn, and reports the
//! final outcome.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use connect_four::client::board::{LocalBoard, Outcome};
use connect_four::client::NetworkClient;
use connect_four::core::GameEvent;
use connect_four::protocol::ServerRequest;
use connect_four::term::BoardView;
use connect_four::types::BoardConfig;

fn init_tracing() {
    // Keep the interactive display clean unless RUST_LOG says otherwise.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn usage() -> ! {
    eprintln!("Usage: connect-four <host> <port>");
    std::process::exit(1);
}

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (host, port) = match args.as_slice() {
        [host, port] => match port.parse::<u16>() {
            Ok(port) => (host.clone(), port),
            Err(_) => usage(),
        },
        _ => usage(),
    };

    let client = NetworkClient::connect(&host, port)
        .with_context(|| format!("connecting to {host}:{port}"))?;
    println!("Connected. Waiting for the game to start...");

    let (mut sender, requests) = client.start();
    let mut model = LocalBoard::new(BoardConfig::default());
    let events = model.subscribe();
    let view = BoardView::new(io::stdout().is_terminal());

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("{}", view.render(model.board()));

    loop {
        match requests.recv() {
            Ok(request) => model.apply(&request),
            // The reader thread is gone without a terminal request.
            Err(_) => model.apply(&ServerRequest::Error(
                "Lost connection to server.".to_string(),
            )),
        }

        let mut granted_turn = false;
        while let Ok(event) = events.try_recv() {
            match event {
                GameEvent::MoveApplied { .. } => {
                    println!("{}", view.render(model.board()));
                    println!("{} moves left.", model.moves_left());
                }
                GameEvent::StatusChanged(_) => {}
                GameEvent::TurnGranted => granted_turn = true,
            }
        }

        match model.outcome() {
            Outcome::InProgress => {}
            Outcome::Won => {
                println!("You won. Yay!");
                break;
            }
            Outcome::Lost => {
                println!("You lost. Boo!");
                break;
            }
            Outcome::Tied => {
                println!("Tie game. Meh.");
                break;
            }
            Outcome::Error(message) => {
                println!("Game error: {message}");
                break;
            }
        }

        if granted_turn {
            let column = prompt_for_column(&mut input, &model)?;
            model.chose_move();
            sender.send_move(column).context("sending move")?;
        }
    }

    sender.close();
    Ok(())
}

/// Prompt until the user names an open column. Bad choices are caught here
/// so they never reach the server, where they would end the game.
fn prompt_for_column(input: &mut impl BufRead, model: &LocalBoard) -> Result<usize> {
    loop {
        print!("Enter column: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("stdin closed");
        }
        match line.trim().parse::<usize>() {
            Ok(column) if model.is_valid_move(column) => return Ok(column),
            _ => println!(
                "Pick an open column between 0 and {}.",
                model.board().cols() - 1
            ),
        }
    }
}

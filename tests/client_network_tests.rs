//! Client network layer against a scripted server.

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

use connect_four::client::{ClientError, NetworkClient};
use connect_four::protocol::ServerRequest;

/// Run `script` against one accepted connection on a loopback listener and
/// return the address to dial.
fn scripted_server(
    script: impl FnOnce(TcpStream) + Send + 'static,
) -> (std::net::SocketAddr, thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        script(stream);
    });
    (addr, handle)
}

#[test]
fn handshake_then_requests_flow_until_a_terminal_one() {
    let (addr, server) = scripted_server(|mut stream| {
        stream.write_all(b"CONNECT\n").unwrap();
        stream.write_all(b"MAKE_MOVE\n").unwrap();

        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        assert_eq!(line.trim_end(), "MOVE 3");

        stream.write_all(b"MOVE_MADE 3\nGAME_WON\n").unwrap();
    });

    let client = NetworkClient::connect("127.0.0.1", addr.port()).unwrap();
    let (mut sender, requests) = client.start();

    assert_eq!(requests.recv().unwrap(), ServerRequest::MakeMove);
    sender.send_move(3).unwrap();
    assert_eq!(requests.recv().unwrap(), ServerRequest::MoveMade(3));
    assert_eq!(requests.recv().unwrap(), ServerRequest::GameWon);

    // The stream ends after a terminal request.
    assert!(requests.recv().is_err());

    sender.close();
    sender.close();
    server.join().unwrap();
}

#[test]
fn handshake_rejects_an_unexpected_first_line() {
    let (addr, server) = scripted_server(|mut stream| {
        stream.write_all(b"HELLO THERE\n").unwrap();
    });

    let err = NetworkClient::connect("127.0.0.1", addr.port())
        .err()
        .expect("expected a handshake error");
    match err {
        ClientError::Handshake { raw } => assert_eq!(raw, "HELLO THERE"),
        other => panic!("expected a handshake error, got {other:?}"),
    }
    server.join().unwrap();
}

#[test]
fn handshake_reports_a_closed_connection() {
    let (addr, server) = scripted_server(|stream| {
        drop(stream);
    });

    assert!(matches!(
        NetworkClient::connect("127.0.0.1", addr.port()),
        Err(ClientError::HandshakeClosed)
    ));
    server.join().unwrap();
}

#[test]
fn server_error_line_arrives_with_its_message() {
    let (addr, server) = scripted_server(|mut stream| {
        stream
            .write_all(b"CONNECT\nERROR invalid player response: MOVE x\n")
            .unwrap();
    });

    let client = NetworkClient::connect("127.0.0.1", addr.port()).unwrap();
    let (_sender, requests) = client.start();

    assert_eq!(
        requests.recv().unwrap(),
        ServerRequest::Error("invalid player response: MOVE x".to_string())
    );
    assert!(requests.recv().is_err());
    server.join().unwrap();
}

#[test]
fn dropped_server_closes_the_request_stream() {
    let (addr, server) = scripted_server(|mut stream| {
        stream.write_all(b"CONNECT\nMAKE_MOVE\n").unwrap();
        drop(stream);
    });

    let client = NetworkClient::connect("127.0.0.1", addr.port()).unwrap();
    let (_sender, requests) = client.start();

    assert_eq!(requests.recv().unwrap(), ServerRequest::MakeMove);
    // No terminal request was seen; the channel just closes.
    assert!(requests.recv().is_err());
    server.join().unwrap();
}

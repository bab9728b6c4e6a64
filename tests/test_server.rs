use std::sync::{Arc, Mutex};

use pi_in_the_sky::display::DisplayPainter;
use pi_in_the_sky::server::listener::{bind, serve};
use pi_in_the_sky::status::{ColorState, Dispatcher, TextLines};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

#[derive(Clone, Default)]
struct SharedPainter(Arc<Mutex<Vec<(ColorState, TextLines)>>>);

impl DisplayPainter for SharedPainter {
    fn paint(&mut self, state: ColorState, lines: &TextLines) -> anyhow::Result<()> {
        self.0.lock().unwrap().push((state, lines.clone()));
        Ok(())
    }
}

async fn request(addr: std::net::SocketAddr, raw: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(raw.as_bytes()).await.unwrap();
    let mut reply = String::new();
    stream.read_to_string(&mut reply).await.unwrap();
    reply
}

fn start_server(painter: SharedPainter) -> std::net::SocketAddr {
    let listener = bind("127.0.0.1:0".parse().unwrap(), 1).unwrap();
    let addr = listener.local_addr().unwrap();
    let mut dispatcher = Dispatcher::new(painter);

    tokio::spawn(async move {
        let _ = serve(&listener, &mut dispatcher, 1024).await;
    });

    addr
}

#[tokio::test]
async fn test_server_sequence_of_requests() {
    let painter = SharedPainter::default();
    let addr = start_server(painter.clone());

    let reply = request(addr, "GET /yellow?line1=In%20a%20meeting HTTP/1.1\r\n\r\n").await;
    assert!(reply.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(reply.contains("Screen is YELLOW"));

    let reply = request(addr, "GET /favicon.ico HTTP/1.1\r\n\r\n").await;
    assert!(reply.starts_with("HTTP/1.1 404 Not Found\r\n"));

    let reply = request(addr, "GET /yellow HTTP/1.1\r\n\r\n").await;
    assert!(reply.contains("Screen is YELLOW"));

    let calls = painter.0.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].1.get(1), Some("In a meeting"));
    assert!(calls[1].1.is_blank());
}

#[tokio::test]
async fn test_server_survives_client_that_sends_nothing() {
    let painter = SharedPainter::default();
    let addr = start_server(painter.clone());

    drop(TcpStream::connect(addr).await.unwrap());

    let reply = request(addr, "GET /late?line1=Running%20Late HTTP/1.1\r\n\r\n").await;
    assert!(reply.contains("Screen is DARK_RED"));
}

#[tokio::test]
async fn test_server_survives_garbage() {
    let addr = start_server(SharedPainter::default());

    let reply = request(addr, "\x00\x01\x02\r\n\r\n").await;
    assert!(reply.starts_with("HTTP/1.1 404 Not Found\r\n"));

    let reply = request(addr, "GET /red HTTP/1.1\r\n\r\n").await;
    assert!(reply.contains("Screen is RED"));
}

#[tokio::test]
async fn test_server_identical_requests_identical_bodies() {
    let addr = start_server(SharedPainter::default());
    let raw = "GET /green?line2=ok HTTP/1.1\r\n\r\n";

    let first = request(addr, raw).await;
    let second = request(addr, raw).await;

    assert_eq!(first, second);
}

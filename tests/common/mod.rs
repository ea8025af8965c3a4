//! Shared utilities for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use block_tx_finder::rpc::{HostResponse, Transport};
use block_tx_finder::utils::TransportError;
use std::net::SocketAddr;
use std::sync::Mutex;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

pub const BLOCK_0XCED189: &str = include_str!("../fixtures/block_0xced189.json");
pub const ADDRESS: &str = "0x5aa3393e361c2eb342408559309b3e873cd876d6";

/// Transport that replays a single scripted answer
pub struct ScriptedTransport {
    answer: Mutex<Option<Result<HostResponse, TransportError>>>,
}

impl ScriptedTransport {
    pub fn responding(status: u16, body: &str) -> Self {
        Self::new(Ok(HostResponse::new(status, body)))
    }

    pub fn failing(error: TransportError) -> Self {
        Self::new(Err(error))
    }

    fn new(answer: Result<HostResponse, TransportError>) -> Self {
        Self {
            answer: Mutex::new(Some(answer)),
        }
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn post_json(&self, _url: &str, _body: String) -> Result<HostResponse, TransportError> {
        self.answer
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(TransportError::Other("no scripted answer left".to_string())))
    }
}

/// Start a mock JSON-RPC node that answers every request with `status` and `body`
/// after `delay`. Returns the URL to post to.
pub async fn start_mock_node(status: u16, body: String, delay: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let body = body.clone();
                    tokio::spawn(async move {
                        serve_one(socket, status, &body, delay).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    format!("http://{}", addr)
}

/// A local URL nothing is listening on
pub async fn dead_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

async fn serve_one(mut socket: TcpStream, status: u16, body: &str, delay: Duration) {
    read_request(&mut socket).await;
    tokio::time::sleep(delay).await;

    let response = format!(
        "HTTP/1.1 {} Mock\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

/// Drain headers and a Content-Length body
async fn read_request(socket: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(end) = text.find("\r\n\r\n") {
            let content_length = text[..end]
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);

            if buf.len() >= end + 4 + content_length {
                return;
            }
        }
    }
}

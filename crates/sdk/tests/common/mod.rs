//! Common test utilities for lbry-sdk integration tests
//!
//! A minimal HTTP/1.1 stub standing in for the daemon, so the reqwest
//! transport can be exercised without a real node.

#![allow(dead_code)]

use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

/// Canned reply: HTTP status and JSON body
#[derive(Debug, Clone)]
pub struct StubReply {
    pub status: u16,
    pub body: String,
}

impl StubReply {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    pub fn raw(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Stub daemon answering every request with the same reply
pub struct StubDaemon {
    addr: SocketAddr,
    bodies: mpsc::UnboundedReceiver<String>,
}

impl StubDaemon {
    pub async fn start(reply: StubReply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (body_tx, body_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let reply = reply.clone();
                let body_tx = body_tx.clone();
                tokio::spawn(async move {
                    if let Some(body) = serve_one(stream, &reply).await {
                        let _ = body_tx.send(body);
                    }
                });
            }
        });

        Self {
            addr,
            bodies: body_rx,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}/lbryapi", self.addr)
    }

    /// Next request body the stub received, as JSON
    pub async fn next_body(&mut self) -> serde_json::Value {
        let body = self.bodies.recv().await.expect("stub stopped");
        serde_json::from_str(&body).expect("request body is JSON")
    }
}

async fn serve_one(mut stream: TcpStream, reply: &StubReply) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let body = String::from_utf8_lossy(&buf[header_end..]).into_owned();

    let response = format!(
        "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        reply.status,
        reply.body.len(),
        reply.body
    );
    stream.write_all(response.as_bytes()).await.ok()?;
    let _ = stream.shutdown().await;

    Some(body)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

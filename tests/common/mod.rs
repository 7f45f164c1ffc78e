//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Counters exposed by a mock target.
#[derive(Default)]
pub struct TargetStats {
    /// Total requests served.
    pub requests: AtomicUsize,
    in_flight: AtomicUsize,
    /// Highest number of requests seen in flight simultaneously.
    pub max_in_flight: AtomicUsize,
}

impl TargetStats {
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

/// Start a mock HTTP target on an ephemeral port that answers every request
/// with the given status. Each request is held open for `delay` before the
/// response is written, which makes concurrency observable in the stats.
pub async fn start_mock_target(status: u16, delay: Duration) -> (SocketAddr, Arc<TargetStats>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let stats = Arc::new(TargetStats::default());
    let accept_stats = stats.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let stats = accept_stats.clone();
                    tokio::spawn(async move {
                        stats.requests.fetch_add(1, Ordering::SeqCst);
                        let now = stats.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                        stats.max_in_flight.fetch_max(now, Ordering::SeqCst);

                        // Consume the request head before answering.
                        let mut buf = [0u8; 1024];
                        let _ = socket.read(&mut buf).await;

                        tokio::time::sleep(delay).await;

                        // Leave the in-flight window before the response goes
                        // out; the client may open its next connection the
                        // instant it has read the response.
                        stats.in_flight.fetch_sub(1, Ordering::SeqCst);

                        let body = "ok";
                        let response = format!(
                            "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status,
                            reason(status),
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, stats)
}

/// A URL on which nothing is listening, so every connection is refused.
#[allow(dead_code)]
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "OK",
    }
}

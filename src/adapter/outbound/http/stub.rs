//! Scripted HTTP/1.1 server for adapter tests.
//!
//! Answers one connection per scripted response, then stops accepting.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use super::{RetryPolicy, RetryingClient};

/// A running stub and the raw requests it has received.
pub struct StubServer {
    pub url: String,
    handle: JoinHandle<Vec<String>>,
}

impl StubServer {
    /// Serve `responses` in order, one per connection.
    pub async fn start(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let mut requests = Vec::new();
            for (status, body) in responses {
                let (mut socket, _) = listener.accept().await.unwrap();
                requests.push(read_request(&mut socket).await);
                let response = format!(
                    "HTTP/1.1 {status} Stub\r\n\
                     content-type: application/json\r\n\
                     content-length: {}\r\n\
                     connection: close\r\n\r\n{body}",
                    body.len()
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                let _ = socket.shutdown().await;
            }
            requests
        });

        Self { url, handle }
    }

    /// Wait for every scripted response to be served.
    pub async fn requests(self) -> Vec<String> {
        self.handle.await.unwrap()
    }
}

/// Client that retries immediately.
pub fn client(max_attempts: u32) -> RetryingClient {
    RetryingClient::with_client(
        reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .no_proxy()
            .build()
            .unwrap(),
        RetryPolicy::new(max_attempts, Duration::ZERO, 1.0),
    )
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..head_end]).to_lowercase();
        let body_len = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= head_end + 4 + body_len {
            break;
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

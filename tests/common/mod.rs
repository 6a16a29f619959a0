//! Local canned wttr.in server shared by the integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use weather_desk::client::WttrClient;
use weather_desk::config::Settings;

pub const FIXTURE: &str = include_str!("../fixtures/kyiv_j1.json");

/// Paths requested so far, in order
pub type Seen = Arc<Mutex<Vec<String>>>;

fn canned(path: &str) -> (&'static str, String) {
    if path.contains("Atlantis") {
        ("404 Not Found", "Unknown location".to_string())
    } else if path.contains("Broken") {
        ("500 Internal Server Error", "oops".to_string())
    } else if path.contains("NoContent") {
        ("204 No Content", String::new())
    } else if path.contains("Garbled") {
        ("200 OK", "{not json".to_string())
    } else if path.contains("Empty") {
        ("200 OK", "{}".to_string())
    } else {
        ("200 OK", FIXTURE.to_string())
    }
}

/// Starts a one-response-per-connection HTTP server and returns its base URL
pub async fn start_server(seen: Seen) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let seen = seen.clone();
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                let head = String::from_utf8_lossy(&request);
                let path = head
                    .lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(1))
                    .unwrap_or("/")
                    .to_string();
                seen.lock().unwrap().push(path.clone());

                let (status, body) = canned(&path);
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{}", addr)
}

/// Settings pointing at a fresh canned server
pub async fn settings() -> (Settings, Seen) {
    let seen = Seen::default();
    let base_url = start_server(seen.clone()).await;
    let settings = Settings {
        base_url,
        timeout_secs: 5,
        ..Settings::default()
    };
    (settings, seen)
}

pub async fn client() -> (WttrClient, Seen) {
    let (settings, seen) = settings().await;
    (WttrClient::new(&settings).unwrap(), seen)
}

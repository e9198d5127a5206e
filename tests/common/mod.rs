//! Shared utilities for integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use anagram_finder::config::AppConfig;
use anagram_finder::http::{AnagramResponse, AppState, HttpServer};
use anagram_finder::lifecycle::Shutdown;
use anagram_finder::source::{SourceContext, SourceFactory};
use anagram_finder::GrouperFactory;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub const BOUNDARY: &str = "anagram-test-boundary";

/// Start a simple mock backend that returns a fixed body. Returns its address.
#[allow(dead_code)]
pub async fn start_mock_backend(response: &'static str) -> SocketAddr {
    start_programmable_backend(move || async move { (200, response.to_string()) }).await
}

/// Start a programmable mock backend with async support. Returns its address.
#[allow(dead_code)]
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = std::sync::Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let mut buf = [0u8; 4096];
                        let _ = socket.read(&mut buf).await;

                        let (status, body) = f().await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Client and registries that never route through a system proxy.
#[allow(dead_code)]
pub fn test_state(config: &AppConfig) -> AppState {
    let client = reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(config.remote.timeout_secs))
        .build()
        .unwrap();
    let context = SourceContext {
        client,
        max_line_bytes: config.remote.max_line_bytes,
    };
    AppState::new(SourceFactory::new(context), GrouperFactory::new())
}

/// Build a server for in-process requests.
#[allow(dead_code)]
pub fn test_server(config: AppConfig) -> HttpServer {
    let state = test_state(&config);
    HttpServer::with_state(config, state)
}

/// Run a server on an ephemeral port until the returned `Shutdown` fires.
#[allow(dead_code)]
pub async fn start_server(config: AppConfig) -> (SocketAddr, Shutdown) {
    let server = test_server(config);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

#[allow(dead_code)]
pub fn json_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/anagram")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Multipart upload with optional `inputType` / `algorithm` fields.
#[allow(dead_code)]
pub fn multipart_request(
    file_contents: Option<&str>,
    input_type: Option<&str>,
    algorithm: Option<&str>,
) -> Request<Body> {
    let mut body = String::new();
    if let Some(contents) = file_contents {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"test.txt\"\r\nContent-Type: text/plain\r\n\r\n{contents}\r\n"
        ));
    }
    for (name, value) in [("inputType", input_type), ("algorithm", algorithm)] {
        if let Some(value) = value {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));

    Request::builder()
        .method("POST")
        .uri("/anagram")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Split a response into status and decoded body.
#[allow(dead_code)]
pub async fn read_response(response: Response) -> (StatusCode, AnagramResponse) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: AnagramResponse = serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("invalid body {:?}: {}", String::from_utf8_lossy(&bytes), e));
    (status, body)
}

#[allow(dead_code)]
pub fn groups(expected: &[&[&str]]) -> Vec<Vec<String>> {
    expected
        .iter()
        .map(|group| group.iter().map(|w| w.to_string()).collect())
        .collect()
}

//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request};
use nibble_auth::config::ServerConfig;
use nibble_auth::http::AuthServer;
use tempfile::NamedTempFile;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub const SECRET_CONFIG: &str = r#"{"token": "abc123", "working_dir": "/home/nibble"}"#;

/// Write `contents` to a fresh temporary config file.
pub fn config_file(contents: &str) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), contents).unwrap();
    file
}

/// Server settings reading `path`, with no auth delay.
pub fn server_config(path: &Path) -> ServerConfig {
    ServerConfig {
        bind_host: "127.0.0.1".parse().unwrap(),
        port: 0,
        config_location: path.to_path_buf(),
        auth_delay: Duration::ZERO,
        ..Default::default()
    }
}

/// A GET request to `uri` as the proxy would send it.
pub fn auth_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .uri(uri)
        .header(header::HOST, "nibble.example.com:10001");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

/// Start the server on an ephemeral port.
///
/// Dropping the returned sender shuts the server down.
pub async fn spawn_server(config: ServerConfig) -> (SocketAddr, oneshot::Sender<()>) {
    let listener = TcpListener::bind(config.bind_address()).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();

    let server = AuthServer::new(config);
    tokio::spawn(async move {
        let _ = server
            .run_until(listener, async move {
                let _ = rx.await;
            })
            .await;
    });

    (addr, tx)
}

/// HTTP client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}

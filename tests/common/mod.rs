//! Shared utilities for integration testing.

use std::net::SocketAddr;

use ingress_greeter::http::HttpServer;
use tokio::net::TcpListener;

/// Start the service on an ephemeral local port and return its address.
///
/// The listener is bound before the serve task is spawned, so callers can
/// issue requests immediately without waiting for startup.
pub async fn spawn_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new();
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

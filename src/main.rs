//! Ingress Greeter
//!
//! A minimal demo backend for exercising ingress routing, built with Tokio
//! and Axum. Each greeting response reports which ingress controller the
//! service believes forwarded the request.
//!
//! # Request Flow
//!
//! ```text
//! client request (forwarded by a gateway or an nginx ingress)
//!     → http/server.rs (Axum router, trace middleware)
//!     → http/handlers.rs (greeting handlers)
//!     → ingress/detect.rs (controller guess from headers)
//!     → JSON / plain-text response
//! ```
//!
//! The controller guess is a header heuristic: Envoy-based gateways decorate
//! forwarded requests with `x-envoy-decorator-operation`, nginx does not.

// Core subsystems
pub mod config;
pub mod http;

// Request classification
pub mod ingress;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ingress_greeter=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("ingress-greeter v{} starting", env!("CARGO_PKG_VERSION"));

    // Load configuration (flags or the PORT environment variable)
    let config = ServerConfig::parse();

    tracing::info!(port = config.port, "Configuration loaded");

    // Bind TCP listener
    let addr = config.socket_addr();
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(address = %addr, error = %e, "Failed to bind listen address");
            return Err(e.into());
        }
    };
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new();
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, trace middleware)
//!     → handlers.rs (route handlers, controller detection)
//!     → JSON / plain-text response to client
//! ```

pub mod handlers;
pub mod server;

pub use server::HttpServer;

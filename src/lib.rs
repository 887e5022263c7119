//! Ingress Greeter Library

pub mod config;
pub mod http;
pub mod ingress;

pub use config::schema::ServerConfig;
pub use http::HttpServer;
pub use ingress::Controller;

//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! Values come from command-line flags or environment variables; clap handles
//! parsing and type checks, so a malformed `PORT` terminates startup with a
//! diagnostic instead of surfacing later.

use std::net::{Ipv4Addr, SocketAddr};

use clap::Parser;

/// Root configuration for the greeter service.
#[derive(Parser, Debug, Clone)]
#[command(name = "ingress-greeter")]
#[command(about = "Demo backend that reports which ingress controller forwarded the request")]
pub struct ServerConfig {
    /// TCP port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,
}

impl ServerConfig {
    /// Socket address the server binds to.
    ///
    /// Always all interfaces; only the port is configurable.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

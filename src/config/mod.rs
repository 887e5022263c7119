//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! --port flag / PORT env var
//!     → schema.rs (clap parse & type check)
//!     → ServerConfig (immutable)
//!     → read once at startup by main
//! ```
//!
//! # Design Decisions
//! - Config is immutable once parsed; there is nothing to reload
//! - The port is the whole configuration surface
//! - An unparsable PORT is fatal at startup, never at request time

pub mod schema;

pub use schema::ServerConfig;

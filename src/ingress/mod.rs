//! Ingress controller detection subsystem.
//!
//! # Responsibilities
//! - Inspect the forwarded request's headers
//! - Guess which front-end proxy forwarded it
//! - Expose the guess's display name for response payloads
//!
//! # Design Decisions
//! - Detection is a pure function of the header map; no request state
//! - Exactly one header lookup and one branch per request
//! - Header absence is the default branch, never an error

pub mod detect;

pub use detect::{Controller, DETECTION_HEADER};

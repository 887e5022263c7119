//! Controller detection logic.
//!
//! # Responsibilities
//! - Classify a request's front-end proxy from its header map
//! - Map each classification to its display name
//!
//! # Design Decisions
//! - Header names are matched case-insensitively; `HeaderMap` stores names
//!   lowercased, so the lowercase key is authoritative
//! - Empty header values count as absent, even when the header is duplicated;
//!   any non-empty instance selects the gateway branch
//! - This is a heuristic: Envoy-based data planes decorate forwarded requests
//!   with `x-envoy-decorator-operation`, nginx does not. Neither direction is
//!   a guarantee, so the result is only ever echoed back to the caller

use std::fmt;

use axum::http::HeaderMap;

/// Header attached by Envoy-based data planes to describe the matched route.
pub const DETECTION_HEADER: &str = "x-envoy-decorator-operation";

/// The ingress component assumed to have forwarded a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    /// Service-mesh style ingress (e.g. an Istio gateway).
    GatewayApi,
    /// Conventional reverse-proxy ingress; the default assumption.
    NginxIngress,
}

impl Controller {
    /// Guess the forwarding controller from a request's headers.
    ///
    /// One lookup, one branch: a non-empty `x-envoy-decorator-operation`
    /// instance means an Envoy data plane touched the request.
    pub fn detect(headers: &HeaderMap) -> Self {
        if headers
            .get_all(DETECTION_HEADER)
            .iter()
            .any(|value| !value.is_empty())
        {
            Controller::GatewayApi
        } else {
            Controller::NginxIngress
        }
    }

    /// Human-readable controller name used in greeting payloads.
    pub fn name(&self) -> &'static str {
        match self {
            Controller::GatewayApi => "Gateway API",
            Controller::NginxIngress => "Nginx Ingress",
        }
    }
}

impl fmt::Display for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

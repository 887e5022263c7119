//! Route handlers for the greeter endpoints.

use axum::{http::HeaderMap, Json};
use serde::Serialize;

use crate::ingress::Controller;

#[derive(Serialize)]
pub struct Greeting {
    pub message: String,
}

pub async fn hello(headers: HeaderMap) -> Json<Greeting> {
    let controller = Controller::detect(&headers);
    tracing::debug!(controller = %controller, "Serving hello");
    Json(Greeting {
        message: format!("Hello from {controller}!"),
    })
}

pub async fn goodbye(headers: HeaderMap) -> Json<Greeting> {
    let controller = Controller::detect(&headers);
    tracing::debug!(controller = %controller, "Serving goodbye");
    Json(Greeting {
        message: format!("Goodbye from {controller}!"),
    })
}

pub async fn index() -> &'static str {
    "Try /hello and /goodbye"
}

//! Request logging middleware.
//!
//! Logs the incoming request and hands it to the inner service untouched.
//! The response comes back verbatim; only a completion event is added.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    tracing::info!(
        %method,
        %uri,
        path = uri.path(),
        query = uri.query().unwrap_or_default(),
        "request"
    );
    for (name, value) in req.headers() {
        tracing::debug!(header = %name, value = ?value, "request header");
    }

    let started = Instant::now();
    let response = next.run(req).await;

    tracing::info!(
        %method,
        %uri,
        status = response.status().as_u16(),
        elapsed = ?started.elapsed(),
        "response"
    );
    response
}

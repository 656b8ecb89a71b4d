//! Hello-world echo service.
//!
//! `GET /` greets the caller with the `message` query parameter (or `nothing!`
//! when it is absent) and answers `202 Accepted`. `GET /raw` echoes the raw
//! query string verbatim. Every request passes through [`logging::log_request`].

pub mod config;
pub mod greeting;
pub mod logging;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;

pub use config::{ConfigError, ServerConfig};
pub use greeting::{greeting_body, raw_query_body, GreetingParams, DEFAULT_MESSAGE};

pub fn app() -> Router {
    Router::new()
        .route("/", get(greeting::greet))
        .route("/raw", get(greeting::raw_query))
        .layer(middleware::from_fn(logging::log_request))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

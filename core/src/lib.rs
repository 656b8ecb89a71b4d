//! Synchronous client core for the hello-world echo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip.
//!
//! # Design
//! - `HelloClient` is stateless and holds only `base_url`.
//! - Each endpoint is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - Nothing here depends on the server crate; integration tests catch drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::HelloClient;
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse};
pub use types::Greeting;

//! Error types for the greeting client.

use thiserror::Error;

/// Errors returned by `HelloClient` parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404; the route does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a status other than the one the endpoint answers with.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },
}

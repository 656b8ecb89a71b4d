//! Stateless request builder and response parser for the greeting service.

use url::form_urlencoded;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Greeting;

/// Status `GET /` answers with.
pub const GREETING_STATUS: u16 = 202;
/// Status `GET /raw` answers with.
pub const RAW_QUERY_STATUS: u16 = 200;

/// Synchronous, stateless client for the greeting service.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct HelloClient {
    base_url: String,
}

impl HelloClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET /`, with `message` form-urlencoded into the query string when given.
    pub fn build_greeting(&self, message: Option<&str>) -> HttpRequest {
        let url = match message {
            Some(message) => {
                let encoded: String = form_urlencoded::byte_serialize(message.as_bytes()).collect();
                format!("{}/?message={encoded}", self.base_url)
            }
            None => format!("{}/", self.base_url),
        };
        HttpRequest {
            url,
            headers: Vec::new(),
        }
    }

    /// `GET /raw` with `query` appended verbatim.
    pub fn build_raw_query(&self, query: &str) -> HttpRequest {
        let url = if query.is_empty() {
            format!("{}/raw", self.base_url)
        } else {
            format!("{}/raw?{query}", self.base_url)
        };
        HttpRequest {
            url,
            headers: Vec::new(),
        }
    }

    pub fn parse_greeting(&self, response: HttpResponse) -> Result<Greeting, ApiError> {
        parse_text(response, GREETING_STATUS)
    }

    pub fn parse_raw_query(&self, response: HttpResponse) -> Result<Greeting, ApiError> {
        parse_text(response, RAW_QUERY_STATUS)
    }
}

fn parse_text(response: HttpResponse, expected: u16) -> Result<Greeting, ApiError> {
    check_status(&response, expected)?;
    let content_type = response.header("content-type").map(str::to_string);
    Ok(Greeting {
        body: response.body,
        content_type,
    })
}

/// Map unexpected status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

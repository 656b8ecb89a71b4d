use axum::{
    extract::RawQuery,
    http::{header, StatusCode},
};
use url::form_urlencoded;

/// Echoed when the caller sends no `message` parameter.
pub const DEFAULT_MESSAGE: &str = "nothing!";

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

type Triple = (StatusCode, [(header::HeaderName, &'static str); 1], String);

#[derive(Debug, Default, PartialEq, Eq)]
pub struct GreetingParams {
    pub message: Option<String>,
}

impl GreetingParams {
    /// Decode a form-urlencoded query string. Unknown keys are ignored and a
    /// repeated `message` keeps its last value.
    pub fn from_query(raw: Option<&str>) -> Self {
        let message = form_urlencoded::parse(raw.unwrap_or_default().as_bytes())
            .filter(|(key, _)| key == "message")
            .map(|(_, value)| value.into_owned())
            .last();
        Self { message }
    }
}

pub fn greeting_body(message: Option<&str>) -> String {
    format!("Hello world! You said: {}", message.unwrap_or(DEFAULT_MESSAGE))
}

pub fn raw_query_body(raw: Option<&str>) -> String {
    format!("Hello world! Query string: {}", raw.unwrap_or_default())
}

pub async fn greet(RawQuery(raw): RawQuery) -> Triple {
    let params = GreetingParams::from_query(raw.as_deref());
    (
        StatusCode::ACCEPTED,
        [(header::CONTENT_TYPE, TEXT_PLAIN)],
        greeting_body(params.message.as_deref()),
    )
}

pub async fn raw_query(RawQuery(raw): RawQuery) -> Triple {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, TEXT_PLAIN)],
        raw_query_body(raw.as_deref()),
    )
}

use axum::{
    http::{header, Request, StatusCode},
    routing::get,
    Router,
};
use hello_server::{app, greeting};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn body_string(response: axum::response::Response) -> String {
    let bytes: bytes::Bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- greeting ---

#[tokio::test]
async fn root_says_hello() {
    let resp = app().oneshot(get_request("/")).await.unwrap();
    let body = body_string(resp).await;
    assert!(body.contains("Hello world"));
}

#[tokio::test]
async fn root_returns_202() {
    let resp = app().oneshot(get_request("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::ACCEPTED);
}

#[tokio::test]
async fn root_without_message_returns_nothing() {
    let resp = app().oneshot(get_request("/")).await.unwrap();
    let body = body_string(resp).await;
    assert!(body.contains("nothing!"));
}

#[tokio::test]
async fn message_is_echoed_without_key() {
    let resp = app().oneshot(get_request("/?message=foo")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::ACCEPTED);
    let body = body_string(resp).await;
    assert!(body.contains("foo"));
    assert!(!body.contains("message="));
    assert!(!body.contains("nothing!"));
}

#[tokio::test]
async fn message_is_percent_decoded() {
    let resp = app().oneshot(get_request("/?message=hello%20there%21")).await.unwrap();
    let body = body_string(resp).await;
    assert!(body.ends_with("hello there!"));
}

#[tokio::test]
async fn repeated_message_uses_last_value() {
    let resp = app().oneshot(get_request("/?message=a&message=b")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::ACCEPTED);
    assert_eq!(body_string(resp).await, "Hello world! You said: b");
}

#[tokio::test]
async fn unknown_params_fall_back_to_default() {
    let resp = app().oneshot(get_request("/?other=foo")).await.unwrap();
    let body = body_string(resp).await;
    assert!(body.contains("nothing!"));
    assert!(!body.contains("foo"));
}

#[tokio::test]
async fn greeting_is_plain_text() {
    let resp = app().oneshot(get_request("/")).await.unwrap();
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain; charset=utf-8"
    );
}

// --- raw query ---

#[tokio::test]
async fn raw_query_is_echoed_verbatim() {
    let resp = app().oneshot(get_request("/raw?message=foo")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("message=foo"));
}

#[tokio::test]
async fn raw_query_keeps_escapes() {
    let resp = app().oneshot(get_request("/raw?a=1&b=%20")).await.unwrap();
    let body = body_string(resp).await;
    assert!(body.ends_with("a=1&b=%20"));
}

#[tokio::test]
async fn raw_query_without_query_string() {
    let resp = app().oneshot(get_request("/raw")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "Hello world! Query string: ");
}

// --- routing ---

#[tokio::test]
async fn unknown_path_returns_404() {
    let resp = app().oneshot(get_request("/missing")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_to_root_is_rejected() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// --- logging middleware ---

#[tokio::test]
async fn logging_layer_passes_response_through() {
    let bare = Router::new().route("/", get(greeting::greet));

    let wrapped = app().oneshot(get_request("/?message=same")).await.unwrap();
    let unwrapped = bare.oneshot(get_request("/?message=same")).await.unwrap();

    assert_eq!(wrapped.status(), unwrapped.status());
    assert_eq!(wrapped.headers(), unwrapped.headers());
    assert_eq!(body_string(wrapped).await, body_string(unwrapped).await);
}

//! Test helpers: an application router over a fresh store

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::{app, config::Config, db::Store, state::AppState};

/// Router under test
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// App over an empty in-memory store
    pub fn new() -> Self {
        Self::with_store(Store::in_memory())
    }

    pub fn with_store(store: Store) -> Self {
        Self {
            router: app(AppState::new(store, Config::for_tests())),
        }
    }
}

/// Send a request with an optional JSON body; returns the status and JSON body
pub async fn send(
    app: &TestApp,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let (status, bytes) = dispatch(app, request).await;
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Send a raw JSON-typed body, e.g. a malformed document
pub async fn send_raw(app: &TestApp, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let (status, bytes) = dispatch(app, request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// GET a page or asset as text
pub async fn get_text(app: &TestApp, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, bytes) = dispatch(app, request).await;
    (status, String::from_utf8(bytes).unwrap())
}

async fn dispatch(app: &TestApp, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

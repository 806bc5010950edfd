//! Request logging middleware

use std::time::Instant;

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use tracing::{debug, error, info, warn};

use crate::constants::API_BASE_PATH;

/// Log one line per request with method, path, status and latency.
///
/// Store failures (5xx) log at `error`, rejected requests at `warn`, static
/// assets at `debug`.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let has_query = request.uri().query().is_some();

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);
    let surface = if path.starts_with(API_BASE_PATH) { "api" } else { "page" };

    match classify(&path, status) {
        Level::Error => error!(
            method = %method, path = %path, has_query, surface,
            status = status.as_u16(), duration_ms = %duration_ms,
            "Request failed"
        ),
        Level::Warn => warn!(
            method = %method, path = %path, has_query, surface,
            status = status.as_u16(), duration_ms = %duration_ms,
            "Request rejected"
        ),
        Level::Info => info!(
            method = %method, path = %path, has_query, surface,
            status = status.as_u16(), duration_ms = %duration_ms,
            "Request completed"
        ),
        Level::Debug => debug!(
            method = %method, path = %path,
            status = status.as_u16(), duration_ms = %duration_ms,
            "Asset served"
        ),
    }

    response
}

#[derive(Debug, PartialEq, Eq)]
enum Level {
    Error,
    Warn,
    Info,
    Debug,
}

fn classify(path: &str, status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::Error
    } else if status.is_client_error() && status != StatusCode::NOT_FOUND {
        Level::Warn
    } else if path.starts_with("/assets/") {
        Level::Debug
    } else {
        Level::Info
    }
}

//! Backoffice - Admin Dashboard Service
//!
//! This library provides the record API and management pages behind the
//! admin dashboard: users, content items, rewards and support tickets.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Record access shared by every resource
//! - **Repositories**: Store access (PostgreSQL or in-memory)
//! - **Models**: Domain models
//! - **Pages**: Server-rendered management pages and their view state

pub mod client;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

use axum::{http::StatusCode, middleware::from_fn, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

use constants::API_BASE_PATH;

/// Build the application router: API under `/api`, pages at the root
pub fn app(state: AppState) -> Router {
    let request_timeout = state.config().server.request_timeout;
    let max_body_bytes = state.config().server.max_body_bytes;

    Router::new()
        .nest(API_BASE_PATH, handlers::routes())
        .merge(pages::routes())
        .layer(from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .with_state(state)
}

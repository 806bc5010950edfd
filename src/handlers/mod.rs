//! HTTP Request Handlers
//!
//! One module per resource, all built on the shared CRUD endpoints in
//! [`records`].

pub mod contents;
pub mod extract;
pub mod health;
pub mod records;
pub mod rewards;
pub mod tickets;
pub mod users;

use axum::Router;

use crate::{constants::collections, state::AppState};

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest(&format!("/{}", collections::USERS), users::routes())
        .nest(&format!("/{}", collections::CONTENTS), contents::routes())
        .nest(&format!("/{}", collections::REWARDS), rewards::routes())
        .nest(&format!("/{}", collections::TICKETS), tickets::routes())
}

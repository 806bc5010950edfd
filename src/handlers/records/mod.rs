//! CRUD endpoints shared by all four resources
//!
//! Each resource module only supplies its request DTOs through [`Resource`];
//! routing, status codes and response wrapping live here.

mod handler;
pub mod response;

pub use handler::IdQuery;
pub use response::*;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use serde::de::DeserializeOwned;

use crate::{db::Collection, error::AppResult, state::AppState};

/// A collection exposed over HTTP
pub trait Resource: Collection {
    /// Body accepted by `POST /api/<collection>`
    type CreateRequest: DeserializeOwned + Send + 'static;

    /// Body accepted by `PUT /api/<collection>`
    type UpdateRequest: DeserializeOwned + Send + 'static;

    /// Validate a create body and apply defaults
    fn draft(request: Self::CreateRequest) -> AppResult<Self::Draft>;

    /// Validate an update body into the fields to replace
    fn changes(request: Self::UpdateRequest) -> AppResult<Self::Changes>;
}

/// Routes for one resource, mounted at `/api/<collection>`
pub fn routes<R: Resource>() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list::<R>))
        .route("/", post(handler::create::<R>))
        .route("/", put(handler::update_by_query::<R>))
        .route("/", delete(handler::delete::<R>))
        .route("/{id}", get(handler::get::<R>))
        .route("/{id}", put(handler::update::<R>))
}

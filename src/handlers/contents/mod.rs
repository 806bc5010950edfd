//! Content management handlers

pub mod request;

pub use request::*;

use axum::Router;

use crate::{
    error::AppResult,
    models::{Content, ContentChanges, NewContent},
    state::AppState,
};

use super::records::{self, Resource};

impl Resource for Content {
    type CreateRequest = CreateContentRequest;
    type UpdateRequest = UpdateContentRequest;

    fn draft(request: CreateContentRequest) -> AppResult<NewContent> {
        request.into_draft()
    }

    fn changes(request: UpdateContentRequest) -> AppResult<ContentChanges> {
        request.into_changes()
    }
}

/// Content routes
pub fn routes() -> Router<AppState> {
    records::routes::<Content>()
}

//! Generic CRUD handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    handlers::extract::JsonBody,
    services::RecordService,
    state::AppState,
};

use super::{
    response::{Listing, MessageResponse, Saved, Single},
    Resource,
};

/// `?id=` query used by the collection-level update and delete
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

impl IdQuery {
    fn require(self) -> AppResult<String> {
        match self.id {
            Some(id) if !id.trim().is_empty() => Ok(id),
            _ => Err(AppError::Validation("id is required".to_string())),
        }
    }
}

/// List every document of the collection
pub async fn list<R: Resource>(State(state): State<AppState>) -> AppResult<Json<Listing<R>>> {
    let records = RecordService::list::<R>(state.store())
        .await
        .map_err(|e| e.into_bad_request(&format!("Failed to fetch {}", R::COLLECTION)))?;

    Ok(Json(Listing(records)))
}

/// Get one document by id
pub async fn get<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Single<R>>> {
    let record = RecordService::get::<R>(state.store(), &id).await?;
    Ok(Json(Single(record)))
}

/// Create a document
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<R::CreateRequest>,
) -> AppResult<(StatusCode, Json<Saved<R>>)> {
    let draft = R::draft(payload)?;
    let record = RecordService::create::<R>(state.store(), draft).await?;

    Ok((StatusCode::CREATED, Json(Saved::created(record))))
}

/// Update the document named in the path
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<R::UpdateRequest>,
) -> AppResult<Json<Saved<R>>> {
    apply_update::<R>(&state, &id, payload).await
}

/// Update the document named by `?id=`
pub async fn update_by_query<R: Resource>(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
    JsonBody(payload): JsonBody<R::UpdateRequest>,
) -> AppResult<Json<Saved<R>>> {
    let id = query.require()?;
    apply_update::<R>(&state, &id, payload).await
}

async fn apply_update<R: Resource>(
    state: &AppState,
    id: &str,
    payload: R::UpdateRequest,
) -> AppResult<Json<Saved<R>>> {
    let changes = R::changes(payload)?;
    let record = RecordService::update::<R>(state.store(), id, changes).await?;

    Ok(Json(Saved::updated(record)))
}

/// Delete the document named by `?id=`; unknown ids still succeed
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<Json<MessageResponse>> {
    let id = query.require()?;

    RecordService::delete::<R>(state.store(), &id)
        .await
        .map_err(|e| e.into_bad_request(&format!("Failed to delete {}", R::SINGULAR)))?;

    Ok(Json(MessageResponse {
        message: format!("{} Deleted", R::TITLE),
    }))
}

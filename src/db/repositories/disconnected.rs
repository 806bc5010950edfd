//! Repository used when no database connection is configured

use async_trait::async_trait;
use uuid::Uuid;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::Record,
};

/// Fails every call; the server keeps answering but nothing persists
#[derive(Debug, Clone, Copy, Default)]
pub struct DisconnectedRepository;

fn unavailable<T>(collection: &str) -> AppResult<T> {
    Err(AppError::Database(format!(
        "no database connection configured for '{}'",
        collection
    )))
}

#[async_trait]
impl<R: Record> Repository<R> for DisconnectedRepository {
    async fn list(&self) -> AppResult<Vec<R>> {
        unavailable(R::COLLECTION)
    }

    async fn find_by_id(&self, _id: &Uuid) -> AppResult<Option<R>> {
        unavailable(R::COLLECTION)
    }

    async fn insert(&self, _draft: R::Draft) -> AppResult<R> {
        unavailable(R::COLLECTION)
    }

    async fn update(&self, _id: &Uuid, _changes: R::Changes) -> AppResult<Option<R>> {
        unavailable(R::COLLECTION)
    }

    async fn delete(&self, _id: &Uuid) -> AppResult<bool> {
        unavailable(R::COLLECTION)
    }
}

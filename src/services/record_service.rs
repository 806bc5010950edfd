//! Record service
//!
//! Store access shared by all four resources: identifier parsing, not-found
//! mapping and logging of mutations.

use tracing::info;

use crate::{
    db::Collection,
    db::Store,
    error::{AppError, AppResult},
    utils::parse_record_id,
};

/// Record service for business logic
pub struct RecordService;

impl RecordService {
    /// List every document in the collection
    pub async fn list<R: Collection>(store: &Store) -> AppResult<Vec<R>> {
        R::repository(store).list().await
    }

    /// Get a document by its identifier
    pub async fn get<R: Collection>(store: &Store, id: &str) -> AppResult<R> {
        let not_found = || AppError::NotFound(R::NOT_FOUND.to_string());
        let id = parse_record_id(id).ok_or_else(not_found)?;

        R::repository(store)
            .find_by_id(&id)
            .await?
            .ok_or_else(not_found)
    }

    /// Create a document from a validated draft
    pub async fn create<R: Collection>(store: &Store, draft: R::Draft) -> AppResult<R> {
        let record = R::repository(store).insert(draft).await?;
        info!(collection = R::COLLECTION, id = %record.id(), "Record created");
        Ok(record)
    }

    /// Apply supplied fields to an existing document
    pub async fn update<R: Collection>(
        store: &Store,
        id: &str,
        changes: R::Changes,
    ) -> AppResult<R> {
        let not_found = || AppError::NotFound(format!("{} not found", R::TITLE));
        let id = parse_record_id(id).ok_or_else(not_found)?;

        let record = R::repository(store)
            .update(&id, changes)
            .await?
            .ok_or_else(not_found)?;

        info!(collection = R::COLLECTION, id = %id, "Record updated");
        Ok(record)
    }

    /// Delete a document.
    ///
    /// Returns whether something was removed; an unknown or malformed id is
    /// not an error.
    pub async fn delete<R: Collection>(store: &Store, id: &str) -> AppResult<bool> {
        let Some(id) = parse_record_id(id) else {
            return Ok(false);
        };

        let removed = R::repository(store).delete(&id).await?;
        if removed {
            info!(collection = R::COLLECTION, id = %id, "Record deleted");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Content, ContentChanges, NewContent};

    fn draft() -> NewContent {
        NewContent {
            title: "Spring update".into(),
            description: "What's new".into(),
            content_type: "article".into(),
            author: "sam".into(),
            status: "draft".into(),
        }
    }

    #[tokio::test]
    async fn test_get_unknown_and_malformed_ids() {
        let store = Store::in_memory();

        let err = RecordService::get::<Content>(&store, "not-an-id").await.unwrap_err();
        assert_eq!(err.to_string(), "could not find content item");

        let err = RecordService::get::<Content>(&store, &uuid::Uuid::new_v4().to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_reports_not_found_by_title() {
        let store = Store::in_memory();
        let err = RecordService::update::<Content>(
            &store,
            &uuid::Uuid::new_v4().to_string(),
            ContentChanges::default(),
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Content not found");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = Store::in_memory();
        let content = RecordService::create::<Content>(&store, draft()).await.unwrap();
        let id = content.id.to_string();

        assert!(RecordService::delete::<Content>(&store, &id).await.unwrap());
        assert!(!RecordService::delete::<Content>(&store, &id).await.unwrap());
        assert!(!RecordService::delete::<Content>(&store, "garbage").await.unwrap());
        assert!(RecordService::list::<Content>(&store).await.unwrap().is_empty());
    }
}

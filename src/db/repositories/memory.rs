//! In-memory repository
//!
//! Keeps documents in insertion order behind a `tokio` lock. Used for tests and
//! for running the dashboard without a database (`STORE_BACKEND=memory`).

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{Record, UniqueField},
    utils::now_utc,
};

/// Collection held in process memory
#[derive(Debug)]
pub struct MemoryRepository<R> {
    documents: RwLock<Vec<R>>,
}

impl<R: Record> MemoryRepository<R> {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
        }
    }

    /// Reject `candidate` if another document holds one of its unique values
    fn check_unique(documents: &[R], candidate: &R) -> AppResult<()> {
        let wanted = candidate.unique_fields();
        if wanted.is_empty() {
            return Ok(());
        }

        for other in documents.iter().filter(|d| d.id() != candidate.id()) {
            let taken = other.unique_fields();
            if let Some(clash) = wanted.iter().find(|w| clashes(w, &taken)) {
                return Err(AppError::AlreadyExists(clash.message.to_string()));
            }
        }
        Ok(())
    }
}

fn clashes(wanted: &UniqueField, taken: &[UniqueField]) -> bool {
    taken
        .iter()
        .any(|t| t.name == wanted.name && t.value == wanted.value)
}

#[async_trait]
impl<R: Record> Repository<R> for MemoryRepository<R> {
    async fn list(&self) -> AppResult<Vec<R>> {
        Ok(self.documents.read().await.clone())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<R>> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|d| d.id() == *id).cloned())
    }

    async fn insert(&self, draft: R::Draft) -> AppResult<R> {
        let record = R::from_draft(Uuid::new_v4(), draft, now_utc());

        let mut documents = self.documents.write().await;
        Self::check_unique(&documents, &record)?;
        documents.push(record.clone());

        Ok(record)
    }

    async fn update(&self, id: &Uuid, changes: R::Changes) -> AppResult<Option<R>> {
        let mut documents = self.documents.write().await;
        let Some(index) = documents.iter().position(|d| d.id() == *id) else {
            return Ok(None);
        };

        let mut updated = documents[index].clone();
        updated.apply(changes, now_utc());
        Self::check_unique(&documents, &updated)?;
        documents[index] = updated.clone();

        Ok(Some(updated))
    }

    async fn delete(&self, id: &Uuid) -> AppResult<bool> {
        let mut documents = self.documents.write().await;
        let before = documents.len();
        documents.retain(|d| d.id() != *id);
        Ok(documents.len() != before)
    }
}

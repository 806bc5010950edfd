//! Database repositories
//!
//! Repositories handle all direct store interactions. Every collection is
//! reached through the same [`Repository`] contract so handlers and services
//! never see which backend is in use.

pub mod content_repo;
pub mod disconnected;
pub mod memory;
pub mod reward_repo;
pub mod ticket_repo;
pub mod user_repo;

pub use content_repo::ContentRepository;
pub use disconnected::DisconnectedRepository;
pub use memory::MemoryRepository;
pub use reward_repo::RewardRepository;
pub use ticket_repo::TicketRepository;
pub use user_repo::UserRepository;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{error::AppResult, models::Record};

/// CRUD access to one collection
#[async_trait]
pub trait Repository<R: Record>: Send + Sync {
    /// All documents, oldest first
    async fn list(&self) -> AppResult<Vec<R>>;

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<R>>;

    /// Persist a new document; the store assigns id and timestamps
    async fn insert(&self, draft: R::Draft) -> AppResult<R>;

    /// Apply changes to a document, returning it as stored afterwards.
    ///
    /// `Ok(None)` when no document has the id.
    async fn update(&self, id: &Uuid, changes: R::Changes) -> AppResult<Option<R>>;

    /// Remove a document; `Ok(false)` when nothing matched
    async fn delete(&self, id: &Uuid) -> AppResult<bool>;
}

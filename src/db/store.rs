//! Record store handle
//!
//! Bundles one repository per collection. Built once at startup and handed to
//! the router through [`AppState`](crate::state::AppState).

use std::sync::Arc;

use sqlx::PgPool;

use super::{
    connection::test_connection,
    repositories::{
        ContentRepository, DisconnectedRepository, MemoryRepository, Repository,
        RewardRepository, TicketRepository, UserRepository,
    },
};
use crate::{
    constants::store_backends,
    error::{AppError, AppResult},
    models::{Content, Record, Reward, Ticket, User},
};

/// Handles to all four collections
#[derive(Clone)]
pub struct Store {
    users: Arc<dyn Repository<User>>,
    contents: Arc<dyn Repository<Content>>,
    rewards: Arc<dyn Repository<Reward>>,
    tickets: Arc<dyn Repository<Ticket>>,
    backend: Backend,
}

#[derive(Clone)]
enum Backend {
    Postgres(PgPool),
    Memory,
    Disconnected,
}

impl Store {
    /// Store backed by PostgreSQL tables
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(UserRepository::new(pool.clone())),
            contents: Arc::new(ContentRepository::new(pool.clone())),
            rewards: Arc::new(RewardRepository::new(pool.clone())),
            tickets: Arc::new(TicketRepository::new(pool.clone())),
            backend: Backend::Postgres(pool),
        }
    }

    /// Store held in process memory; contents are lost on restart
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(MemoryRepository::<User>::new()),
            contents: Arc::new(MemoryRepository::<Content>::new()),
            rewards: Arc::new(MemoryRepository::<Reward>::new()),
            tickets: Arc::new(MemoryRepository::<Ticket>::new()),
            backend: Backend::Memory,
        }
    }

    /// Store without a connection; every operation fails
    pub fn disconnected() -> Self {
        Self {
            users: Arc::new(DisconnectedRepository),
            contents: Arc::new(DisconnectedRepository),
            rewards: Arc::new(DisconnectedRepository),
            tickets: Arc::new(DisconnectedRepository),
            backend: Backend::Disconnected,
        }
    }

    pub fn users(&self) -> &dyn Repository<User> {
        self.users.as_ref()
    }

    pub fn contents(&self) -> &dyn Repository<Content> {
        self.contents.as_ref()
    }

    pub fn rewards(&self) -> &dyn Repository<Reward> {
        self.rewards.as_ref()
    }

    pub fn tickets(&self) -> &dyn Repository<Ticket> {
        self.tickets.as_ref()
    }

    /// Backend name reported by the health check
    pub fn backend_name(&self) -> &'static str {
        match self.backend {
            Backend::Postgres(_) => store_backends::POSTGRES,
            Backend::Memory => store_backends::MEMORY,
            Backend::Disconnected => "disconnected",
        }
    }

    /// Check the store can serve requests
    pub async fn ping(&self) -> AppResult<()> {
        match &self.backend {
            Backend::Postgres(pool) => Ok(test_connection(pool).await?),
            Backend::Memory => Ok(()),
            Backend::Disconnected => Err(AppError::Database(
                "no database connection configured".to_string(),
            )),
        }
    }
}

/// Resolves the repository for a record type from a [`Store`]
pub trait Collection: Record {
    fn repository(store: &Store) -> &dyn Repository<Self>;
}

impl Collection for User {
    fn repository(store: &Store) -> &dyn Repository<Self> {
        store.users()
    }
}

impl Collection for Content {
    fn repository(store: &Store) -> &dyn Repository<Self> {
        store.contents()
    }
}

impl Collection for Reward {
    fn repository(store: &Store) -> &dyn Repository<Self> {
        store.rewards()
    }
}

impl Collection for Ticket {
    fn repository(store: &Store) -> &dyn Repository<Self> {
        store.tickets()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewTicket, TicketPriority};

    #[tokio::test]
    async fn test_disconnected_store_fails_every_call() {
        let store = Store::disconnected();
        assert_eq!(store.backend_name(), "disconnected");
        assert!(store.ping().await.is_err());
        assert!(matches!(
            store.users().list().await,
            Err(AppError::Database(_))
        ));
    }

    #[tokio::test]
    async fn test_collection_resolves_matching_repository() {
        let store = Store::in_memory();
        store
            .tickets()
            .insert(NewTicket {
                subject: "Login broken".into(),
                description: "Cannot log in".into(),
                status: Default::default(),
                priority: TicketPriority::High,
                assigned_user: Default::default(),
            })
            .await
            .unwrap();

        let tickets = Ticket::repository(&store).list().await.unwrap();
        assert_eq!(tickets.len(), 1);
        assert!(User::repository(&store).list().await.unwrap().is_empty());
        assert!(store.ping().await.is_ok());
    }
}

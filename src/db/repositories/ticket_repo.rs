//! Ticket repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{NewTicket, Ticket, TicketChanges},
};

/// Repository for support ticket database operations
#[derive(Debug, Clone)]
pub struct TicketRepository {
    pool: PgPool,
}

#[derive(Debug, FromRow)]
struct TicketRow {
    id: Uuid,
    subject: String,
    description: String,
    status: String,
    priority: String,
    assigned_user: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TicketRow> for Ticket {
    type Error = AppError;

    fn try_from(row: TicketRow) -> Result<Self, Self::Error> {
        let corrupt = |e: crate::models::UnknownVariant| {
            AppError::Database(format!("ticket {}: {}", row.id, e))
        };

        Ok(Ticket {
            id: row.id,
            status: row.status.parse().map_err(corrupt)?,
            priority: row.priority.parse().map_err(corrupt)?,
            assigned_user: row.assigned_user.parse().map_err(corrupt)?,
            subject: row.subject,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl TicketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Ticket> for TicketRepository {
    async fn list(&self) -> AppResult<Vec<Ticket>> {
        let rows =
            sqlx::query_as::<_, TicketRow>(r#"SELECT * FROM tickets ORDER BY created_at ASC"#)
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(Ticket::try_from).collect()
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Ticket>> {
        sqlx::query_as::<_, TicketRow>(r#"SELECT * FROM tickets WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Ticket::try_from)
            .transpose()
    }

    async fn insert(&self, draft: NewTicket) -> AppResult<Ticket> {
        let row = sqlx::query_as::<_, TicketRow>(
            r#"
            INSERT INTO tickets (id, subject, description, status, priority, assigned_user)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&draft.subject)
        .bind(&draft.description)
        .bind(draft.status.as_str())
        .bind(draft.priority.as_str())
        .bind(draft.assigned_user.as_str())
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn update(&self, id: &Uuid, changes: TicketChanges) -> AppResult<Option<Ticket>> {
        sqlx::query_as::<_, TicketRow>(
            r#"
            UPDATE tickets
            SET
                subject = COALESCE($2, subject),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                priority = COALESCE($5, priority),
                assigned_user = COALESCE($6, assigned_user),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.subject)
        .bind(changes.description)
        .bind(changes.status.map(|s| s.as_str()))
        .bind(changes.priority.map(|p| p.as_str()))
        .bind(changes.assigned_user.map(|a| a.as_str()))
        .fetch_optional(&self.pool)
        .await?
        .map(Ticket::try_from)
        .transpose()
    }

    async fn delete(&self, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM tickets WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssignedUser, TicketPriority, TicketStatus};

    fn ticket(subject: &str) -> NewTicket {
        NewTicket {
            subject: subject.to_string(),
            description: "Cannot log in".to_string(),
            status: TicketStatus::Assigned,
            priority: TicketPriority::Low,
            assigned_user: AssignedUser::Unassigned,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn update_keeps_omitted_columns(pool: PgPool) {
        let repo = TicketRepository::new(pool);
        let created = repo.insert(ticket("Login broken")).await.unwrap();

        let changes = TicketChanges {
            priority: Some(TicketPriority::High),
            assigned_user: Some(AssignedUser::Deelulu),
            ..Default::default()
        };
        let updated = repo.update(&created.id, changes).await.unwrap().unwrap();

        assert_eq!(updated.priority, TicketPriority::High);
        assert_eq!(updated.assigned_user, AssignedUser::Deelulu);
        assert_eq!(updated.subject, "Login broken");
        assert_eq!(updated.status, TicketStatus::Assigned);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn delete_reports_whether_a_row_went(pool: PgPool) {
        let repo = TicketRepository::new(pool);
        let created = repo.insert(ticket("Login broken")).await.unwrap();

        assert!(!repo.delete(&Uuid::new_v4()).await.unwrap());
        assert!(repo.delete(&created.id).await.unwrap());
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn list_is_in_creation_order(pool: PgPool) {
        let repo = TicketRepository::new(pool);
        let mut ids = Vec::new();
        for subject in ["Printer", "Access", "Billing"] {
            ids.push(repo.insert(ticket(subject)).await.unwrap().id);
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }

        let listed: Vec<Uuid> = repo.list().await.unwrap().into_iter().map(|t| t.id).collect();
        assert_eq!(listed, ids);
    }
}

//! Reward repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{NewReward, Reward, RewardChanges},
};

/// Repository for reward database operations
#[derive(Debug, Clone)]
pub struct RewardRepository {
    pool: PgPool,
}

#[derive(Debug, FromRow)]
struct RewardRow {
    id: Uuid,
    name: String,
    description: String,
    points_required: f64,
    status: String,
    category: String,
    expiration_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<RewardRow> for Reward {
    type Error = AppError;

    fn try_from(row: RewardRow) -> Result<Self, Self::Error> {
        Ok(Reward {
            id: row.id,
            name: row.name,
            description: row.description,
            points_required: row.points_required,
            status: row
                .status
                .parse()
                .map_err(|e| AppError::Database(format!("reward {}: {}", row.id, e)))?,
            category: row.category,
            expiration_date: row.expiration_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl RewardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Reward> for RewardRepository {
    async fn list(&self) -> AppResult<Vec<Reward>> {
        let rows =
            sqlx::query_as::<_, RewardRow>(r#"SELECT * FROM rewards ORDER BY created_at ASC"#)
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(Reward::try_from).collect()
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Reward>> {
        sqlx::query_as::<_, RewardRow>(r#"SELECT * FROM rewards WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Reward::try_from)
            .transpose()
    }

    async fn insert(&self, draft: NewReward) -> AppResult<Reward> {
        let row = sqlx::query_as::<_, RewardRow>(
            r#"
            INSERT INTO rewards (id, name, description, points_required, status, category, expiration_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.points_required)
        .bind(draft.status.as_str())
        .bind(&draft.category)
        .bind(draft.expiration_date)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn update(&self, id: &Uuid, changes: RewardChanges) -> AppResult<Option<Reward>> {
        sqlx::query_as::<_, RewardRow>(
            r#"
            UPDATE rewards
            SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                points_required = COALESCE($4, points_required),
                status = COALESCE($5, status),
                category = COALESCE($6, category),
                expiration_date = COALESCE($7, expiration_date),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.name)
        .bind(changes.description)
        .bind(changes.points_required)
        .bind(changes.status.map(|s| s.as_str()))
        .bind(changes.category)
        .bind(changes.expiration_date)
        .fetch_optional(&self.pool)
        .await?
        .map(Reward::try_from)
        .transpose()
    }

    async fn delete(&self, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM rewards WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

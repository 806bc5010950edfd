//! User repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{NewUser, User, UserChanges},
};

/// Repository for user database operations
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

/// Row as stored; `role` is TEXT guarded by a CHECK constraint
#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    password: String,
    email: String,
    role: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: row.id,
            username: row.username,
            password: row.password,
            email: row.email,
            role: row
                .role
                .parse()
                .map_err(|e| AppError::Database(format!("user {}: {}", row.id, e)))?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<User> for UserRepository {
    async fn list(&self) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(r#"SELECT * FROM users ORDER BY created_at ASC"#)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, UserRow>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(User::try_from)
            .transpose()
    }

    async fn insert(&self, draft: NewUser) -> AppResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, username, password, email, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&draft.username)
        .bind(&draft.password)
        .bind(&draft.email)
        .bind(draft.role.as_str())
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn update(&self, id: &Uuid, changes: UserChanges) -> AppResult<Option<User>> {
        sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET
                username = COALESCE($2, username),
                password = COALESCE($3, password),
                email = COALESCE($4, email),
                role = COALESCE($5, role),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.username)
        .bind(changes.password)
        .bind(changes.email)
        .bind(changes.role.map(|r| r.as_str()))
        .fetch_optional(&self.pool)
        .await?
        .map(User::try_from)
        .transpose()
    }

    async fn delete(&self, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

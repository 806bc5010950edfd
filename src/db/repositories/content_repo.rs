//! Content repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::Repository;
use crate::{
    error::AppResult,
    models::{Content, ContentChanges, NewContent},
};

/// Repository for content database operations
#[derive(Debug, Clone)]
pub struct ContentRepository {
    pool: PgPool,
}

#[derive(Debug, FromRow)]
struct ContentRow {
    id: Uuid,
    title: String,
    description: String,
    content_type: String,
    author: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ContentRow> for Content {
    fn from(row: ContentRow) -> Self {
        Content {
            id: row.id,
            title: row.title,
            description: row.description,
            content_type: row.content_type,
            author: row.author,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl ContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Content> for ContentRepository {
    async fn list(&self) -> AppResult<Vec<Content>> {
        let rows =
            sqlx::query_as::<_, ContentRow>(r#"SELECT * FROM contents ORDER BY created_at ASC"#)
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(Content::from).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Content>> {
        let row = sqlx::query_as::<_, ContentRow>(r#"SELECT * FROM contents WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Content::from))
    }

    async fn insert(&self, draft: NewContent) -> AppResult<Content> {
        let row = sqlx::query_as::<_, ContentRow>(
            r#"
            INSERT INTO contents (id, title, description, content_type, author, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.content_type)
        .bind(&draft.author)
        .bind(&draft.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: &Uuid, changes: ContentChanges) -> AppResult<Option<Content>> {
        let row = sqlx::query_as::<_, ContentRow>(
            r#"
            UPDATE contents
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                content_type = COALESCE($4, content_type),
                author = COALESCE($5, author),
                status = COALESCE($6, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.title)
        .bind(changes.description)
        .bind(changes.content_type)
        .bind(changes.author)
        .bind(changes.status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Content::from))
    }

    async fn delete(&self, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM contents WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str) -> NewContent {
        NewContent {
            title: title.to_string(),
            description: "Launch notes".to_string(),
            content_type: "article".to_string(),
            author: "sam".to_string(),
            status: "draft".to_string(),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn update_keeps_omitted_columns(pool: PgPool) {
        let repo = ContentRepository::new(pool);
        let content = repo.insert(post("Launch")).await.unwrap();

        let changes = ContentChanges {
            status: Some("live".to_string()),
            ..Default::default()
        };
        let updated = repo.update(&content.id, changes).await.unwrap().unwrap();

        assert_eq!(updated.status, "live");
        assert_eq!(updated.title, "Launch");
        assert_eq!(updated.content_type, "article");
        assert_eq!(updated.author, "sam");
        assert_eq!(updated.created_at, content.created_at);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn missing_rows_are_reported(pool: PgPool) {
        let repo = ContentRepository::new(pool);
        let unknown = Uuid::new_v4();

        assert_eq!(repo.find_by_id(&unknown).await.unwrap(), None);
        assert_eq!(
            repo.update(&unknown, ContentChanges::default()).await.unwrap(),
            None
        );
        assert!(!repo.delete(&unknown).await.unwrap());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn list_is_in_creation_order(pool: PgPool) {
        let repo = ContentRepository::new(pool);
        let mut ids = Vec::new();
        for title in ["Zebra", "Apple", "Mango"] {
            ids.push(repo.insert(post(title)).await.unwrap().id);
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }

        let listed: Vec<Uuid> = repo.list().await.unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(listed, ids);
    }
}

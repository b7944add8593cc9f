//! SQLite Script Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::DbPool;
use crate::application::ports::{RepositoryError, ScriptRecord, ScriptRepositoryPort};
use crate::domain::script::ScriptStatus;

/// SQLite Script Repository
pub struct SqliteScriptRepository {
    pool: DbPool,
}

impl SqliteScriptRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ScriptRow {
    id: String,
    name: String,
    content: String,
    tags: String,
    status: String,
    created_at: String,
    updated_at: String,
}

impl TryFrom<ScriptRow> for ScriptRecord {
    type Error = RepositoryError;

    fn try_from(row: ScriptRow) -> Result<Self, Self::Error> {
        // tags 以 JSON 数组文本存储
        let tags: Vec<String> = serde_json::from_str(&row.tags)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        Ok(ScriptRecord {
            id: Uuid::parse_str(&row.id)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            name: row.name,
            content: row.content,
            tags,
            status: ScriptStatus::from_str(&row.status).unwrap_or_default(),
            created_at: DateTime::parse_from_rfc3339(&row.created_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
            updated_at: DateTime::parse_from_rfc3339(&row.updated_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl ScriptRepositoryPort for SqliteScriptRepository {
    async fn save(&self, script: &ScriptRecord) -> Result<(), RepositoryError> {
        let tags = serde_json::to_string(&script.tags)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO scripts (id, name, content, tags, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                content = excluded.content,
                tags = excluded.tags,
                status = excluded.status,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(script.id.to_string())
        .bind(&script.name)
        .bind(&script.content)
        .bind(tags)
        .bind(script.status.as_str())
        .bind(script.created_at.to_rfc3339())
        .bind(script.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ScriptRecord>, RepositoryError> {
        let row: Option<ScriptRow> = sqlx::query_as(
            "SELECT id, name, content, tags, status, created_at, updated_at FROM scripts WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(ScriptRecord::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<ScriptRecord>, RepositoryError> {
        let rows: Vec<ScriptRow> = sqlx::query_as(
            "SELECT id, name, content, tags, status, created_at, updated_at FROM scripts ORDER BY updated_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(ScriptRecord::try_from).collect()
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM scripts WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

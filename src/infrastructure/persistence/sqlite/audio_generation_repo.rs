//! SQLite Audio Generation Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::DbPool;
use crate::application::ports::{
    AudioGenerationRecord, AudioGenerationRepositoryPort, RepositoryError,
};

/// SQLite Audio Generation Repository
pub struct SqliteAudioGenerationRepository {
    pool: DbPool,
}

impl SqliteAudioGenerationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct AudioGenerationRow {
    id: String,
    script_id: String,
    file_url: String,
    file_size: Option<i64>,
    duration_ms: Option<i64>,
    voice_used: String,
    speed: f64,
    temperature: f64,
    model_used: String,
    created_at: String,
}

impl TryFrom<AudioGenerationRow> for AudioGenerationRecord {
    type Error = RepositoryError;

    fn try_from(row: AudioGenerationRow) -> Result<Self, Self::Error> {
        Ok(AudioGenerationRecord {
            id: Uuid::parse_str(&row.id)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            script_id: Uuid::parse_str(&row.script_id)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            file_url: row.file_url,
            file_size: row.file_size.map(|s| s as u64),
            duration_ms: row.duration_ms.map(|d| d as u32),
            voice_used: row.voice_used,
            speed: row.speed,
            temperature: row.temperature,
            model_used: row.model_used,
            created_at: DateTime::parse_from_rfc3339(&row.created_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
        })
    }
}

const SELECT_COLUMNS: &str = "id, script_id, file_url, file_size, duration_ms, voice_used, speed, temperature, model_used, created_at";

#[async_trait]
impl AudioGenerationRepositoryPort for SqliteAudioGenerationRepository {
    async fn save(&self, generation: &AudioGenerationRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO audio_generations
                (id, script_id, file_url, file_size, duration_ms, voice_used, speed, temperature, model_used, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(generation.id.to_string())
        .bind(generation.script_id.to_string())
        .bind(&generation.file_url)
        .bind(generation.file_size.map(|s| s as i64))
        .bind(generation.duration_ms.map(|d| d as i64))
        .bind(&generation.voice_used)
        .bind(generation.speed)
        .bind(generation.temperature)
        .bind(&generation.model_used)
        .bind(generation.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<AudioGenerationRecord>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM audio_generations WHERE id = ?",
            SELECT_COLUMNS
        );
        let row: Option<AudioGenerationRow> = sqlx::query_as(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(AudioGenerationRecord::try_from).transpose()
    }

    async fn find_by_script_id(
        &self,
        script_id: Uuid,
    ) -> Result<Vec<AudioGenerationRecord>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM audio_generations WHERE script_id = ? ORDER BY created_at DESC",
            SELECT_COLUMNS
        );
        let rows: Vec<AudioGenerationRow> = sqlx::query_as(&sql)
            .bind(script_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter()
            .map(AudioGenerationRecord::try_from)
            .collect()
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM audio_generations WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn delete_by_script_id(&self, script_id: Uuid) -> Result<usize, RepositoryError> {
        let result = sqlx::query("DELETE FROM audio_generations WHERE script_id = ?")
            .bind(script_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() as usize)
    }
}

//! Script Query Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    AudioGenerationRecord, AudioGenerationRepositoryPort, ScriptRecord, ScriptRepositoryPort,
};
use crate::application::queries::{GetScript, ListScripts};

// ============================================================================
// Response DTOs
// ============================================================================

/// 生成记录响应
#[derive(Debug, Clone)]
pub struct GenerationResponse {
    pub id: Uuid,
    pub file_url: String,
    pub file_size: Option<u64>,
    pub duration_ms: Option<u32>,
    pub voice_used: String,
    pub speed: f64,
    pub temperature: f64,
    pub model_used: String,
    pub created_at: String,
}

impl From<AudioGenerationRecord> for GenerationResponse {
    fn from(record: AudioGenerationRecord) -> Self {
        Self {
            id: record.id,
            file_url: record.file_url,
            file_size: record.file_size,
            duration_ms: record.duration_ms,
            voice_used: record.voice_used,
            speed: record.speed,
            temperature: record.temperature,
            model_used: record.model_used,
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

/// 脚本摘要响应（列表用，不含生成历史）
#[derive(Debug, Clone)]
pub struct ScriptSummaryResponse {
    pub id: Uuid,
    pub name: String,
    pub tags: Vec<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ScriptRecord> for ScriptSummaryResponse {
    fn from(record: ScriptRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            tags: record.tags,
            status: record.status.as_str().to_string(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

/// 脚本详情响应（含生成历史，最新在前）
#[derive(Debug, Clone)]
pub struct ScriptDetailResponse {
    pub id: Uuid,
    pub name: String,
    pub content: String,
    pub tags: Vec<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    pub generations: Vec<GenerationResponse>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GetScript Handler
pub struct GetScriptHandler {
    script_repo: Arc<dyn ScriptRepositoryPort>,
    generation_repo: Arc<dyn AudioGenerationRepositoryPort>,
}

impl GetScriptHandler {
    pub fn new(
        script_repo: Arc<dyn ScriptRepositoryPort>,
        generation_repo: Arc<dyn AudioGenerationRepositoryPort>,
    ) -> Self {
        Self {
            script_repo,
            generation_repo,
        }
    }

    pub async fn handle(&self, query: GetScript) -> Result<ScriptDetailResponse, ApplicationError> {
        let record = self
            .script_repo
            .find_by_id(query.script_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Script", query.script_id))?;

        let generations = self
            .generation_repo
            .find_by_script_id(query.script_id)
            .await?
            .into_iter()
            .map(GenerationResponse::from)
            .collect();

        Ok(ScriptDetailResponse {
            id: record.id,
            name: record.name,
            content: record.content,
            tags: record.tags,
            status: record.status.as_str().to_string(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
            generations,
        })
    }
}

/// ListScripts Handler
pub struct ListScriptsHandler {
    script_repo: Arc<dyn ScriptRepositoryPort>,
}

impl ListScriptsHandler {
    pub fn new(script_repo: Arc<dyn ScriptRepositoryPort>) -> Self {
        Self { script_repo }
    }

    pub async fn handle(
        &self,
        _query: ListScripts,
    ) -> Result<Vec<ScriptSummaryResponse>, ApplicationError> {
        let records = self.script_repo.find_all().await?;
        Ok(records.into_iter().map(ScriptSummaryResponse::from).collect())
    }
}

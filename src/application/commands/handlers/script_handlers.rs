//! Script Command Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{CreateScript, DeleteScript, UpdateScript};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    AudioGenerationRepositoryPort, AudioStoragePort, ScriptRecord, ScriptRepositoryPort,
};
use crate::domain::script::{Script, ScriptId, ScriptName, ScriptStatus, Tags};

/// 聚合 → 持久化记录
pub(crate) fn record_from_script(script: &Script) -> ScriptRecord {
    ScriptRecord {
        id: *script.id().as_uuid(),
        name: script.name().as_str().to_string(),
        content: script.content().to_string(),
        tags: script.tags().as_slice().to_vec(),
        status: script.status(),
        created_at: script.created_at(),
        updated_at: script.updated_at(),
    }
}

/// 持久化记录 → 聚合
pub(crate) fn script_from_record(record: ScriptRecord) -> Result<Script, ApplicationError> {
    let name = ScriptName::new(record.name)?;
    Ok(Script::restore(
        ScriptId::from_uuid(record.id),
        name,
        record.content,
        Tags::new(record.tags),
        record.status,
        record.created_at,
        record.updated_at,
    ))
}

// ============================================================================
// CreateScript
// ============================================================================

/// 创建脚本响应
#[derive(Debug, Clone)]
pub struct CreateScriptResponse {
    pub id: Uuid,
    pub name: String,
    pub status: ScriptStatus,
}

/// CreateScript Handler
pub struct CreateScriptHandler {
    script_repo: Arc<dyn ScriptRepositoryPort>,
}

impl CreateScriptHandler {
    pub fn new(script_repo: Arc<dyn ScriptRepositoryPort>) -> Self {
        Self { script_repo }
    }

    pub async fn handle(
        &self,
        command: CreateScript,
    ) -> Result<CreateScriptResponse, ApplicationError> {
        let name = ScriptName::new(command.name)?;
        let script = Script::new(name, command.content, Tags::new(command.tags));

        self.script_repo.save(&record_from_script(&script)).await?;

        tracing::info!(
            script_id = %script.id(),
            name = %script.name(),
            "Script created"
        );

        Ok(CreateScriptResponse {
            id: *script.id().as_uuid(),
            name: script.name().as_str().to_string(),
            status: script.status(),
        })
    }
}

// ============================================================================
// UpdateScript
// ============================================================================

/// 更新脚本响应
#[derive(Debug, Clone)]
pub struct UpdateScriptResponse {
    pub id: Uuid,
    pub status: ScriptStatus,
    pub updated_at: String,
}

/// UpdateScript Handler
pub struct UpdateScriptHandler {
    script_repo: Arc<dyn ScriptRepositoryPort>,
}

impl UpdateScriptHandler {
    pub fn new(script_repo: Arc<dyn ScriptRepositoryPort>) -> Self {
        Self { script_repo }
    }

    pub async fn handle(
        &self,
        command: UpdateScript,
    ) -> Result<UpdateScriptResponse, ApplicationError> {
        let record = self
            .script_repo
            .find_by_id(command.script_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Script", command.script_id))?;

        let mut script = script_from_record(record)?;

        if let Some(name) = command.name {
            script.rename(ScriptName::new(name)?);
        }
        if let Some(content) = command.content {
            script.update_content(content);
        }
        if let Some(tags) = command.tags {
            script.set_tags(Tags::new(tags));
        }
        if let Some(status) = command.status {
            let target = ScriptStatus::from_str(&status).ok_or_else(|| {
                ApplicationError::validation(format!("Unknown status: {}", status))
            })?;
            script.transition_to(target)?;
        }

        self.script_repo.save(&record_from_script(&script)).await?;

        tracing::info!(script_id = %script.id(), "Script updated");

        Ok(UpdateScriptResponse {
            id: *script.id().as_uuid(),
            status: script.status(),
            updated_at: script.updated_at().to_rfc3339(),
        })
    }
}

// ============================================================================
// DeleteScript
// ============================================================================

/// DeleteScript Handler
///
/// 级联删除脚本的所有生成记录和音频文件
pub struct DeleteScriptHandler {
    script_repo: Arc<dyn ScriptRepositoryPort>,
    generation_repo: Arc<dyn AudioGenerationRepositoryPort>,
    audio_storage: Arc<dyn AudioStoragePort>,
}

impl DeleteScriptHandler {
    pub fn new(
        script_repo: Arc<dyn ScriptRepositoryPort>,
        generation_repo: Arc<dyn AudioGenerationRepositoryPort>,
        audio_storage: Arc<dyn AudioStoragePort>,
    ) -> Self {
        Self {
            script_repo,
            generation_repo,
            audio_storage,
        }
    }

    pub async fn handle(&self, command: DeleteScript) -> Result<(), ApplicationError> {
        let script_id = command.script_id;

        self.script_repo
            .find_by_id(script_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Script", script_id))?;

        // 先删音频文件（失败只告警，不阻塞记录删除）
        let generations = self.generation_repo.find_by_script_id(script_id).await?;
        for generation in &generations {
            if let Err(e) = self.audio_storage.delete_audio(generation.id).await {
                tracing::warn!(
                    generation_id = %generation.id,
                    error = %e,
                    "Failed to delete audio file"
                );
            }
        }

        let deleted = self.generation_repo.delete_by_script_id(script_id).await?;
        self.script_repo.delete(script_id).await?;

        tracing::info!(
            script_id = %script_id,
            generations_deleted = deleted,
            "Script deleted"
        );

        Ok(())
    }
}

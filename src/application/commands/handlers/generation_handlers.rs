//! Generation Command Handlers
//!
//! 音频生成的调度与编排：校验 → 合成 → 下载 → 落盘 → 入库
//!
//! 整个流程严格串行，任一步骤失败即中止，不提交部分状态。
//! 每脚本的在途生成由 GenerationGuard 串行化（不排队，直接拒绝）。

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{DeleteGenerationCommand, GenerateAudioCommand};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    AudioFetcherPort, AudioGenerationRecord, AudioGenerationRepositoryPort, AudioStoragePort,
    GenerationGuardPort, ScriptRepositoryPort, TtsEnginePort,
};
use crate::domain::generation::GenerationParams;

// ============================================================================
// GenerateAudio
// ============================================================================

/// 生成音频响应
#[derive(Debug, Clone)]
pub struct GenerateAudioResponse {
    pub generation_id: Uuid,
    pub script_id: Uuid,
    /// 本服务托管的音频 URL（/api/audio/{generation_id}）
    pub audio_url: String,
    pub file_size: u64,
    pub voice_used: String,
    pub speed: f64,
    pub temperature: f64,
    pub model_used: String,
    pub created_at: String,
}

/// GenerateAudio Handler
pub struct GenerateAudioHandler {
    script_repo: Arc<dyn ScriptRepositoryPort>,
    generation_repo: Arc<dyn AudioGenerationRepositoryPort>,
    tts_engine: Arc<dyn TtsEnginePort>,
    audio_fetcher: Arc<dyn AudioFetcherPort>,
    audio_storage: Arc<dyn AudioStoragePort>,
    guard: Arc<dyn GenerationGuardPort>,
    /// 对外 Base URL，用于拼接生成记录的 file_url
    public_base_url: String,
}

impl GenerateAudioHandler {
    pub fn new(
        script_repo: Arc<dyn ScriptRepositoryPort>,
        generation_repo: Arc<dyn AudioGenerationRepositoryPort>,
        tts_engine: Arc<dyn TtsEnginePort>,
        audio_fetcher: Arc<dyn AudioFetcherPort>,
        audio_storage: Arc<dyn AudioStoragePort>,
        guard: Arc<dyn GenerationGuardPort>,
        public_base_url: String,
    ) -> Self {
        Self {
            script_repo,
            generation_repo,
            tts_engine,
            audio_fetcher,
            audio_storage,
            guard,
            public_base_url,
        }
    }

    pub async fn handle(
        &self,
        command: GenerateAudioCommand,
    ) -> Result<GenerateAudioResponse, ApplicationError> {
        let script_id = command.script_id;

        // 脚本必须存在
        self.script_repo
            .find_by_id(script_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Script", script_id))?;

        // 同一脚本同一时刻只允许一次在途生成
        if !self.guard.try_begin(script_id) {
            return Err(ApplicationError::conflict(
                "Generation already in progress",
            ));
        }

        let result = self.run(script_id, command).await;

        // 无论成败都释放生成锁
        self.guard.end(script_id);

        result
    }

    /// 实际执行序列（guard 已持有）
    async fn run(
        &self,
        script_id: Uuid,
        command: GenerateAudioCommand,
    ) -> Result<GenerateAudioResponse, ApplicationError> {
        // 1. 校验参数（文本 → 模型 → 语速 → 温度）
        let params = GenerationParams::new(
            &command.text,
            command.voice,
            command.speed,
            command.temperature,
            command.model.as_deref(),
        )?;

        tracing::info!(
            script_id = %script_id,
            model = %params.model(),
            voice = %params.voice(),
            speed = params.speed().value(),
            temperature = params.temperature().value(),
            text_len = params.text().len(),
            "Audio generation started"
        );

        // 2. 调度到提供方，取回音频 URL
        let output = self.tts_engine.synthesize(&params).await?;

        // 3. 下载音频字节
        let audio_data = self.audio_fetcher.fetch(&output.audio_url).await?;

        // 4. 落盘
        let generation_id = Uuid::new_v4();
        self.audio_storage
            .save_audio(generation_id, &audio_data)
            .await?;

        // 5. 写入生成记录；失败则回滚已落盘的文件
        let record = AudioGenerationRecord {
            id: generation_id,
            script_id,
            file_url: format!("{}/api/audio/{}", self.public_base_url, generation_id),
            file_size: Some(audio_data.len() as u64),
            duration_ms: None,
            voice_used: params.voice().to_string(),
            speed: params.speed().value(),
            temperature: params.temperature().value(),
            model_used: params.model().identifier().to_string(),
            created_at: Utc::now(),
        };

        if let Err(e) = self.generation_repo.save(&record).await {
            if let Err(cleanup_err) = self.audio_storage.delete_audio(generation_id).await {
                tracing::warn!(
                    generation_id = %generation_id,
                    error = %cleanup_err,
                    "Failed to clean up audio file after save failure"
                );
            }
            return Err(e.into());
        }

        tracing::info!(
            script_id = %script_id,
            generation_id = %generation_id,
            file_size = audio_data.len(),
            "Audio generation completed"
        );

        Ok(GenerateAudioResponse {
            generation_id,
            script_id,
            audio_url: record.file_url,
            file_size: audio_data.len() as u64,
            voice_used: record.voice_used,
            speed: record.speed,
            temperature: record.temperature,
            model_used: record.model_used,
            created_at: record.created_at.to_rfc3339(),
        })
    }
}

// ============================================================================
// DeleteGeneration
// ============================================================================

/// DeleteGeneration Handler
pub struct DeleteGenerationHandler {
    generation_repo: Arc<dyn AudioGenerationRepositoryPort>,
    audio_storage: Arc<dyn AudioStoragePort>,
}

impl DeleteGenerationHandler {
    pub fn new(
        generation_repo: Arc<dyn AudioGenerationRepositoryPort>,
        audio_storage: Arc<dyn AudioStoragePort>,
    ) -> Self {
        Self {
            generation_repo,
            audio_storage,
        }
    }

    pub async fn handle(&self, command: DeleteGenerationCommand) -> Result<(), ApplicationError> {
        let generation_id = command.generation_id;

        self.generation_repo
            .find_by_id(generation_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Generation", generation_id))?;

        if let Err(e) = self.audio_storage.delete_audio(generation_id).await {
            tracing::warn!(
                generation_id = %generation_id,
                error = %e,
                "Failed to delete audio file"
            );
        }

        self.generation_repo.delete(generation_id).await?;

        tracing::info!(generation_id = %generation_id, "Generation deleted");

        Ok(())
    }
}

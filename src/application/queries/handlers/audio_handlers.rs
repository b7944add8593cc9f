//! Audio Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    AudioGenerationRepositoryPort, AudioStorageError, AudioStoragePort,
};
use crate::application::queries::handlers::GenerationResponse;
use crate::application::queries::{GetAudioQuery, ListGenerations};

/// 音频字节响应
#[derive(Debug, Clone)]
pub struct GetAudioResponse {
    pub data: Vec<u8>,
}

/// GetAudio Handler
///
/// 先确认生成记录存在，再从存储取字节
pub struct GetAudioHandler {
    generation_repo: Arc<dyn AudioGenerationRepositoryPort>,
    audio_storage: Arc<dyn AudioStoragePort>,
}

impl GetAudioHandler {
    pub fn new(
        generation_repo: Arc<dyn AudioGenerationRepositoryPort>,
        audio_storage: Arc<dyn AudioStoragePort>,
    ) -> Self {
        Self {
            generation_repo,
            audio_storage,
        }
    }

    pub async fn handle(&self, query: GetAudioQuery) -> Result<GetAudioResponse, ApplicationError> {
        let generation_id = query.generation_id;

        self.generation_repo
            .find_by_id(generation_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Generation", generation_id))?;

        let data = self
            .audio_storage
            .read_audio(generation_id)
            .await
            .map_err(|e| match e {
                AudioStorageError::FileNotFound(_) => {
                    ApplicationError::not_found("Audio file", generation_id)
                }
                other => other.into(),
            })?;

        Ok(GetAudioResponse { data })
    }
}

/// ListGenerations Handler
pub struct ListGenerationsHandler {
    generation_repo: Arc<dyn AudioGenerationRepositoryPort>,
}

impl ListGenerationsHandler {
    pub fn new(generation_repo: Arc<dyn AudioGenerationRepositoryPort>) -> Self {
        Self { generation_repo }
    }

    pub async fn handle(
        &self,
        query: ListGenerations,
    ) -> Result<Vec<GenerationResponse>, ApplicationError> {
        let records = self
            .generation_repo
            .find_by_script_id(query.script_id)
            .await?;
        Ok(records.into_iter().map(GenerationResponse::from).collect())
    }
}

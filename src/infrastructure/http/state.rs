//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateScriptHandler, DeleteGenerationHandler, DeleteScriptHandler, GenerateAudioHandler,
    UpdateScriptHandler,
    // Query handlers
    GetAudioHandler, GetScriptHandler, ListGenerationsHandler, ListScriptsHandler,
    // Ports
    AudioFetcherPort, AudioGenerationRepositoryPort, AudioStoragePort, GenerationGuardPort,
    ScriptRepositoryPort, TtsEnginePort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub script_repo: Arc<dyn ScriptRepositoryPort>,
    pub generation_repo: Arc<dyn AudioGenerationRepositoryPort>,
    pub tts_engine: Arc<dyn TtsEnginePort>,
    pub audio_fetcher: Arc<dyn AudioFetcherPort>,
    pub audio_storage: Arc<dyn AudioStoragePort>,
    pub generation_guard: Arc<dyn GenerationGuardPort>,

    // ========== Command Handlers ==========
    pub create_script_handler: CreateScriptHandler,
    pub update_script_handler: UpdateScriptHandler,
    pub delete_script_handler: DeleteScriptHandler,
    pub generate_audio_handler: GenerateAudioHandler,
    pub delete_generation_handler: DeleteGenerationHandler,

    // ========== Query Handlers ==========
    pub get_script_handler: GetScriptHandler,
    pub list_scripts_handler: ListScriptsHandler,
    pub get_audio_handler: GetAudioHandler,
    pub list_generations_handler: ListGenerationsHandler,
}

impl AppState {
    /// 创建应用状态
    ///
    /// public_base_url 用于拼接生成记录对外的 file_url
    pub fn new(
        script_repo: Arc<dyn ScriptRepositoryPort>,
        generation_repo: Arc<dyn AudioGenerationRepositoryPort>,
        tts_engine: Arc<dyn TtsEnginePort>,
        audio_fetcher: Arc<dyn AudioFetcherPort>,
        audio_storage: Arc<dyn AudioStoragePort>,
        generation_guard: Arc<dyn GenerationGuardPort>,
        public_base_url: String,
    ) -> Self {
        Self {
            // Ports
            script_repo: script_repo.clone(),
            generation_repo: generation_repo.clone(),
            tts_engine: tts_engine.clone(),
            audio_fetcher: audio_fetcher.clone(),
            audio_storage: audio_storage.clone(),
            generation_guard: generation_guard.clone(),

            // Command handlers
            create_script_handler: CreateScriptHandler::new(script_repo.clone()),
            update_script_handler: UpdateScriptHandler::new(script_repo.clone()),
            delete_script_handler: DeleteScriptHandler::new(
                script_repo.clone(),
                generation_repo.clone(),
                audio_storage.clone(),
            ),
            generate_audio_handler: GenerateAudioHandler::new(
                script_repo.clone(),
                generation_repo.clone(),
                tts_engine.clone(),
                audio_fetcher.clone(),
                audio_storage.clone(),
                generation_guard.clone(),
                public_base_url,
            ),
            delete_generation_handler: DeleteGenerationHandler::new(
                generation_repo.clone(),
                audio_storage.clone(),
            ),

            // Query handlers
            get_script_handler: GetScriptHandler::new(script_repo.clone(), generation_repo.clone()),
            list_scripts_handler: ListScriptsHandler::new(script_repo.clone()),
            get_audio_handler: GetAudioHandler::new(generation_repo.clone(), audio_storage.clone()),
            list_generations_handler: ListGenerationsHandler::new(generation_repo.clone()),
        }
    }
}

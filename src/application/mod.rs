//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TtsEngine、Repository、AudioFetcher、AudioStorage、GenerationGuard）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Generation commands
    DeleteGenerationCommand,
    GenerateAudioCommand,
    // Script commands
    CreateScript,
    DeleteScript,
    UpdateScript,
    // Handlers
    handlers::{
        CreateScriptHandler, CreateScriptResponse, DeleteGenerationHandler, DeleteScriptHandler,
        GenerateAudioHandler, GenerateAudioResponse, UpdateScriptHandler, UpdateScriptResponse,
    },
};

pub use error::ApplicationError;

pub use ports::{
    // Audio fetcher
    AudioFetcherPort,
    FetchError,
    // Audio storage
    AudioStorageError,
    AudioStoragePort,
    // Generation guard
    GenerationGuardPort,
    // Repositories
    AudioGenerationRecord,
    AudioGenerationRepositoryPort,
    RepositoryError,
    ScriptRecord,
    ScriptRepositoryPort,
    // TTS engine
    SynthesisOutput,
    TtsEnginePort,
    TtsError,
};

pub use queries::{
    // Audio queries
    GetAudioQuery,
    ListGenerations,
    // Script queries
    GetScript,
    ListScripts,
    // Handlers
    handlers::{
        GenerationResponse, GetAudioHandler, GetAudioResponse, GetScriptHandler,
        ListGenerationsHandler, ListScriptsHandler, ScriptDetailResponse, ScriptSummaryResponse,
    },
};

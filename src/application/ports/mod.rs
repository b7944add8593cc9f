//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_fetcher;
mod audio_storage;
mod generation_guard;
mod repositories;
mod tts_engine;

pub use audio_fetcher::{AudioFetcherPort, FetchError};
pub use audio_storage::{AudioStorageError, AudioStoragePort};
pub use generation_guard::GenerationGuardPort;
pub use repositories::{
    AudioGenerationRecord, AudioGenerationRepositoryPort, RepositoryError, ScriptRecord,
    ScriptRepositoryPort,
};
pub use tts_engine::{SynthesisOutput, TtsEnginePort, TtsError};

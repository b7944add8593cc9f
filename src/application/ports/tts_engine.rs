//! TTS Engine Port - TTS 合成引擎抽象
//!
//! 定义对外部 TTS 提供方的抽象接口，具体实现在 infrastructure/adapters 层
//!
//! 合同：接收一组已校验的生成参数，返回一个音频 URL 或结构化错误。
//! 不做重试、不做退避、不做批处理。

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::generation::GenerationParams;

/// TTS 引擎错误
#[derive(Debug, Error)]
pub enum TtsError {
    /// 提供方凭证未配置（运维可纠正，500 级）
    #[error("Replicate API token not configured")]
    MissingToken,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    /// 提供方返回的错误，原样透传给调用方
    #[error("{0}")]
    ProviderError(String),

    /// 提供方输出为空或不是字符串 URL
    #[error("Failed to generate audio")]
    EmptyOutput,
}

/// TTS 合成输出
///
/// 临时对象：仅携带提供方产出的音频 URL，调度器自身不持久化
#[derive(Debug, Clone)]
pub struct SynthesisOutput {
    /// 提供方托管的音频文件 URL
    pub audio_url: String,
}

/// TTS Engine Port
///
/// 外部 TTS 提供方的抽象接口
#[async_trait]
pub trait TtsEnginePort: Send + Sync {
    /// 执行一次 TTS 合成
    ///
    /// 参数已通过领域层校验；实现负责把通用参数映射为
    /// 各模型的专有参数集并发起一次外呼
    async fn synthesize(&self, params: &GenerationParams) -> Result<SynthesisOutput, TtsError>;
}

//! Audio Fetcher Port - 音频字节下载抽象
//!
//! 合成成功后，从提供方返回的 URL 取回原始音频字节。
//! 该步骤失败时整次生成中止，不提交任何部分状态。

use async_trait::async_trait;
use thiserror::Error;

/// 音频下载错误
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Failed to fetch generated audio: HTTP {0}")]
    HttpStatus(u16),

    #[error("Failed to read audio body: {0}")]
    BodyError(String),
}

/// Audio Fetcher Port
#[async_trait]
pub trait AudioFetcherPort: Send + Sync {
    /// 下载 URL 指向的音频字节
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

//! HTTP Audio Fetcher - 下载提供方产出的音频字节
//!
//! 实现 AudioFetcherPort trait
//!
//! 合成成功后提供方只返回一个临时 URL，字节需要单独取回。
//! 单次 GET，失败即中止，不重试。

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{AudioFetcherPort, FetchError};

/// HTTP 音频下载器配置
#[derive(Debug, Clone)]
pub struct HttpAudioFetcherConfig {
    /// 下载超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpAudioFetcherConfig {
    fn default() -> Self {
        Self { timeout_secs: 120 }
    }
}

/// HTTP 音频下载器
pub struct HttpAudioFetcher {
    client: Client,
}

impl HttpAudioFetcher {
    /// 创建新的下载器
    pub fn new(config: HttpAudioFetcherConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::NetworkError(e.to_string()))?;

        Ok(Self { client })
    }

    /// 使用默认配置创建
    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(HttpAudioFetcherConfig::default())
    }
}

#[async_trait]
impl AudioFetcherPort for HttpAudioFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        tracing::debug!(url = %url, "Fetching generated audio");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let data = response
            .bytes()
            .await
            .map_err(|e| FetchError::BodyError(e.to_string()))?
            .to_vec();

        tracing::debug!(url = %url, size = data.len(), "Audio fetched");

        Ok(data)
    }
}

//! Fake TTS Client - 用于测试的 TTS 客户端
//!
//! 始终返回固定的音频 URL，不实际调用 Replicate

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{SynthesisOutput, TtsEnginePort, TtsError};
use crate::domain::generation::GenerationParams;

/// Fake TTS Client 配置
#[derive(Debug, Clone)]
pub struct FakeTtsClientConfig {
    /// 固定返回的音频 URL
    pub audio_url: String,
    /// 模拟的合成延迟（毫秒）
    pub latency_ms: u64,
}

impl Default for FakeTtsClientConfig {
    fn default() -> Self {
        Self {
            audio_url: "https://replicate.delivery/fake/output.wav".to_string(),
            latency_ms: 0,
        }
    }
}

/// Fake TTS Client
///
/// 用于测试，始终返回配置的固定 URL，并记录调用次数
pub struct FakeTtsClient {
    config: FakeTtsClientConfig,
    calls: AtomicUsize,
}

impl FakeTtsClient {
    /// 创建新的 FakeTtsClient
    pub fn new(config: FakeTtsClientConfig) -> Self {
        Self {
            config,
            calls: AtomicUsize::new(0),
        }
    }

    /// 使用默认配置创建
    pub fn with_defaults() -> Self {
        Self::new(FakeTtsClientConfig::default())
    }

    /// 已处理的合成请求数
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TtsEnginePort for FakeTtsClient {
    async fn synthesize(&self, params: &GenerationParams) -> Result<SynthesisOutput, TtsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        tracing::debug!(
            text_len = params.text().len(),
            model = %params.model(),
            voice = %params.voice(),
            "FakeTtsClient: returning fixed audio URL"
        );

        if self.config.latency_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(self.config.latency_ms)).await;
        }

        Ok(SynthesisOutput {
            audio_url: self.config.audio_url.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_client_counts_calls() {
        let client = FakeTtsClient::with_defaults();
        let params = GenerationParams::new("Hello", None, None, None, None).unwrap();

        assert_eq!(client.call_count(), 0);
        let output = client.synthesize(&params).await.unwrap();
        assert_eq!(output.audio_url, "https://replicate.delivery/fake/output.wav");
        assert_eq!(client.call_count(), 1);
    }
}

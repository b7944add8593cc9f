//! Replicate TTS Client - 调用 Replicate 托管的 TTS 模型
//!
//! 实现 TtsEnginePort trait，通过 Replicate predictions API 完成合成
//!
//! 外部 API:
//! POST {base_url}/v1/predictions                      （锁定版本的模型）
//! POST {base_url}/v1/models/{owner}/{name}/predictions（最新版本的模型）
//! Header: Prefer: wait  —— 单次阻塞调用，无轮询、无重试
//! Response: JSON，output 为音频文件 URL

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{SynthesisOutput, TtsEnginePort, TtsError};
use crate::domain::generation::{GenerationParams, TtsModel};

// ============================================================================
// 每模型的输入参数集（通用参数 → 提供方专有字段的静态映射）
// ============================================================================

#[derive(Debug, Serialize)]
struct KokoroInput<'a> {
    text: &'a str,
    voice: &'a str,
    speed: f64,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct MinimaxInput<'a> {
    text: &'a str,
    voice: &'a str,
    speed: f64,
}

/// Orpheus 没有 temperature 参数，温度映射为情绪强度
#[derive(Debug, Serialize)]
struct OrpheusInput<'a> {
    text: &'a str,
    voice: &'a str,
    emotion_level: f64,
}

#[derive(Debug, Serialize)]
struct F5Input<'a> {
    text: &'a str,
    voice: &'a str,
}

/// Prediction 请求体
///
/// 锁定版本的模型走 /v1/predictions 并携带 version 字段；
/// 其余模型走 /v1/models/{model}/predictions，只带 input
#[derive(Debug, Serialize)]
struct PredictionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'static str>,
    input: serde_json::Value,
}

/// 构建一次 prediction 调用：请求路径 + 请求体
///
/// 每个模型变体携带自己的强类型输入结构，select 由枚举完成，
/// 不存在未识别标识符的落空分支
fn build_prediction(params: &GenerationParams) -> (String, PredictionRequest) {
    let input = match params.model() {
        TtsModel::Kokoro => serde_json::to_value(KokoroInput {
            text: params.text(),
            voice: params.voice(),
            speed: params.speed().value(),
            temperature: params.temperature().value(),
        }),
        TtsModel::MinimaxSpeech02Hd => serde_json::to_value(MinimaxInput {
            text: params.text(),
            voice: params.voice(),
            speed: params.speed().value(),
        }),
        TtsModel::Orpheus3b => serde_json::to_value(OrpheusInput {
            text: params.text(),
            voice: params.voice(),
            emotion_level: params.temperature().value(),
        }),
        TtsModel::F5Tts => serde_json::to_value(F5Input {
            text: params.text(),
            voice: params.voice(),
        }),
    }
    // 以上结构只含字符串与浮点字段，序列化不会失败
    .unwrap_or(serde_json::Value::Null);

    match params.model().pinned_version() {
        Some(version) => (
            "/v1/predictions".to_string(),
            PredictionRequest {
                version: Some(version),
                input,
            },
        ),
        None => (
            format!("/v1/models/{}/predictions", params.model().identifier()),
            PredictionRequest {
                version: None,
                input,
            },
        ),
    }
}

// ============================================================================
// Replicate 响应
// ============================================================================

#[derive(Debug, Deserialize)]
struct PredictionResponse {
    status: String,
    #[serde(default)]
    output: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

/// 从 prediction output 提取音频 URL
///
/// output 必须是字符串，或首元素为字符串的数组（部分模型返回数组）；
/// 其余形态一律视为生成失败
fn extract_audio_url(output: Option<&serde_json::Value>) -> Result<String, TtsError> {
    let url = match output {
        Some(serde_json::Value::String(url)) => Some(url.clone()),
        Some(serde_json::Value::Array(items)) => items
            .first()
            .and_then(|v| v.as_str())
            .map(|s| s.to_string()),
        _ => None,
    };

    match url {
        Some(url) if !url.is_empty() => Ok(url),
        _ => Err(TtsError::EmptyOutput),
    }
}

// ============================================================================
// Client
// ============================================================================

/// Replicate TTS 客户端配置
#[derive(Debug, Clone)]
pub struct ReplicateTtsClientConfig {
    /// API Token（缺失时每次合成返回配置错误）
    pub api_token: Option<String>,
    /// API 基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for ReplicateTtsClientConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            base_url: "https://api.replicate.com".to_string(),
            timeout_secs: 300,
        }
    }
}

/// Replicate TTS 客户端
pub struct ReplicateTtsClient {
    client: Client,
    config: ReplicateTtsClientConfig,
}

impl ReplicateTtsClient {
    /// 创建新的 Replicate 客户端
    pub fn new(config: ReplicateTtsClientConfig) -> Result<Self, TtsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl TtsEnginePort for ReplicateTtsClient {
    async fn synthesize(&self, params: &GenerationParams) -> Result<SynthesisOutput, TtsError> {
        // 凭证检查先于任何外呼
        let token = self
            .config
            .api_token
            .as_deref()
            .ok_or(TtsError::MissingToken)?;

        let (path, body) = build_prediction(params);
        let url = format!("{}{}", self.config.base_url, path);

        tracing::debug!(
            url = %url,
            model = %params.model(),
            text_len = params.text().len(),
            "Sending Replicate prediction request"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .header("Prefer", "wait")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TtsError::Timeout
                } else if e.is_connect() {
                    TtsError::NetworkError(format!("Cannot connect to Replicate: {}", e))
                } else {
                    TtsError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TtsError::ProviderError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let prediction: PredictionResponse = response
            .json()
            .await
            .map_err(|e| TtsError::ProviderError(format!("Invalid Replicate response: {}", e)))?;

        // 提供方报告的失败原样透传
        if let Some(error) = prediction.error {
            return Err(TtsError::ProviderError(error));
        }
        if prediction.status == "failed" || prediction.status == "canceled" {
            return Err(TtsError::ProviderError(format!(
                "Prediction {}",
                prediction.status
            )));
        }

        let audio_url = extract_audio_url(prediction.output.as_ref())?;

        tracing::info!(
            model = %params.model(),
            audio_url = %audio_url,
            "Replicate synthesis completed"
        );

        Ok(SynthesisOutput { audio_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(model: &str) -> GenerationParams {
        GenerationParams::new(
            "Hello",
            Some("test_voice".to_string()),
            Some(1.5),
            Some(0.7),
            Some(model),
        )
        .unwrap()
    }

    #[test]
    fn test_kokoro_request_is_version_pinned() {
        let (path, body) = build_prediction(&params("jaaari/kokoro-82m"));
        assert_eq!(path, "/v1/predictions");
        assert_eq!(body.version, Some(TtsModel::KOKORO_VERSION));
        assert_eq!(body.input["text"], "Hello");
        assert_eq!(body.input["voice"], "test_voice");
        assert_eq!(body.input["speed"], 1.5);
        assert_eq!(body.input["temperature"], 0.7);
    }

    #[test]
    fn test_minimax_request_omits_temperature() {
        let (path, body) = build_prediction(&params("minimax/speech-02-hd"));
        assert_eq!(path, "/v1/models/minimax/speech-02-hd/predictions");
        assert!(body.version.is_none());
        assert_eq!(body.input["speed"], 1.5);
        assert!(body.input.get("temperature").is_none());
        assert!(body.input.get("emotion_level").is_none());
    }

    #[test]
    fn test_orpheus_maps_temperature_to_emotion_level() {
        let (path, body) = build_prediction(&params("lucataco/orpheus-3b-0.1-ft"));
        assert_eq!(path, "/v1/models/lucataco/orpheus-3b-0.1-ft/predictions");
        assert_eq!(body.input["emotion_level"], 0.7);
        assert!(body.input.get("temperature").is_none());
        assert!(body.input.get("speed").is_none());
    }

    #[test]
    fn test_f5_request_carries_only_text_and_voice() {
        let (path, body) = build_prediction(&params("x-lance/f5-tts"));
        assert_eq!(path, "/v1/models/x-lance/f5-tts/predictions");
        assert_eq!(body.input["text"], "Hello");
        assert_eq!(body.input["voice"], "test_voice");
        assert!(body.input.get("speed").is_none());
        assert!(body.input.get("emotion_level").is_none());
    }

    #[test]
    fn test_version_field_skipped_when_absent() {
        let (_, body) = build_prediction(&params("x-lance/f5-tts"));
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("version").is_none());
    }

    #[test]
    fn test_extract_url_from_string_output() {
        let output = serde_json::json!("https://replicate.delivery/out.wav");
        assert_eq!(
            extract_audio_url(Some(&output)).unwrap(),
            "https://replicate.delivery/out.wav"
        );
    }

    #[test]
    fn test_extract_url_from_array_output() {
        let output = serde_json::json!(["https://replicate.delivery/out.wav"]);
        assert_eq!(
            extract_audio_url(Some(&output)).unwrap(),
            "https://replicate.delivery/out.wav"
        );
    }

    #[test]
    fn test_extract_url_rejects_non_string_output() {
        assert!(matches!(
            extract_audio_url(None),
            Err(TtsError::EmptyOutput)
        ));
        let number = serde_json::json!(42);
        assert!(matches!(
            extract_audio_url(Some(&number)),
            Err(TtsError::EmptyOutput)
        ));
        let empty = serde_json::json!("");
        assert!(matches!(
            extract_audio_url(Some(&empty)),
            Err(TtsError::EmptyOutput)
        ));
    }

    #[tokio::test]
    async fn test_missing_token_fails_without_network_call() {
        // base_url 指向不存在的地址：凭证检查必须先于任何外呼
        let client = ReplicateTtsClient::new(ReplicateTtsClientConfig {
            api_token: None,
            base_url: "http://127.0.0.1:1".to_string(),
            timeout_secs: 1,
        })
        .unwrap();

        let err = client
            .synthesize(&params("jaaari/kokoro-82m"))
            .await
            .unwrap_err();
        assert!(matches!(err, TtsError::MissingToken));
        assert_eq!(err.to_string(), "Replicate API token not configured");
    }
}

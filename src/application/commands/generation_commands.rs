//! Generation Commands

use uuid::Uuid;

/// 生成音频
///
/// 可选字段缺省时采用固定默认值:
/// speed=1.0, voice=af_nicole, temperature=0.7, model=jaaari/kokoro-82m
#[derive(Debug, Clone)]
pub struct GenerateAudioCommand {
    pub script_id: Uuid,
    pub text: String,
    pub voice: Option<String>,
    pub speed: Option<f64>,
    pub temperature: Option<f64>,
    pub model: Option<String>,
}

/// 删除单条生成记录（记录 + 音频文件）
#[derive(Debug, Clone)]
pub struct DeleteGenerationCommand {
    pub generation_id: Uuid,
}

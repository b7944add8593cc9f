//! Audio Queries

use uuid::Uuid;

/// 读取一条生成记录的音频字节
#[derive(Debug, Clone)]
pub struct GetAudioQuery {
    pub generation_id: Uuid,
}

/// 列出脚本的生成历史（最新在前）
#[derive(Debug, Clone)]
pub struct ListGenerations {
    pub script_id: Uuid,
}

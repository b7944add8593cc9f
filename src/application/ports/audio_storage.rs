//! Audio Storage Port - 音频文件存储抽象
//!
//! 每条生成记录对应一个音频文件，以生成 ID 为键

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// 存储错误
#[derive(Debug, Error)]
pub enum AudioStorageError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Audio Storage Port
#[async_trait]
pub trait AudioStoragePort: Send + Sync {
    /// 生成记录对应的文件路径
    fn audio_path(&self, generation_id: Uuid) -> PathBuf;

    /// 保存音频字节，返回写入路径
    async fn save_audio(
        &self,
        generation_id: Uuid,
        data: &[u8],
    ) -> Result<PathBuf, AudioStorageError>;

    /// 读取音频字节
    async fn read_audio(&self, generation_id: Uuid) -> Result<Vec<u8>, AudioStorageError>;

    /// 删除音频文件（不存在时静默成功）
    async fn delete_audio(&self, generation_id: Uuid) -> Result<(), AudioStorageError>;

    /// 文件是否存在
    async fn audio_exists(&self, generation_id: Uuid) -> bool;
}

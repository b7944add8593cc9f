//! File Storage - 文件系统音频存储实现
//!
//! 实现 AudioStoragePort trait
//!
//! 每条生成记录对应一个 {generation_id}.wav 文件

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use crate::application::ports::{AudioStorageError, AudioStoragePort};

/// 文件系统音频存储
pub struct FileAudioStorage {
    /// 存储根目录
    base_dir: PathBuf,
}

impl FileAudioStorage {
    /// 创建新的文件存储
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self, AudioStorageError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        // 确保目录存在
        fs::create_dir_all(&base_dir)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

        Ok(Self { base_dir })
    }

    /// 获取存储根目录
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

#[async_trait]
impl AudioStoragePort for FileAudioStorage {
    fn audio_path(&self, generation_id: Uuid) -> PathBuf {
        self.base_dir.join(format!("{}.wav", generation_id))
    }

    async fn save_audio(
        &self,
        generation_id: Uuid,
        data: &[u8],
    ) -> Result<PathBuf, AudioStorageError> {
        let audio_path = self.audio_path(generation_id);

        fs::write(&audio_path, data)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

        tracing::debug!(
            "Saved audio: generation={}, size={} bytes",
            generation_id,
            data.len()
        );

        Ok(audio_path)
    }

    async fn read_audio(&self, generation_id: Uuid) -> Result<Vec<u8>, AudioStorageError> {
        let audio_path = self.audio_path(generation_id);

        if !audio_path.exists() {
            return Err(AudioStorageError::FileNotFound(
                audio_path.to_string_lossy().to_string(),
            ));
        }

        fs::read(&audio_path)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))
    }

    async fn delete_audio(&self, generation_id: Uuid) -> Result<(), AudioStorageError> {
        let audio_path = self.audio_path(generation_id);

        if audio_path.exists() {
            fs::remove_file(&audio_path)
                .await
                .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

            tracing::debug!("Deleted audio: generation={}", generation_id);
        }

        Ok(())
    }

    async fn audio_exists(&self, generation_id: Uuid) -> bool {
        self.audio_path(generation_id).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_read_delete_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileAudioStorage::new(dir.path()).await.unwrap();
        let id = Uuid::new_v4();

        let path = storage.save_audio(id, b"RIFFdata").await.unwrap();
        assert!(path.ends_with(format!("{}.wav", id)));
        assert!(storage.audio_exists(id).await);

        let data = storage.read_audio(id).await.unwrap();
        assert_eq!(data, b"RIFFdata");

        storage.delete_audio(id).await.unwrap();
        assert!(!storage.audio_exists(id).await);
    }

    #[tokio::test]
    async fn test_read_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileAudioStorage::new(dir.path()).await.unwrap();

        let err = storage.read_audio(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AudioStorageError::FileNotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_file_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileAudioStorage::new(dir.path()).await.unwrap();

        assert!(storage.delete_audio(Uuid::new_v4()).await.is_ok());
    }
}

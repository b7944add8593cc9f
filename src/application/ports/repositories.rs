//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::script::ScriptStatus;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Script Repository
// ============================================================================

/// 脚本实体（用于持久化）
#[derive(Debug, Clone)]
pub struct ScriptRecord {
    pub id: Uuid,
    pub name: String,
    pub content: String,
    pub tags: Vec<String>,
    pub status: ScriptStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Script Repository Port
#[async_trait]
pub trait ScriptRepositoryPort: Send + Sync {
    /// 保存脚本（存在则更新）
    async fn save(&self, script: &ScriptRecord) -> Result<(), RepositoryError>;

    /// 根据 ID 查找脚本
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ScriptRecord>, RepositoryError>;

    /// 获取所有脚本（按 updated_at 倒序）
    async fn find_all(&self) -> Result<Vec<ScriptRecord>, RepositoryError>;

    /// 删除脚本（级联删除其生成记录）
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

// ============================================================================
// Audio Generation Repository
// ============================================================================

/// 音频生成记录（用于持久化）
///
/// 一次成功的 TTS 往返产生一条记录；duration_ms 目前不填充
/// （不做音频解码，与原始应用一致）
#[derive(Debug, Clone)]
pub struct AudioGenerationRecord {
    pub id: Uuid,
    pub script_id: Uuid,
    pub file_url: String,
    pub file_size: Option<u64>,
    pub duration_ms: Option<u32>,
    pub voice_used: String,
    pub speed: f64,
    pub temperature: f64,
    pub model_used: String,
    pub created_at: DateTime<Utc>,
}

/// Audio Generation Repository Port
#[async_trait]
pub trait AudioGenerationRepositoryPort: Send + Sync {
    /// 保存生成记录
    async fn save(&self, generation: &AudioGenerationRecord) -> Result<(), RepositoryError>;

    /// 根据 ID 查找生成记录
    async fn find_by_id(&self, id: Uuid)
        -> Result<Option<AudioGenerationRecord>, RepositoryError>;

    /// 获取脚本的所有生成记录（按 created_at 倒序，最新在前）
    async fn find_by_script_id(
        &self,
        script_id: Uuid,
    ) -> Result<Vec<AudioGenerationRecord>, RepositoryError>;

    /// 删除生成记录
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;

    /// 删除脚本的所有生成记录，返回删除条数
    async fn delete_by_script_id(&self, script_id: Uuid) -> Result<usize, RepositoryError>;
}

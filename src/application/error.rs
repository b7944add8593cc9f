//! 应用层错误定义
//!
//! 统一的命令/查询错误类型
//!
//! 分类对应对外语义:
//! - ValidationError / InvalidState → 400 级（调用方可纠正）
//! - NotFound → 404 级
//! - Conflict → 409 级（在途生成）
//! - ConfigurationError → 500 级（运维可纠正）
//! - ProviderError / FetchError → 500 级（外部失败，信息透传）

use thiserror::Error;
use uuid::Uuid;

use crate::application::ports::{FetchError, RepositoryError, TtsError};
use crate::domain::generation::GenerationError;
use crate::domain::script::ScriptError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: Uuid,
    },

    /// 验证错误
    #[error("{0}")]
    ValidationError(String),

    /// 状态无效
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// 资源冲突（同一脚本的在途生成）
    #[error("{0}")]
    Conflict(String),

    /// 配置错误（如凭证缺失）
    #[error("{0}")]
    ConfigurationError(String),

    /// 提供方错误（信息原样透传）
    #[error("{0}")]
    ProviderError(String),

    /// 音频下载错误
    #[error("{0}")]
    FetchError(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// 存储错误
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: Uuid) -> Self {
        Self::NotFound { resource_type, id }
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建冲突错误
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

impl From<GenerationError> for ApplicationError {
    fn from(err: GenerationError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<ScriptError> for ApplicationError {
    fn from(err: ScriptError) -> Self {
        match err {
            ScriptError::InvalidTransition { .. } => Self::InvalidState(err.to_string()),
            _ => Self::ValidationError(err.to_string()),
        }
    }
}

impl From<TtsError> for ApplicationError {
    fn from(err: TtsError) -> Self {
        match err {
            TtsError::MissingToken => Self::ConfigurationError(err.to_string()),
            _ => Self::ProviderError(err.to_string()),
        }
    }
}

impl From<FetchError> for ApplicationError {
    fn from(err: FetchError) -> Self {
        Self::FetchError(err.to_string())
    }
}

impl From<crate::application::ports::AudioStorageError> for ApplicationError {
    fn from(err: crate::application::ports::AudioStorageError) -> Self {
        Self::StorageError(err.to_string())
    }
}

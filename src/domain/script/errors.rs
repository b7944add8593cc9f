//! Script Context - Errors

use thiserror::Error;

use super::{ScriptId, ScriptStatus};

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("脚本不存在: {0}")]
    NotFound(ScriptId),

    #[error("无效的名称: {0}")]
    InvalidName(String),

    #[error("非法的状态迁移: {from} -> {to}")]
    InvalidTransition {
        from: ScriptStatus,
        to: ScriptStatus,
    },
}

//! Script Queries

use uuid::Uuid;

/// 获取脚本详情（含生成历史）
#[derive(Debug, Clone)]
pub struct GetScript {
    pub script_id: Uuid,
}

/// 列出所有脚本
#[derive(Debug, Clone)]
pub struct ListScripts;

//! Script Commands

use uuid::Uuid;

/// 创建脚本
#[derive(Debug, Clone)]
pub struct CreateScript {
    pub name: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// 更新脚本（None 字段保持不变）
#[derive(Debug, Clone)]
pub struct UpdateScript {
    pub script_id: Uuid,
    pub name: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<String>,
}

/// 删除脚本（级联删除生成记录与音频文件）
#[derive(Debug, Clone)]
pub struct DeleteScript {
    pub script_id: Uuid,
}

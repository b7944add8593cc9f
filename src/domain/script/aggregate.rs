//! Script Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ScriptError, ScriptId, ScriptName, ScriptStatus, Tags};

/// Script 聚合根
///
/// 不变量:
/// - 名称非空且不超过 200 字符
/// - 状态迁移遵循 draft → published ↔ archived → draft
/// - 内容变更总是刷新 updated_at
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    id: ScriptId,
    name: ScriptName,
    content: String,
    tags: Tags,
    status: ScriptStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Script {
    /// 创建新脚本（初始状态为草稿）
    pub fn new(name: ScriptName, content: String, tags: Tags) -> Self {
        let now = Utc::now();
        Self {
            id: ScriptId::new(),
            name,
            content,
            tags,
            status: ScriptStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    /// 从持久化字段重建聚合（仓储层使用）
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: ScriptId,
        name: ScriptName,
        content: String,
        tags: Tags,
        status: ScriptStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            content,
            tags,
            status,
            created_at,
            updated_at,
        }
    }

    /// 重命名
    pub fn rename(&mut self, name: ScriptName) {
        self.name = name;
        self.touch();
    }

    /// 更新文本内容
    pub fn update_content(&mut self, content: String) {
        self.content = content;
        self.touch();
    }

    /// 替换标签
    pub fn set_tags(&mut self, tags: Tags) {
        self.tags = tags;
        self.touch();
    }

    /// 状态迁移
    pub fn transition_to(&mut self, target: ScriptStatus) -> Result<(), ScriptError> {
        if !self.status.can_transition_to(target) {
            return Err(ScriptError::InvalidTransition {
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    // Getters
    pub fn id(&self) -> ScriptId {
        self.id
    }

    pub fn name(&self) -> &ScriptName {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    pub fn status(&self) -> ScriptStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_script() -> Script {
        Script::new(
            ScriptName::new("Evening Wind-Down").unwrap(),
            "Take a deep breath...".to_string(),
            Tags::new(vec!["nsdr".to_string()]),
        )
    }

    #[test]
    fn test_new_script_is_draft() {
        let script = make_script();
        assert_eq!(script.status(), ScriptStatus::Draft);
        assert_eq!(script.content(), "Take a deep breath...");
    }

    #[test]
    fn test_publish_then_archive() {
        let mut script = make_script();
        script.transition_to(ScriptStatus::Published).unwrap();
        assert_eq!(script.status(), ScriptStatus::Published);
        script.transition_to(ScriptStatus::Archived).unwrap();
        assert_eq!(script.status(), ScriptStatus::Archived);
    }

    #[test]
    fn test_draft_cannot_archive_directly() {
        let mut script = make_script();
        assert!(script.transition_to(ScriptStatus::Archived).is_err());
        assert_eq!(script.status(), ScriptStatus::Draft);
    }

    #[test]
    fn test_update_content_refreshes_timestamp() {
        let mut script = make_script();
        let before = script.updated_at();
        script.update_content("New content".to_string());
        assert_eq!(script.content(), "New content");
        assert!(script.updated_at() >= before);
    }
}

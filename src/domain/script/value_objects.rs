//! Script Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ScriptError;

/// 脚本唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScriptId(Uuid);

impl ScriptId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ScriptId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ScriptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 脚本名称
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptName(String);

impl ScriptName {
    pub fn new(name: impl Into<String>) -> Result<Self, ScriptError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ScriptError::InvalidName("名称不能为空".to_string()));
        }
        if trimmed.chars().count() > 200 {
            return Err(ScriptError::InvalidName(
                "名称长度不能超过200字符".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ScriptName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 脚本状态
///
/// 状态机: draft → published ↔ archived → draft（恢复）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptStatus {
    /// 草稿
    Draft,
    /// 已发布
    Published,
    /// 已归档
    Archived,
}

impl ScriptStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptStatus::Draft => "draft",
            ScriptStatus::Published => "published",
            ScriptStatus::Archived => "archived",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(ScriptStatus::Draft),
            "published" => Some(ScriptStatus::Published),
            "archived" => Some(ScriptStatus::Archived),
            _ => None,
        }
    }

    /// 判断状态迁移是否合法
    pub fn can_transition_to(&self, target: ScriptStatus) -> bool {
        if *self == target {
            return true;
        }
        matches!(
            (self, target),
            (ScriptStatus::Draft, ScriptStatus::Published)
                | (ScriptStatus::Published, ScriptStatus::Archived)
                | (ScriptStatus::Archived, ScriptStatus::Published)
                | (ScriptStatus::Archived, ScriptStatus::Draft)
        )
    }
}

impl Default for ScriptStatus {
    fn default() -> Self {
        ScriptStatus::Draft
    }
}

impl std::fmt::Display for ScriptStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 脚本标签集合
///
/// 去重、去空白，保持插入顺序
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tags(Vec<String>);

impl Tags {
    pub fn new(tags: Vec<String>) -> Self {
        let mut seen = Vec::new();
        for tag in tags {
            let tag = tag.trim().to_string();
            if !tag.is_empty() && !seen.contains(&tag) {
                seen.push(tag);
            }
        }
        Self(seen)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rejects_empty() {
        assert!(ScriptName::new("").is_err());
        assert!(ScriptName::new("   ").is_err());
    }

    #[test]
    fn test_name_rejects_overlong() {
        let long = "x".repeat(201);
        assert!(ScriptName::new(long).is_err());
        let ok = "x".repeat(200);
        assert!(ScriptName::new(ok).is_ok());
    }

    #[test]
    fn test_name_trims() {
        let name = ScriptName::new("  Morning NSDR  ").unwrap();
        assert_eq!(name.as_str(), "Morning NSDR");
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            ScriptStatus::Draft,
            ScriptStatus::Published,
            ScriptStatus::Archived,
        ] {
            assert_eq!(ScriptStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(ScriptStatus::from_str("deleted"), None);
    }

    #[test]
    fn test_status_transitions() {
        assert!(ScriptStatus::Draft.can_transition_to(ScriptStatus::Published));
        assert!(ScriptStatus::Published.can_transition_to(ScriptStatus::Archived));
        assert!(ScriptStatus::Archived.can_transition_to(ScriptStatus::Published));
        assert!(ScriptStatus::Archived.can_transition_to(ScriptStatus::Draft));
        // 草稿不能直接归档，已发布不能退回草稿
        assert!(!ScriptStatus::Draft.can_transition_to(ScriptStatus::Archived));
        assert!(!ScriptStatus::Published.can_transition_to(ScriptStatus::Draft));
    }

    #[test]
    fn test_tags_dedup_and_trim() {
        let tags = Tags::new(vec![
            "sleep".to_string(),
            " sleep ".to_string(),
            "".to_string(),
            "focus".to_string(),
        ]);
        assert_eq!(tags.as_slice(), &["sleep".to_string(), "focus".to_string()]);
    }
}

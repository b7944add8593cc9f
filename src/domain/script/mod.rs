//! Script Context - 脚本限界上下文
//!
//! 职责:
//! - 脚本聚合管理（名称、内容、标签）
//! - 发布状态机

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::Script;
pub use errors::ScriptError;
pub use value_objects::{ScriptId, ScriptName, ScriptStatus, Tags};

//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Script Context: 脚本管理
//! - Generation Context: 音频生成参数

pub mod generation;
pub mod script;

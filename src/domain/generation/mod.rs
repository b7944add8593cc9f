//! Generation Context - 音频生成限界上下文
//!
//! 职责:
//! - 生成参数校验（文本、语速、温度）
//! - 模型白名单与每模型参数子集
//! - 音色目录

mod errors;
mod value_objects;

pub use errors::GenerationError;
pub use value_objects::{GenerationParams, Speed, Temperature, TtsModel};

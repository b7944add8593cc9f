//! Memory Layer - In-Memory State Management
//!
//! 实现 GenerationGuard，管理每脚本在途生成的内存状态

mod generation_guard;

pub use generation_guard::InMemoryGenerationGuard;

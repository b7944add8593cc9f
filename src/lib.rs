//! TTS Studio - 脚本创作与语音合成系统
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Script Context: 脚本管理上下文（名称/内容/标签/状态机）
//! - Generation Context: 语音生成上下文（模型分发、参数校验）
//!
//! 应用层 (application/):
//! - Ports: 端口定义（TtsEngine, AudioFetcher, AudioStorage, GenerationGuard, Repositories）
//! - Commands: CQRS 命令处理器（脚本增删改、音频生成编排）
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: 生成锁内存实现
//! - Persistence: SQLite 存储
//! - Adapters: Replicate TTS Client, HTTP 下载器, 文件存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};

//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod script_repo;
mod audio_generation_repo;

pub use database::*;
pub use script_repo::*;
pub use audio_generation_repo::*;

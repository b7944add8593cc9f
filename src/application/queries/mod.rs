//! Application Queries - CQRS 查询及处理器

pub mod handlers;

mod audio_queries;
mod script_queries;

pub use audio_queries::{GetAudioQuery, ListGenerations};
pub use script_queries::{GetScript, ListScripts};

//! Application Commands - CQRS 命令及处理器

pub mod handlers;

mod generation_commands;
mod script_commands;

pub use generation_commands::{DeleteGenerationCommand, GenerateAudioCommand};
pub use script_commands::{CreateScript, DeleteScript, UpdateScript};

//! Command Handlers

mod generation_handlers;
mod script_handlers;

pub use generation_handlers::{
    DeleteGenerationHandler, GenerateAudioHandler, GenerateAudioResponse,
};
pub use script_handlers::{
    CreateScriptHandler, CreateScriptResponse, DeleteScriptHandler, UpdateScriptHandler,
    UpdateScriptResponse,
};

//! Query Handlers

mod audio_handlers;
mod script_handlers;

pub use audio_handlers::{GetAudioHandler, GetAudioResponse, ListGenerationsHandler};
pub use script_handlers::{
    GenerationResponse, GetScriptHandler, ListScriptsHandler, ScriptDetailResponse,
    ScriptSummaryResponse,
};

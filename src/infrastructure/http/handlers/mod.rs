//! HTTP Handlers

mod audio;
mod generate;
mod ping;
mod script;

pub use audio::*;
pub use generate::*;
pub use ping::*;
pub use script::*;

//! TTS Adapters
//!
//! TtsEnginePort 的具体实现

mod fake_tts_client;
mod replicate_client;

pub use fake_tts_client::{FakeTtsClient, FakeTtsClientConfig};
pub use replicate_client::{ReplicateTtsClient, ReplicateTtsClientConfig};

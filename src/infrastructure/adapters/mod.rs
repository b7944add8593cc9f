//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod fetcher;
pub mod storage;
pub mod tts;

pub use fetcher::*;
pub use storage::*;
pub use tts::*;

//! Storage Adapters
//!
//! AudioStoragePort 的具体实现

mod file_storage;

pub use file_storage::FileAudioStorage;

//! Fetcher Adapters
//!
//! AudioFetcherPort 的具体实现

mod http_fetcher;

pub use http_fetcher::{HttpAudioFetcher, HttpAudioFetcherConfig};

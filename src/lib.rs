//! LRU Buffer Cache - A key-indexed cache with explicit LRU eviction
//!
//! Stores opaque values under integer keys, tracks recency of access, and
//! trims the least recently used entries on request.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{Buffer, BufferHandle, CacheStats, IndexedCache, Key, RecencyList};
pub use config::Config;
pub use error::{CacheError, Result};

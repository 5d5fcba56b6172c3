//! Error types for the buffer cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

use crate::cache::Key;

// == Cache Error Enum ==
/// Unified error type for the buffer cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key is not indexed, or is indexed but missing from the recency order
    #[error("Cache miss for key {0}")]
    Miss(Key),

    /// Key is already present in the cache
    #[error("Duplicate key: {0}")]
    DuplicateKey(Key),

    /// Configuration value is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CacheError {
    // == Is Miss ==
    /// Returns true for the non-fatal cache miss condition.
    pub fn is_miss(&self) -> bool {
        matches!(self, CacheError::Miss(_))
    }
}

// == Result Type Alias ==
/// Convenience Result type for the buffer cache.
pub type Result<T> = std::result::Result<T, CacheError>;

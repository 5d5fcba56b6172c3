//! Configuration Module
//!
//! Handles loading the demo driver configuration from environment variables.

use std::env;

use crate::error::{CacheError, Result};

/// Demo driver configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of buffers created and indexed under keys `1..=max_buffers`
    pub max_buffers: usize,
    /// Target size passed to the eviction pass
    pub evict_target: usize,
    /// Text prefix of each buffer payload
    pub buffer_prefix: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_BUFFERS` - Number of demo buffers (default: 10)
    /// - `EVICT_TARGET` - Eviction target size (default: 2)
    /// - `BUFFER_PREFIX` - Payload text prefix (default: "buffer")
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_buffers: env::var("MAX_BUFFERS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_buffers),
            evict_target: env::var("EVICT_TARGET")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.evict_target),
            buffer_prefix: env::var("BUFFER_PREFIX").unwrap_or(defaults.buffer_prefix),
        }
    }

    /// Checks that the configuration can drive the demo.
    pub fn validate(&self) -> Result<()> {
        if self.max_buffers == 0 {
            return Err(CacheError::InvalidConfig(
                "MAX_BUFFERS must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_buffers: 10,
            evict_target: 2,
            buffer_prefix: "buffer".to_string(),
        }
    }
}

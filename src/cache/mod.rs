//! Cache Module
//!
//! Key-indexed storage with an explicit least-recently-used eviction pass.

mod buffer;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use buffer::{Buffer, BufferHandle};
pub use lru::RecencyList;
pub use stats::CacheStats;
pub use store::IndexedCache;

// == Public Types ==
/// Integer key addressing a cache slot.
pub type Key = i64;

// == Public Constants ==
/// Fixed payload size of a buffer in bytes
pub const BUFFER_SIZE: usize = 512;

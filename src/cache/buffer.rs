//! Buffer Module
//!
//! Defines the fixed-size payload stored by the cache and its shared handle.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use crate::cache::BUFFER_SIZE;

// == Buffer Handle ==
/// Reference-counted handle to an immutable buffer.
pub type BufferHandle = Rc<Buffer>;

// == Buffer ==
/// An immutable, zero-padded payload of `BUFFER_SIZE` bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Buffer {
    data: [u8; BUFFER_SIZE],
}

impl Buffer {
    // == Constructor ==
    /// Copies up to `BUFFER_SIZE` bytes of `bytes` into a new buffer.
    ///
    /// Shorter input is zero-padded; longer input is truncated.
    pub fn new(bytes: &[u8]) -> Self {
        let mut data = [0u8; BUFFER_SIZE];
        let len = bytes.len().min(BUFFER_SIZE);
        data[..len].copy_from_slice(&bytes[..len]);
        Self { data }
    }

    /// Creates a buffer holding the bytes of `text`.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.as_bytes())
    }

    /// Creates a buffer already wrapped in a shared handle.
    pub fn shared(text: &str) -> BufferHandle {
        Rc::new(Self::from_text(text))
    }

    // == Accessors ==
    /// Returns the full fixed-size payload.
    pub fn as_bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.data
    }

    /// Returns the payload up to the first NUL byte as text.
    pub fn as_text(&self) -> Cow<'_, str> {
        let end = self
            .data
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(BUFFER_SIZE);
        String::from_utf8_lossy(&self.data[..end])
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Buffer").field(&self.as_text()).finish()
    }
}

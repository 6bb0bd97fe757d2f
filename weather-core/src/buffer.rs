use std::borrow::Cow;

use crate::error::BufferError;

/// Append-only byte buffer for a streamed response body.
///
/// The backing storage always holds one extra `0` byte after the logical
/// contents, so the body can be handed to anything expecting a
/// NUL-terminated string. `len()` never counts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseBuffer {
    bytes: Vec<u8>,
}

impl ResponseBuffer {
    pub fn new() -> Self {
        Self { bytes: vec![0] }
    }

    /// Append a chunk, growing storage as needed.
    ///
    /// On allocation failure the buffer is left exactly as it was.
    pub fn append(&mut self, chunk: &[u8]) -> Result<(), BufferError> {
        if chunk.is_empty() {
            return Ok(());
        }

        self.bytes
            .try_reserve(chunk.len())
            .map_err(|_| BufferError::OutOfMemory { requested: self.len() + chunk.len() })?;

        // Overwrite the old terminator, then put a fresh one at the end.
        self.bytes.pop();
        self.bytes.extend_from_slice(chunk);
        self.bytes.push(0);

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.bytes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }
}

impl Default for ResponseBuffer {
    fn default() -> Self {
        Self::new()
    }
}

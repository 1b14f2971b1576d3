//! In-memory output stream.

use alloc::vec::Vec;

use crate::domain::{OutputStream, Result, StreamState};

/// Output stream collecting everything written into a growable buffer.
///
/// # Examples
///
/// ```
/// use streamrs::{MemoryOutputStream, OutputStream};
///
/// let mut output = MemoryOutputStream::new();
/// output.write(b"abc").unwrap();
/// assert_eq!(output.size(), 3);
///
/// output.reset();
/// assert!(output.as_bytes().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryOutputStream {
    data: Vec<u8>,
    state: StreamState,
}

impl MemoryOutputStream {
    /// Create an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stream with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            state: StreamState::new(),
        }
    }

    /// Discard everything written so far.
    pub fn reset(&mut self) {
        self.data.clear();
    }

    /// Number of bytes written.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// The bytes written.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Take the bytes written.
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Write everything collected so far to `out`.
    ///
    /// # Errors
    ///
    /// Propagates the errors of `out`.
    pub fn write_to<O: OutputStream + ?Sized>(&self, out: &mut O) -> Result<usize> {
        out.write(&self.data)
    }
}

impl OutputStream for MemoryOutputStream {
    fn output(&mut self, bytes: &[u8]) -> Result<usize> {
        self.state.ensure_open()?;
        self.data.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn is_closed(&self) -> bool {
        self.state.is_closed()
    }

    fn close(&mut self) -> Result<()> {
        self.state.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StreamError;

    #[test]
    fn test_write_to() {
        let mut first = MemoryOutputStream::new();
        first.write(b"hello").unwrap();

        let mut second = MemoryOutputStream::with_capacity(16);
        second.write(b">> ").unwrap();
        assert_eq!(first.write_to(&mut second).unwrap(), 5);
        assert_eq!(second.into_inner(), b">> hello");
    }

    #[test]
    fn test_contents_survive_close() {
        let mut output = MemoryOutputStream::new();
        output.write(b"kept").unwrap();
        output.close().unwrap();

        assert_eq!(output.as_bytes(), b"kept");
        assert!(matches!(output.output(b"x"), Err(StreamError::Closed)));
    }
}

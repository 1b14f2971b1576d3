//! Transparent input decorator.

use alloc::vec::Vec;

use crate::domain::{InputStream, ReadOutcome, Result};

/// Input stream forwarding every operation to the stream it wraps.
///
/// Transforming filters hold a `FilterInputStream` and replace only the
/// primitive [`input`](InputStream::input); everything else, including
/// mark/reset, keeps going to the subordinate stream.
///
/// # Examples
///
/// ```
/// use streamrs::{FilterInputStream, InputStream, MemoryInputStream};
///
/// let mut filter = FilterInputStream::new(MemoryInputStream::new(b"abc".to_vec()));
/// let mut bytes = Vec::new();
/// filter.read(&mut bytes, 3).unwrap();
/// assert_eq!(bytes, b"abc");
/// assert_eq!(filter.get_ref().position(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterInputStream<I> {
    inner: I,
}

impl<I: InputStream> FilterInputStream<I> {
    /// Wrap `inner`.
    pub const fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Access the subordinate stream.
    #[inline]
    pub const fn get_ref(&self) -> &I {
        &self.inner
    }

    /// Mutable access to the subordinate stream.
    #[inline]
    pub fn get_mut(&mut self) -> &mut I {
        &mut self.inner
    }

    /// Unwrap the subordinate stream.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: InputStream> InputStream for FilterInputStream<I> {
    fn input(&mut self, bytes: &mut Vec<u8>, length: usize) -> Result<ReadOutcome> {
        self.inner.input(bytes, length)
    }

    fn available(&self) -> usize {
        self.inner.available()
    }

    fn position(&self) -> u64 {
        self.inner.position()
    }

    fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }

    fn close(&mut self) -> Result<()> {
        self.inner.close()
    }

    fn mark_supported(&self) -> bool {
        self.inner.mark_supported()
    }

    fn mark(&mut self, limit: usize) -> Result<()> {
        self.inner.mark(limit)
    }

    fn reset(&mut self) -> Result<()> {
        self.inner.reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{BufferedInputStream, MemoryInputStream};
    use crate::domain::StreamError;

    #[test]
    fn test_forwards_mark_and_reset() {
        let buffered = BufferedInputStream::new(MemoryInputStream::new(b"abcdef".to_vec()));
        let mut filter = FilterInputStream::new(buffered);
        let mut bytes = Vec::new();

        assert!(filter.mark_supported());
        filter.mark(8).unwrap();
        filter.read(&mut bytes, 4).unwrap();
        filter.reset().unwrap();
        filter.read(&mut bytes, 2).unwrap();
        assert_eq!(bytes, b"ab");
        assert_eq!(filter.available(), 4);
    }

    #[test]
    fn test_close_closes_inner() {
        let mut filter = FilterInputStream::new(MemoryInputStream::new(b"abc".to_vec()));
        filter.close().unwrap();

        assert!(filter.get_ref().is_closed());
        assert!(matches!(filter.close(), Err(StreamError::AlreadyClosed)));
        assert!(matches!(filter.mark(1), Err(StreamError::MarkUnsupported)));
    }
}

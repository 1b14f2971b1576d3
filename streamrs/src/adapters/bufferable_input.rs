//! Filter input stream with a pre-fetch buffer.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::domain::presets::DEFAULT_BUFFER_SIZE;
use crate::domain::{InputStream, ReadOutcome, Result, StreamError};

/// Filter input stream holding bytes pre-fetched from (or pushed back onto)
/// its subordinate stream.
///
/// Reads drain the buffer first and then pull the rest from the subordinate
/// stream. This type never fills the buffer itself; the streams built on it
/// ([`PushbackInputStream`](super::PushbackInputStream),
/// [`LineInputStream`](super::LineInputStream)) do. Mark/reset is not
/// supported.
#[derive(Debug, Clone)]
pub struct BufferableFilterInputStream<I> {
    inner: I,
    buffer: VecDeque<u8>,
    read_buffer_size: usize,
    position: u64,
}

impl<I: InputStream> BufferableFilterInputStream<I> {
    /// Wrap `inner`, pre-fetching up to 1024 bytes at a time.
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            buffer: VecDeque::new(),
            read_buffer_size: DEFAULT_BUFFER_SIZE,
            position: 0,
        }
    }

    /// Wrap `inner`, pre-fetching up to `read_buffer_size` bytes at a time.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::InvalidConfig`] if `read_buffer_size` is zero.
    pub fn with_read_buffer_size(inner: I, read_buffer_size: usize) -> Result<Self> {
        if read_buffer_size == 0 {
            return Err(StreamError::InvalidConfig("read buffer size must be greater than zero"));
        }

        let mut stream = Self::new(inner);
        stream.read_buffer_size = read_buffer_size;
        Ok(stream)
    }

    /// Maximum number of bytes pre-fetched at a time.
    #[inline]
    pub const fn read_buffer_size(&self) -> usize {
        self.read_buffer_size
    }

    /// Number of bytes waiting in the buffer.
    #[inline]
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
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

    /// Unwrap the subordinate stream, discarding buffered bytes.
    pub fn into_inner(self) -> I {
        self.inner
    }

    pub(crate) fn prepend(&mut self, bytes: &[u8]) {
        for &byte in bytes.iter().rev() {
            self.buffer.push_front(byte);
        }
    }

    pub(crate) fn append(&mut self, bytes: &[u8]) {
        self.buffer.extend(bytes);
    }

    /// Position of the first `needle` in the buffer.
    pub(crate) fn find(&self, needle: u8) -> Option<usize> {
        self.buffer.iter().position(|&byte| byte == needle)
    }

    /// Remove and deliver the first `count` buffered bytes.
    pub(crate) fn take_front(&mut self, count: usize) -> Vec<u8> {
        let count = count.min(self.buffer.len());
        self.position += count as u64;
        self.buffer.drain(..count).collect()
    }
}

impl<I: InputStream> InputStream for BufferableFilterInputStream<I> {
    fn input(&mut self, bytes: &mut Vec<u8>, length: usize) -> Result<ReadOutcome> {
        if self.inner.is_closed() {
            return Err(StreamError::Closed);
        }

        if length == 0 {
            return Ok(ReadOutcome::Bytes(0));
        }

        let from_buffer = length.min(self.buffer.len());
        bytes.extend(self.buffer.drain(..from_buffer));

        let mut total = from_buffer;
        if total < length {
            total += self.inner.input(bytes, length - total)?.count();
        }

        self.position += total as u64;
        Ok(ReadOutcome::from_count(total, length))
    }

    fn available(&self) -> usize {
        self.buffer.len() + self.inner.available()
    }

    fn position(&self) -> u64 {
        self.position
    }

    fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }

    fn close(&mut self) -> Result<()> {
        self.buffer = VecDeque::new();
        self.inner.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryInputStream;

    fn bufferable(data: &[u8]) -> BufferableFilterInputStream<MemoryInputStream> {
        BufferableFilterInputStream::new(MemoryInputStream::new(data.to_vec()))
    }

    #[test]
    fn test_drains_buffer_before_inner() {
        let mut input = bufferable(b"world");
        input.append(b"hello ");
        assert_eq!(input.available(), 11);

        let mut bytes = Vec::new();
        assert_eq!(input.read(&mut bytes, 4).unwrap(), ReadOutcome::Bytes(4));
        assert_eq!(bytes, b"hell");

        assert_eq!(input.read(&mut bytes, 5).unwrap(), ReadOutcome::Bytes(5));
        assert_eq!(bytes, b"o wor");

        assert_eq!(input.read(&mut bytes, 5).unwrap(), ReadOutcome::Bytes(2));
        assert_eq!(bytes, b"ld");
        assert_eq!(input.read(&mut bytes, 5).unwrap(), ReadOutcome::Eof);
        assert_eq!(input.position(), 11);
    }

    #[test]
    fn test_buffer_served_at_inner_eof() {
        let mut input = bufferable(b"");
        input.prepend(b"ab");

        let mut bytes = Vec::new();
        assert_eq!(input.read(&mut bytes, 4).unwrap(), ReadOutcome::Bytes(2));
        assert_eq!(bytes, b"ab");
        assert_eq!(input.read(&mut bytes, 4).unwrap(), ReadOutcome::Eof);
    }

    #[test]
    fn test_mark_unsupported() {
        let mut input = bufferable(b"abc");
        assert!(!input.mark_supported());
        assert!(matches!(input.mark(1), Err(StreamError::MarkUnsupported)));
        assert!(matches!(input.reset(), Err(StreamError::MarkUnsupported)));
    }

    #[test]
    fn test_close_clears_buffer() {
        let mut input = bufferable(b"abc");
        input.append(b"xyz");
        input.close().unwrap();

        assert_eq!(input.buffered_len(), 0);
        assert!(input.is_closed());
        assert!(matches!(input.read(&mut Vec::new(), 1), Err(StreamError::Closed)));
    }

    #[test]
    fn test_zero_read_buffer_size_rejected() {
        let source = MemoryInputStream::new(b"abc".to_vec());
        assert!(BufferableFilterInputStream::with_read_buffer_size(source, 0).is_err());
    }
}

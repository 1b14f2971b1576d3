//! Buffered input stream with mark/reset.

use alloc::vec::Vec;

use crate::domain::{InputStream, MarkBuffer, ReadOutcome, Result, StreamError};

/// Input stream reading its subordinate stream through a [`MarkBuffer`].
///
/// Reads are served from the buffer; whenever every buffered byte has been
/// served the buffer is refilled, even if the current request is already
/// satisfied. A mark is honored for as long as the buffer retains the marked
/// bytes.
///
/// The limit is checked at refill time with `served >= limit`. A read that
/// consumes exactly `limit` bytes after the mark and empties the buffer
/// therefore expires the mark before it returns; mark with at least one
/// byte of slack when the reset must succeed at any buffer boundary.
///
/// # Examples
///
/// ```
/// use streamrs::{BufferedInputStream, InputStream, MemoryInputStream};
///
/// let source = MemoryInputStream::new(b"GHIJKL123456789ABCDEF".to_vec());
/// let mut input = BufferedInputStream::with_buffer_size(source, 6).unwrap();
/// let mut bytes = Vec::new();
///
/// input.read(&mut bytes, 5).unwrap();
/// input.mark(3).unwrap();
/// input.read(&mut bytes, 5).unwrap();
/// assert_eq!(bytes, b"L1234");
///
/// input.reset().unwrap();
/// input.read(&mut bytes, 5).unwrap();
/// assert_eq!(bytes, b"L1234");
/// ```
#[derive(Debug, Clone)]
pub struct BufferedInputStream<I> {
    inner: I,
    buffer: MarkBuffer,
    closed: bool,
    position: u64,
}

impl<I: InputStream> BufferedInputStream<I> {
    /// Wrap `inner` with a buffer of 1024 bytes.
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            buffer: MarkBuffer::default(),
            closed: false,
            position: 0,
        }
    }

    /// Wrap `inner` with a buffer of `buffer_size` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::InvalidConfig`] if `buffer_size` is zero.
    pub fn with_buffer_size(inner: I, buffer_size: usize) -> Result<Self> {
        Ok(Self {
            inner,
            buffer: MarkBuffer::new(buffer_size)?,
            closed: false,
            position: 0,
        })
    }

    /// The buffer state.
    #[inline]
    pub const fn buffer(&self) -> &MarkBuffer {
        &self.buffer
    }

    /// Access the subordinate stream.
    #[inline]
    pub const fn get_ref(&self) -> &I {
        &self.inner
    }

    /// Mutable access to the subordinate stream.
    ///
    /// Reading from it directly skips the buffered bytes.
    #[inline]
    pub fn get_mut(&mut self) -> &mut I {
        &mut self.inner
    }

    /// Unwrap the subordinate stream, discarding buffered bytes.
    pub fn into_inner(self) -> I {
        self.inner
    }

    #[cfg(test)]
    pub(crate) fn with_state(inner: I, buffer: MarkBuffer) -> Self {
        Self {
            inner,
            buffer,
            closed: false,
            position: 0,
        }
    }
}

impl<I: InputStream> InputStream for BufferedInputStream<I> {
    fn input(&mut self, bytes: &mut Vec<u8>, length: usize) -> Result<ReadOutcome> {
        if self.closed {
            return Err(StreamError::Closed);
        }

        if length == 0 {
            return Ok(ReadOutcome::Bytes(0));
        }

        let mut total = 0;
        loop {
            total += self.buffer.serve(bytes, length - total);

            if self.buffer.is_exhausted() && !self.buffer.fill(&mut self.inner)? {
                break;
            }

            if total == length {
                break;
            }
        }

        self.position += total as u64;
        Ok(ReadOutcome::from_count(total, length))
    }

    fn available(&self) -> usize {
        if self.closed {
            return 0;
        }
        self.buffer.remaining() + self.inner.available()
    }

    fn position(&self) -> u64 {
        self.position
    }

    fn is_closed(&self) -> bool {
        self.closed
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Err(StreamError::AlreadyClosed);
        }

        self.buffer.release();
        self.closed = true;
        self.inner.close()
    }

    fn mark_supported(&self) -> bool {
        true
    }

    fn mark(&mut self, limit: usize) -> Result<()> {
        self.buffer.mark(limit);
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        if self.closed {
            return Err(StreamError::Closed);
        }
        self.buffer.reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryInputStream;

    fn buffered(data: &[u8], buffer_size: usize) -> BufferedInputStream<MemoryInputStream> {
        BufferedInputStream::with_buffer_size(MemoryInputStream::new(data.to_vec()), buffer_size)
            .unwrap()
    }

    #[test]
    fn test_zero_buffer_size_rejected() {
        let source = MemoryInputStream::new(b"abc".to_vec());
        assert!(matches!(
            BufferedInputStream::with_buffer_size(source, 0),
            Err(StreamError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_input_refills_eagerly() {
        let mut input = buffered(b"123456789ABCDEF", 4);
        let mut bytes = Vec::new();

        assert_eq!(input.read(&mut bytes, 1).unwrap(), ReadOutcome::Bytes(1));
        assert_eq!(bytes, b"1");
        assert_eq!(input.buffer().buffered(), b"1234");
        assert_eq!(input.buffer().offset(), 1);
        assert_eq!(input.available(), 14);

        input.read(&mut bytes, 5).unwrap();
        assert_eq!(bytes, b"23456");
        assert_eq!(input.buffer().buffered(), b"5678");
        assert_eq!(input.buffer().offset(), 2);
        assert_eq!(input.available(), 9);

        input.read(&mut bytes, 9).unwrap();
        assert_eq!(bytes, b"789ABCDEF");
        assert!(input.buffer().buffered().is_empty());
        assert_eq!(input.buffer().offset(), 0);
        assert_eq!(input.available(), 0);

        assert_eq!(input.read(&mut bytes, 1).unwrap(), ReadOutcome::Eof);
        assert_eq!(input.position(), 15);
    }

    #[test]
    fn test_mark_and_reset() {
        let mut input = buffered(b"123456789ABCDEF", 4);
        let mut bytes = Vec::new();

        input.read(&mut bytes, 2).unwrap();
        assert_eq!(bytes, b"12");
        assert_eq!(input.available(), 13);

        input.mark(4).unwrap();
        input.read(&mut bytes, 3).unwrap();
        assert_eq!(bytes, b"345");
        assert_eq!(input.available(), 10);

        input.reset().unwrap();
        assert_eq!(input.available(), 13);

        input.read(&mut bytes, 3).unwrap();
        assert_eq!(bytes, b"345");
        input.read(&mut bytes, 3).unwrap();
        assert_eq!(bytes, b"678");
        assert_eq!(input.available(), 7);
    }

    #[test]
    fn test_mark_survives_past_limit_while_buffered() {
        let mut input = buffered(b"GHIJKL123456789ABCDEF", 6);
        let mut bytes = Vec::new();

        input.read(&mut bytes, 5).unwrap();
        assert_eq!(bytes, b"GHIJK");
        assert_eq!(input.available(), 16);

        input.mark(3).unwrap();
        input.read(&mut bytes, 5).unwrap();
        assert_eq!(bytes, b"L1234");
        assert_eq!(input.available(), 11);

        // Five bytes were read past a limit of three, yet the mark holds.
        input.reset().unwrap();
        assert_eq!(input.available(), 16);

        input.read(&mut bytes, 5).unwrap();
        assert_eq!(bytes, b"L1234");
    }

    #[test]
    fn test_reading_exactly_mark_limit_to_buffer_end_expires_mark() {
        let mut input = buffered(b"123456789ABCDEF", 4);
        let mut bytes = Vec::new();

        input.read(&mut bytes, 2).unwrap();
        input.mark(2).unwrap();
        input.read(&mut bytes, 2).unwrap();
        assert_eq!(bytes, b"34");
        assert_eq!(input.buffer().mark_position(), None);

        assert!(matches!(input.reset(), Err(StreamError::InvalidMark)));
        input.read(&mut bytes, 2).unwrap();
        assert_eq!(bytes, b"56");
    }

    #[test]
    fn test_reading_exactly_mark_limit_inside_buffer_keeps_mark() {
        let mut input = buffered(b"123456789ABCDEF", 8);
        let mut bytes = Vec::new();

        input.read(&mut bytes, 2).unwrap();
        input.mark(2).unwrap();
        input.read(&mut bytes, 2).unwrap();

        input.reset().unwrap();
        input.read(&mut bytes, 2).unwrap();
        assert_eq!(bytes, b"34");
    }

    #[test]
    fn test_mark_limit_with_slack_survives_buffer_end() {
        let mut input = buffered(b"123456789ABCDEF", 4);
        let mut bytes = Vec::new();

        input.read(&mut bytes, 2).unwrap();
        input.mark(3).unwrap();
        input.read(&mut bytes, 2).unwrap();

        input.reset().unwrap();
        input.read(&mut bytes, 4).unwrap();
        assert_eq!(bytes, b"3456");
    }

    #[test]
    fn test_mark_expires_on_refill() {
        let mut input = buffered(b"123456789ABCDEF", 4);
        let mut bytes = Vec::new();

        input.read(&mut bytes, 1).unwrap();
        input.mark(2).unwrap();
        input.read(&mut bytes, 5).unwrap();
        assert_eq!(bytes, b"23456");

        assert!(matches!(input.reset(), Err(StreamError::InvalidMark)));
    }

    #[test]
    fn test_reset_twice_is_idempotent() {
        let mut input = buffered(b"abcdefgh", 16);
        let mut bytes = Vec::new();

        input.mark(8).unwrap();
        input.read(&mut bytes, 3).unwrap();
        input.reset().unwrap();
        input.reset().unwrap();
        input.read(&mut bytes, 3).unwrap();
        assert_eq!(bytes, b"abc");
    }

    #[test]
    fn test_reset_checks_closed_first() {
        let mut input = buffered(b"abc", 4);
        assert!(matches!(input.reset(), Err(StreamError::InvalidMark)));

        input.close().unwrap();
        assert!(matches!(input.reset(), Err(StreamError::Closed)));
        assert!(input.get_ref().is_closed());
        assert!(matches!(input.close(), Err(StreamError::AlreadyClosed)));
    }

    #[test]
    fn test_resumes_from_prepared_state() {
        let source = MemoryInputStream::new(b"123".to_vec());
        let state = MarkBuffer::from_parts(b"GHIJK", 8, 3, Some(1), 8);
        let mut input = BufferedInputStream::with_state(source, state);
        let mut bytes = Vec::new();

        input.read(&mut bytes, 4).unwrap();
        assert_eq!(bytes, b"JK12");
        input.reset().unwrap();
        input.read(&mut bytes, 10).unwrap();
        assert_eq!(bytes, b"HIJK123");
    }

    #[test]
    fn test_zero_length_read() {
        let mut input = buffered(b"abc", 4);
        let mut bytes = Vec::new();
        assert_eq!(input.read(&mut bytes, 0).unwrap(), ReadOutcome::Bytes(0));
        assert_eq!(input.available(), 3);
    }
}

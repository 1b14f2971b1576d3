//! Input stream with a bounded pushback buffer.

use alloc::vec::Vec;

use super::BufferableFilterInputStream;
use crate::domain::presets::DEFAULT_PUSHBACK_CAPACITY;
use crate::domain::value_objects::saturating_isize;
use crate::domain::{InputStream, ReadOutcome, Result, Span, StreamError};

/// Input stream that can un-read bytes so the next read sees them again.
///
/// Pushed-back bytes go in front of anything pushed back earlier. The
/// pushback buffer holds at most `capacity` bytes; pushing more fails and
/// leaves the buffer unchanged.
///
/// # Examples
///
/// ```
/// use streamrs::{InputStream, MemoryInputStream, PushbackInputStream};
///
/// let source = MemoryInputStream::new(b"world".to_vec());
/// let mut input = PushbackInputStream::with_capacity(source, 16).unwrap();
///
/// input.unread(b"hello").unwrap();
/// assert_eq!(input.available(), 10);
///
/// let mut bytes = Vec::new();
/// input.read(&mut bytes, 10).unwrap();
/// assert_eq!(bytes, b"helloworld");
/// ```
#[derive(Debug, Clone)]
pub struct PushbackInputStream<I> {
    base: BufferableFilterInputStream<I>,
    capacity: usize,
}

impl<I: InputStream> PushbackInputStream<I> {
    /// Wrap `inner` with room for a single pushed-back byte.
    pub fn new(inner: I) -> Self {
        Self {
            base: BufferableFilterInputStream::new(inner),
            capacity: DEFAULT_PUSHBACK_CAPACITY,
        }
    }

    /// Wrap `inner` with room for `capacity` pushed-back bytes.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::InvalidConfig`] if `capacity` is zero.
    pub fn with_capacity(inner: I, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(StreamError::InvalidConfig("pushback capacity must be greater than zero"));
        }

        Ok(Self {
            base: BufferableFilterInputStream::new(inner),
            capacity,
        })
    }

    /// Capacity of the pushback buffer.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of pushed-back bytes not read yet.
    #[inline]
    pub fn pushed_back(&self) -> usize {
        self.base.buffered_len()
    }

    /// Access the subordinate stream.
    #[inline]
    pub const fn get_ref(&self) -> &I {
        self.base.get_ref()
    }

    /// Unwrap the subordinate stream, discarding pushed-back bytes.
    pub fn into_inner(self) -> I {
        self.base.into_inner()
    }

    /// Push all of `bytes` back.
    ///
    /// # Errors
    ///
    /// Same as [`unread_substring`](Self::unread_substring).
    pub fn unread(&mut self, bytes: &[u8]) -> Result<()> {
        self.unread_substring(bytes, 0, saturating_isize(bytes.len()))
    }

    /// Push `bytes[offset .. offset + length]` back, with the window
    /// normalized like [`read_substring`](InputStream::read_substring).
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::OutOfBounds`] for an invalid window,
    /// [`StreamError::Closed`] if the stream is closed and
    /// [`StreamError::PushbackOverflow`] if the bytes do not fit.
    pub fn unread_substring(&mut self, bytes: &[u8], offset: isize, length: isize) -> Result<()> {
        let span = Span::new(offset, length).normalize(bytes.len())?;

        if self.base.is_closed() {
            return Err(StreamError::Closed);
        }

        self.pushback(&bytes[span.clamp(bytes.len())])
    }

    fn pushback(&mut self, bytes: &[u8]) -> Result<()> {
        let requested = bytes.len() + self.base.buffered_len();
        if requested > self.capacity {
            return Err(StreamError::PushbackOverflow {
                capacity: self.capacity,
                requested,
            });
        }

        trace!("pushing back {} bytes ({} buffered)", bytes.len(), requested);
        self.base.prepend(bytes);
        Ok(())
    }
}

impl<I: InputStream> InputStream for PushbackInputStream<I> {
    fn input(&mut self, bytes: &mut Vec<u8>, length: usize) -> Result<ReadOutcome> {
        self.base.input(bytes, length)
    }

    fn available(&self) -> usize {
        self.base.available()
    }

    fn position(&self) -> u64 {
        self.base.position()
    }

    fn is_closed(&self) -> bool {
        self.base.is_closed()
    }

    fn close(&mut self) -> Result<()> {
        self.base.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryInputStream;

    fn pushback(data: &[u8], capacity: usize) -> PushbackInputStream<MemoryInputStream> {
        PushbackInputStream::with_capacity(MemoryInputStream::new(data.to_vec()), capacity).unwrap()
    }

    #[test]
    fn test_unread_substring_windows() {
        let cases: [(isize, isize, &[u8]); 7] = [
            (0, 5, b"hello"),
            (-1, 5, b"o"),
            (-5, 5, b"hello"),
            (-6, 5, b"hello"),
            (0, -1, b"hell"),
            (2, -1, b"ll"),
            (2, -3, b""),
        ];

        for (offset, length, expected) in cases {
            let mut input = pushback(b"", 16);
            input.unread_substring(b"hello", offset, length).unwrap();
            assert_eq!(input.pushed_back(), expected.len());

            let mut bytes = Vec::new();
            input.read(&mut bytes, 16).unwrap();
            assert_eq!(bytes, expected, "offset {offset}, length {length}");
        }
    }

    #[test]
    fn test_unread_then_read_round_trip() {
        let mut input = pushback(b"abcdef", 4);
        let mut bytes = Vec::new();

        input.read(&mut bytes, 4).unwrap();
        assert_eq!(bytes, b"abcd");

        input.unread(&bytes).unwrap();
        input.read(&mut bytes, 4).unwrap();
        assert_eq!(bytes, b"abcd");
    }

    #[test]
    fn test_later_pushback_goes_first() {
        let mut input = pushback(b"", 4);
        input.unread(b"cd").unwrap();
        input.unread(b"ab").unwrap();

        let mut bytes = Vec::new();
        input.read(&mut bytes, 4).unwrap();
        assert_eq!(bytes, b"abcd");
    }

    #[test]
    fn test_overflow_leaves_buffer_unchanged() {
        let mut input = pushback(b"world", 2);
        let err = input.unread(b"abc").unwrap_err();
        assert!(matches!(
            err,
            StreamError::PushbackOverflow {
                capacity: 2,
                requested: 3
            }
        ));
        assert_eq!(input.pushed_back(), 0);

        input.unread(b"a").unwrap();
        assert!(input.unread(b"bc").is_err());
        assert_eq!(input.available(), 6);
    }

    #[test]
    fn test_default_capacity_is_one() {
        let mut input = PushbackInputStream::new(MemoryInputStream::new(b"x".to_vec()));
        assert_eq!(input.capacity(), 1);
        input.unread(b"y").unwrap();
        assert!(input.unread(b"z").is_err());
    }

    #[test]
    fn test_unread_errors() {
        let mut input = pushback(b"", 16);
        assert!(input.unread_substring(b"hello", 6, 1).unwrap_err().is_out_of_bounds());

        input.close().unwrap();
        assert!(matches!(input.unread(b"a"), Err(StreamError::Closed)));
        assert!(input.unread_substring(b"a", 2, 1).unwrap_err().is_out_of_bounds());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let source = MemoryInputStream::new(b"x".to_vec());
        assert!(matches!(
            PushbackInputStream::with_capacity(source, 0),
            Err(StreamError::InvalidConfig(_))
        ));
    }
}

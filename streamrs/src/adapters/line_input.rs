//! Line-splitting input stream.

use alloc::vec::Vec;

use super::BufferableFilterInputStream;
use crate::domain::{InputStream, ReadOutcome, Result, StreamError};

/// Input stream reading its subordinate stream one `\n`-terminated line at a
/// time.
///
/// # Examples
///
/// ```
/// use streamrs::{LineInputStream, MemoryInputStream};
///
/// let mut lines = LineInputStream::new(MemoryInputStream::new(b"one\ntwo".to_vec()));
/// assert_eq!(lines.read_line().unwrap().as_deref(), Some(&b"one\n"[..]));
/// assert_eq!(lines.read_line().unwrap().as_deref(), Some(&b"two"[..]));
/// assert_eq!(lines.read_line().unwrap(), None);
/// ```
#[derive(Debug, Clone)]
pub struct LineInputStream<I> {
    base: BufferableFilterInputStream<I>,
}

impl<I: InputStream> LineInputStream<I> {
    /// Wrap `inner`, reading 1024 bytes at a time.
    pub fn new(inner: I) -> Self {
        Self {
            base: BufferableFilterInputStream::new(inner),
        }
    }

    /// Wrap `inner`, reading `read_buffer_size` bytes at a time.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::InvalidConfig`] if `read_buffer_size` is zero.
    pub fn with_read_buffer_size(inner: I, read_buffer_size: usize) -> Result<Self> {
        Ok(Self {
            base: BufferableFilterInputStream::with_read_buffer_size(inner, read_buffer_size)?,
        })
    }

    /// Access the subordinate stream.
    #[inline]
    pub const fn get_ref(&self) -> &I {
        self.base.get_ref()
    }

    /// Read the next line, terminator included.
    ///
    /// At the end of the stream, bytes without a terminator are returned as
    /// a last line; after that `None` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::Closed`] if the stream is closed, or any error
    /// of the subordinate stream.
    pub fn read_line(&mut self) -> Result<Option<Vec<u8>>> {
        if self.base.is_closed() {
            return Err(StreamError::Closed);
        }

        let mut chunk = Vec::new();
        let terminator = loop {
            if let Some(index) = self.base.find(b'\n') {
                break Some(index);
            }

            let read_buffer_size = self.base.read_buffer_size();
            match self.base.get_mut().read(&mut chunk, read_buffer_size)? {
                ReadOutcome::Bytes(n) if n > 0 => self.base.append(&chunk),
                _ => break None,
            }
        };

        let line = match terminator {
            Some(index) => self.base.take_front(index + 1),
            None if self.base.buffered_len() > 0 => {
                let rest = self.base.buffered_len();
                self.base.take_front(rest)
            }
            None => return Ok(None),
        };

        Ok(Some(line))
    }
}

impl<I: InputStream> InputStream for LineInputStream<I> {
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

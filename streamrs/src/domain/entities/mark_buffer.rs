//! MarkBuffer entity - the look-ahead buffer behind mark/reset.

use alloc::vec::Vec;

use crate::domain::error::{Result, StreamError};
use crate::domain::ports::InputStream;
use crate::domain::presets::DEFAULT_BUFFER_SIZE;

/// Growable look-ahead buffer with a mark/reset checkpoint.
///
/// The buffer holds `count` valid bytes of which `[offset, count)` have not
/// been served yet. A mark pins the bytes from `mark` onwards so a later
/// [`reset`](Self::reset) can serve them again.
///
/// # Invariants
///
/// - `0 <= offset <= count`
/// - `mark` is unset or `0 <= mark <= offset`
///
/// # Refill rules
///
/// [`fill`](Self::fill) runs when every buffered byte has been served:
///
/// | mark state                               | action                                     |
/// |------------------------------------------|--------------------------------------------|
/// | unset, or `offset - mark >= mark_limit`  | drop everything, unset the mark            |
/// | `mark > 0`                               | shift `[mark, count)` to the front         |
/// | `mark == 0`                              | keep everything                            |
///
/// and then appends up to `buffer_size` bytes from the upstream stream.
///
/// The limit is only enforced by `fill`: a mark stays usable past its limit for
/// as long as buffered bytes satisfy the reads.
#[derive(Debug, Clone)]
pub struct MarkBuffer {
    buffer: Vec<u8>,
    buffer_size: usize,
    offset: usize,
    mark: Option<usize>,
    mark_limit: usize,
}

impl MarkBuffer {
    /// Create an empty buffer that refills `buffer_size` bytes at a time.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::InvalidConfig`] if `buffer_size` is zero.
    pub fn new(buffer_size: usize) -> Result<Self> {
        if buffer_size == 0 {
            return Err(StreamError::InvalidConfig("buffer size must be greater than zero"));
        }

        Ok(Self {
            buffer: Vec::new(),
            buffer_size,
            offset: 0,
            mark: None,
            mark_limit: 0,
        })
    }

    /// Bytes requested from upstream on each refill.
    #[inline]
    pub const fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Read position within the buffer.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Number of valid bytes in the buffer.
    #[inline]
    pub fn count(&self) -> usize {
        self.buffer.len()
    }

    /// Current mark, if any.
    #[inline]
    pub const fn mark_position(&self) -> Option<usize> {
        self.mark
    }

    /// Limit given to the last [`mark`](Self::mark).
    #[inline]
    pub const fn mark_limit(&self) -> usize {
        self.mark_limit
    }

    /// The valid bytes, served or not.
    #[inline]
    pub fn buffered(&self) -> &[u8] {
        &self.buffer
    }

    /// Bytes buffered but not served yet.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.count() - self.offset
    }

    /// Check if every buffered byte has been served.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.offset == self.count()
    }

    /// Serve up to `length` unserved bytes, appending them to `dest`.
    ///
    /// Returns the number of bytes served.
    pub fn serve(&mut self, dest: &mut Vec<u8>, length: usize) -> usize {
        let n = length.min(self.remaining());
        dest.extend_from_slice(&self.buffer[self.offset..self.offset + n]);
        self.offset += n;
        self.check_invariants();
        n
    }

    /// Apply the refill rules and pull up to `buffer_size` bytes from `upstream`.
    ///
    /// Returns whether any byte was obtained.
    ///
    /// # Errors
    ///
    /// Propagates any error of the upstream primitive.
    pub fn fill<U>(&mut self, upstream: &mut U) -> Result<bool>
    where
        U: InputStream + ?Sized,
    {
        match self.mark {
            Some(mark) if self.offset - mark < self.mark_limit => {
                if mark > 0 {
                    self.buffer.drain(..mark);
                    self.offset -= mark;
                    self.mark = Some(0);
                }
            }
            _ => {
                self.buffer.clear();
                self.offset = 0;
                self.mark = None;
            }
        }

        let before = self.buffer.len();
        upstream.input(&mut self.buffer, self.buffer_size)?;
        let obtained = self.buffer.len() - before;

        trace!(
            "mark buffer refilled: {} bytes obtained, offset {}, count {}",
            obtained,
            self.offset,
            self.buffer.len()
        );

        self.check_invariants();
        Ok(obtained > 0)
    }

    /// Remember the current offset, valid for `limit` more served bytes.
    pub fn mark(&mut self, limit: usize) {
        self.mark_limit = limit;
        self.mark = Some(self.offset);
        self.check_invariants();
    }

    /// Rewind to the mark.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::InvalidMark`] if no mark is set.
    pub fn reset(&mut self) -> Result<()> {
        let mark = self.mark.ok_or(StreamError::InvalidMark)?;
        self.offset = mark;
        self.check_invariants();
        Ok(())
    }

    /// Drop the buffered bytes and their allocation.
    pub fn release(&mut self) {
        self.buffer = Vec::new();
        self.offset = 0;
        self.mark = None;
    }

    #[inline]
    fn check_invariants(&self) {
        debug_assert!(self.offset <= self.buffer.len(), "offset past count");
        debug_assert!(
            self.mark.is_none_or(|mark| mark <= self.offset),
            "mark past offset"
        );
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        buffer: &[u8],
        buffer_size: usize,
        offset: usize,
        mark: Option<usize>,
        mark_limit: usize,
    ) -> Self {
        let parts = Self {
            buffer: buffer.to_vec(),
            buffer_size,
            offset,
            mark,
            mark_limit,
        };
        parts.check_invariants();
        parts
    }
}

impl Default for MarkBuffer {
    /// An empty buffer refilling 1024 bytes at a time.
    fn default() -> Self {
        Self {
            buffer: Vec::new(),
            buffer_size: DEFAULT_BUFFER_SIZE,
            offset: 0,
            mark: None,
            mark_limit: 0,
        }
    }
}

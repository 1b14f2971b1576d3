//! InputStream port - the contract every byte source fulfils.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::domain::error::{Result, StreamError};
use crate::domain::presets::DEFAULT_SKIP_CHUNK;
use crate::domain::value_objects::{ReadOutcome, Span, saturating_isize};

/// A source of bytes.
///
/// Implementors provide the primitive [`input`](Self::input) hook and the
/// lifecycle accessors; the provided methods turn them into the full
/// contract ([`read`](Self::read), [`read_substring`](Self::read_substring),
/// [`skip`](Self::skip)). Streams that support mark/reset override
/// [`mark_supported`](Self::mark_supported), [`mark`](Self::mark) and
/// [`reset`](Self::reset) together.
///
/// Decorators hold another stream and are streams themselves, so chains of
/// any length compose:
///
/// ```text
///  read_line() ─► LineInputStream ─► BufferedInputStream ─► FileInputStream ─► host
/// ```
///
/// `Box<dyn InputStream>` and `&mut dyn InputStream` implement the trait too.
///
/// # Examples
///
/// ```
/// use streamrs::{InputStream, MemoryInputStream, ReadOutcome};
///
/// let mut input = MemoryInputStream::new(b"hello".to_vec());
/// let mut bytes = b"__".to_vec();
///
/// // Offsets and lengths may count from the end.
/// let outcome = input.read_substring(&mut bytes, -1, 3).unwrap();
/// assert_eq!(outcome, ReadOutcome::Bytes(3));
/// assert_eq!(bytes, b"_hel");
/// ```
pub trait InputStream {
    /// Append up to `length` bytes to `bytes`.
    ///
    /// Returns [`ReadOutcome::Eof`] only when `length > 0` and nothing could
    /// be produced. Implementations advance their position by the number of
    /// bytes delivered and fail with [`StreamError::Closed`] once closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream is closed or the source failed.
    fn input(&mut self, bytes: &mut Vec<u8>, length: usize) -> Result<ReadOutcome>;

    /// Best-effort count of bytes that can still be read.
    fn available(&self) -> usize;

    /// Bytes delivered by the primitive so far.
    fn position(&self) -> u64;

    /// Check if the stream is closed.
    fn is_closed(&self) -> bool;

    /// Close the stream, releasing its buffers.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::AlreadyClosed`] if the stream is already closed.
    fn close(&mut self) -> Result<()>;

    /// Check if [`mark`](Self::mark) and [`reset`](Self::reset) are supported.
    fn mark_supported(&self) -> bool {
        false
    }

    /// Remember the current position, valid for `limit` further bytes.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::MarkUnsupported`] unless overridden.
    fn mark(&mut self, limit: usize) -> Result<()> {
        let _ = limit;
        Err(StreamError::MarkUnsupported)
    }

    /// Rewind to the last mark.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::MarkUnsupported`] unless overridden.
    fn reset(&mut self) -> Result<()> {
        Err(StreamError::MarkUnsupported)
    }

    /// Type name of the concrete stream.
    fn name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Replace the content of `bytes` with up to `length` bytes.
    ///
    /// # Errors
    ///
    /// Same as [`read_substring`](Self::read_substring).
    fn read(&mut self, bytes: &mut Vec<u8>, length: usize) -> Result<ReadOutcome> {
        bytes.clear();
        self.read_substring(bytes, 0, saturating_isize(length))
    }

    /// Read up to `length` bytes into `bytes` starting at `offset`.
    ///
    /// `offset` and `length` are normalized by [`Span`]. Bytes read overwrite
    /// `bytes` from `offset` on and grow it when they run past its end. A
    /// normalized length of zero reads nothing and returns `Bytes(0)`.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::OutOfBounds`] if `offset` is past the end of
    /// `bytes`, then [`StreamError::Closed`] if the stream is closed.
    fn read_substring(
        &mut self,
        bytes: &mut Vec<u8>,
        offset: isize,
        length: isize,
    ) -> Result<ReadOutcome> {
        let span = Span::new(offset, length).normalize(bytes.len())?;

        if self.is_closed() {
            return Err(StreamError::Closed);
        }

        if span.is_empty() {
            return Ok(ReadOutcome::Bytes(0));
        }

        let mut chunk = Vec::new();
        let outcome = self.input(&mut chunk, span.length())?;

        let start = span.offset();
        let end = start + chunk.len();
        if end > bytes.len() {
            bytes.resize(end, 0);
        }
        bytes[start..end].copy_from_slice(&chunk);

        Ok(outcome)
    }

    /// Read and discard up to `length` bytes, 1024 at a time.
    ///
    /// Returns the number of bytes skipped, which is less than `length` only
    /// when the stream ended.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::Closed`] if the stream is closed.
    fn skip(&mut self, length: usize) -> Result<usize> {
        self.skip_with_chunk(length, DEFAULT_SKIP_CHUNK)
    }

    /// Read and discard up to `length` bytes, `chunk_size` at a time.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::InvalidConfig`] if `chunk_size` is zero and
    /// [`StreamError::Closed`] if the stream is closed.
    fn skip_with_chunk(&mut self, length: usize, chunk_size: usize) -> Result<usize> {
        if chunk_size == 0 {
            return Err(StreamError::InvalidConfig("skip chunk size must be greater than zero"));
        }

        if self.is_closed() {
            return Err(StreamError::Closed);
        }

        let mut remaining = length;
        let mut chunk = Vec::new();

        while remaining > 0 {
            chunk.clear();
            match self.input(&mut chunk, remaining.min(chunk_size))? {
                ReadOutcome::Bytes(n) if n > 0 => remaining -= n.min(remaining),
                _ => break,
            }
        }

        Ok(length - remaining)
    }
}

impl<T: InputStream + ?Sized> InputStream for Box<T> {
    fn input(&mut self, bytes: &mut Vec<u8>, length: usize) -> Result<ReadOutcome> {
        (**self).input(bytes, length)
    }

    fn available(&self) -> usize {
        (**self).available()
    }

    fn position(&self) -> u64 {
        (**self).position()
    }

    fn is_closed(&self) -> bool {
        (**self).is_closed()
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }

    fn mark_supported(&self) -> bool {
        (**self).mark_supported()
    }

    fn mark(&mut self, limit: usize) -> Result<()> {
        (**self).mark(limit)
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<T: InputStream + ?Sized> InputStream for &mut T {
    fn input(&mut self, bytes: &mut Vec<u8>, length: usize) -> Result<ReadOutcome> {
        (**self).input(bytes, length)
    }

    fn available(&self) -> usize {
        (**self).available()
    }

    fn position(&self) -> u64 {
        (**self).position()
    }

    fn is_closed(&self) -> bool {
        (**self).is_closed()
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }

    fn mark_supported(&self) -> bool {
        (**self).mark_supported()
    }

    fn mark(&mut self, limit: usize) -> Result<()> {
        (**self).mark(limit)
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

//! OutputStream port - the contract every byte sink fulfils.

use alloc::boxed::Box;

use crate::domain::error::{Result, StreamError};
use crate::domain::value_objects::{Span, saturating_isize};

/// A sink of bytes.
///
/// Implementors provide the primitive [`output`](Self::output) hook; the
/// provided [`write`](Self::write) and [`write_substring`](Self::write_substring)
/// methods normalize the requested window and check the closed state first.
///
/// # Examples
///
/// ```
/// use streamrs::{MemoryOutputStream, OutputStream};
///
/// let mut output = MemoryOutputStream::new();
/// output.write(b"hello").unwrap();
/// output.write_substring(b", world!", 0, -1).unwrap();
/// assert_eq!(output.as_bytes(), b"hello, world");
/// ```
pub trait OutputStream {
    /// Write `bytes`, returning how many were accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream is closed or the sink failed.
    fn output(&mut self, bytes: &[u8]) -> Result<usize>;

    /// Check if the stream is closed.
    fn is_closed(&self) -> bool;

    /// Close the stream.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::AlreadyClosed`] if the stream is already closed.
    fn close(&mut self) -> Result<()>;

    /// Push buffered bytes to the sink. No-op by default.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink failed.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    /// Write all of `bytes`.
    ///
    /// # Errors
    ///
    /// Same as [`write_substring`](Self::write_substring).
    fn write(&mut self, bytes: &[u8]) -> Result<usize> {
        self.write_substring(bytes, 0, saturating_isize(bytes.len()))
    }

    /// Write `bytes[offset .. offset + length]`, clamped to the end of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::OutOfBounds`] if `offset` is past the end of
    /// `bytes`, then [`StreamError::Closed`] if the stream is closed.
    fn write_substring(&mut self, bytes: &[u8], offset: isize, length: isize) -> Result<usize> {
        let span = Span::new(offset, length).normalize(bytes.len())?;

        if self.is_closed() {
            return Err(StreamError::Closed);
        }

        if span.is_empty() {
            return Ok(0);
        }

        self.output(&bytes[span.clamp(bytes.len())])
    }
}

impl<T: OutputStream + ?Sized> OutputStream for Box<T> {
    fn output(&mut self, bytes: &[u8]) -> Result<usize> {
        (**self).output(bytes)
    }

    fn is_closed(&self) -> bool {
        (**self).is_closed()
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

impl<T: OutputStream + ?Sized> OutputStream for &mut T {
    fn output(&mut self, bytes: &[u8]) -> Result<usize> {
        (**self).output(bytes)
    }

    fn is_closed(&self) -> bool {
        (**self).is_closed()
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

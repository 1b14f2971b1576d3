//! Bridge from streams to the `embedded_io` traits.
//!
//! [`IoReader`] and [`IoWriter`] expose any stream as `embedded_io::Read` /
//! `embedded_io::Write`, so the rest of the embedded-io ecosystem (and, via
//! `embedded-io-adapters`, `std::io`) can consume it. End of stream maps to
//! `Ok(0)`.

use alloc::vec::Vec;

use crate::domain::{InputStream, OutputStream, ReadOutcome, StreamError};
use embedded_io::{ErrorType, Read, Write};

/// `embedded_io::Read` view of an [`InputStream`].
///
/// # Examples
///
/// ```
/// use streamrs::{IoReader, MemoryInputStream};
/// use streamrs::embedded_io::Read;
///
/// let mut reader = IoReader::new(MemoryInputStream::new(b"hello".to_vec()));
/// let mut buf = [0u8; 8];
/// assert_eq!(reader.read(&mut buf).unwrap(), 5);
/// assert_eq!(reader.read(&mut buf).unwrap(), 0);
/// ```
#[derive(Debug)]
pub struct IoReader<I> {
    inner: I,
    scratch: Vec<u8>,
}

impl<I: InputStream> IoReader<I> {
    /// Wrap `inner`.
    pub const fn new(inner: I) -> Self {
        Self {
            inner,
            scratch: Vec::new(),
        }
    }

    /// Access the wrapped stream.
    #[inline]
    pub const fn get_ref(&self) -> &I {
        &self.inner
    }

    /// Mutable access to the wrapped stream.
    #[inline]
    pub fn get_mut(&mut self) -> &mut I {
        &mut self.inner
    }

    /// Unwrap the stream.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: InputStream> ErrorType for IoReader<I> {
    type Error = StreamError;
}

impl<I: InputStream> Read for IoReader<I> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if buf.is_empty() {
            return Ok(0);
        }

        self.scratch.clear();
        match self.inner.input(&mut self.scratch, buf.len())? {
            ReadOutcome::Eof => Ok(0),
            ReadOutcome::Bytes(n) => {
                buf[..n].copy_from_slice(&self.scratch[..n]);
                Ok(n)
            }
        }
    }
}

/// `embedded_io::Write` view of an [`OutputStream`].
///
/// A successful write takes all of `buf`, whatever the stream reports
/// passing downstream: encoders write more bytes than they are given, and
/// filters dropping bytes write fewer.
#[derive(Debug)]
pub struct IoWriter<O> {
    inner: O,
}

impl<O: OutputStream> IoWriter<O> {
    /// Wrap `inner`.
    pub const fn new(inner: O) -> Self {
        Self { inner }
    }

    /// Access the wrapped stream.
    #[inline]
    pub const fn get_ref(&self) -> &O {
        &self.inner
    }

    /// Mutable access to the wrapped stream.
    #[inline]
    pub fn get_mut(&mut self) -> &mut O {
        &mut self.inner
    }

    /// Unwrap the stream.
    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<O: OutputStream> ErrorType for IoWriter<O> {
    type Error = StreamError;
}

impl<O: OutputStream> Write for IoWriter<O> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.inner.write(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MemoryInputStream, MemoryOutputStream};
    use crate::infrastructure::piped::pipe;

    #[test]
    fn test_reader_reports_closed_stream() {
        let mut input = MemoryInputStream::new(b"abc".to_vec());
        input.close().unwrap();

        let mut reader = IoReader::new(input);
        let mut buf = [0u8; 4];
        assert!(matches!(reader.read(&mut buf), Err(StreamError::Closed)));
        assert_eq!(reader.read(&mut []).unwrap(), 0);
    }

    #[test]
    fn test_write_all_through_pipe() {
        let (output, input) = pipe();
        let mut writer = IoWriter::new(output);
        writer.write_all(b"hello, world!").unwrap();
        writer.flush().unwrap();

        let mut reader = IoReader::new(input);
        let mut buf = [0u8; 13];
        reader.read_exact(&mut buf).unwrap();
        assert_eq!(&buf, b"hello, world!");
    }

    /// Writes every byte twice.
    struct Doubling(MemoryOutputStream);

    impl OutputStream for Doubling {
        fn output(&mut self, bytes: &[u8]) -> crate::domain::Result<usize> {
            let doubled: Vec<u8> = bytes.iter().flat_map(|&byte| [byte, byte]).collect();
            self.0.output(&doubled)
        }

        fn is_closed(&self) -> bool {
            self.0.is_closed()
        }

        fn close(&mut self) -> crate::domain::Result<()> {
            self.0.close()
        }
    }

    #[test]
    fn test_write_counts_consumed_bytes() {
        let mut writer = IoWriter::new(Doubling(MemoryOutputStream::new()));
        assert_eq!(writer.write(b"ab").unwrap(), 2);
        writer.write_all(b"cd").unwrap();
        assert_eq!(writer.get_ref().0.as_bytes(), b"aabbccdd");
    }

    #[test]
    fn test_writer_into_inner() {
        let mut writer = IoWriter::new(MemoryOutputStream::new());
        writer.write(b"abc").unwrap();
        assert_eq!(writer.into_inner().as_bytes(), b"abc");
    }
}

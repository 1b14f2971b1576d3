//! Binary to hexadecimal output stream.

use alloc::vec::Vec;

use streamrs::{FilterOutputStream, OutputStream, Result};

use super::digits;

/// Output stream writing every byte as two uppercase hexadecimal digits.
///
/// [`output`](OutputStream::output) returns the number of digits written.
///
/// # Examples
///
/// ```
/// use streamrs::{MemoryOutputStream, OutputStream};
/// use streamrs_codecs::HexEncodeOutputStream;
///
/// let mut output = HexEncodeOutputStream::new(MemoryOutputStream::new());
/// assert_eq!(output.write(b"hello").unwrap(), 10);
/// assert_eq!(output.get_ref().as_bytes(), b"68656C6C6F");
/// ```
#[derive(Debug, Clone)]
pub struct HexEncodeOutputStream<O> {
    inner: FilterOutputStream<O>,
    encoded: Vec<u8>,
}

impl<O: OutputStream> HexEncodeOutputStream<O> {
    /// Encode into `inner`.
    pub fn new(inner: O) -> Self {
        Self {
            inner: FilterOutputStream::new(inner),
            encoded: Vec::new(),
        }
    }

    /// Access the subordinate stream.
    #[inline]
    pub const fn get_ref(&self) -> &O {
        self.inner.get_ref()
    }

    /// Unwrap the subordinate stream.
    pub fn into_inner(self) -> O {
        self.inner.into_inner()
    }
}

impl<O: OutputStream> OutputStream for HexEncodeOutputStream<O> {
    fn output(&mut self, bytes: &[u8]) -> Result<usize> {
        self.encoded.clear();
        self.encoded.reserve(bytes.len() * 2);
        for &byte in bytes {
            self.encoded.extend_from_slice(&digits(byte));
        }
        self.inner.output(&self.encoded)
    }

    fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }

    fn close(&mut self) -> Result<()> {
        self.encoded = Vec::new();
        self.inner.close()
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()
    }
}

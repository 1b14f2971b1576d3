//! Hexadecimal to binary input stream.

use alloc::vec::Vec;

use streamrs::{InputStream, ReadOutcome, Result, StreamError, UncountableFilterInputStream};

use super::{digit_value, is_space};

/// Input stream decoding ASCII hexadecimal from its subordinate stream.
///
/// A digit left over at the end of one read is kept for the next. If the
/// subordinate stream ends on an odd digit, the digit is completed with `0`,
/// so `"7"` decodes to `0x70`.
///
/// The number of decoded bytes left cannot be known in advance:
/// [`available`](InputStream::available) is 1 while input may remain and 0
/// after.
///
/// A byte that is neither a digit nor whitespace fails the read with
/// [`StreamError::InvalidByte`] and closes the stream, discarding the bytes
/// decoded by that read.
///
/// # Examples
///
/// ```
/// use streamrs::{InputStream, MemoryInputStream};
/// use streamrs_codecs::HexDecodeInputStream;
///
/// let mut input = HexDecodeInputStream::new(MemoryInputStream::new(b"6869\n".to_vec()));
/// let mut bytes = Vec::new();
/// input.read(&mut bytes, 1).unwrap();
/// assert_eq!(bytes, b"h");
/// assert_eq!(input.available(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct HexDecodeInputStream<I> {
    inner: UncountableFilterInputStream<I>,
    pending: Option<u8>,
    raw: Vec<u8>,
    position: u64,
}

impl<I: InputStream> HexDecodeInputStream<I> {
    /// Decode `inner`.
    pub fn new(inner: I) -> Self {
        Self {
            inner: UncountableFilterInputStream::new(inner),
            pending: None,
            raw: Vec::new(),
            position: 0,
        }
    }

    /// Access the subordinate stream.
    #[inline]
    pub const fn get_ref(&self) -> &I {
        self.inner.get_ref()
    }

    /// Unwrap the subordinate stream, dropping a pending digit.
    pub fn into_inner(self) -> I {
        self.inner.into_inner()
    }

    fn abandon(&mut self) {
        self.pending = None;
        self.raw = Vec::new();
        let _ = self.inner.close();
    }
}

impl<I: InputStream> InputStream for HexDecodeInputStream<I> {
    fn input(&mut self, bytes: &mut Vec<u8>, length: usize) -> Result<ReadOutcome> {
        if self.inner.is_closed() {
            return Err(StreamError::Closed);
        }

        if length == 0 {
            return Ok(ReadOutcome::Bytes(0));
        }

        let start = bytes.len();
        let mut produced = 0;
        while produced == 0 {
            // Never pull more digits than `length` bytes need.
            let wanted = length.saturating_mul(2) - usize::from(self.pending.is_some());

            self.raw.clear();
            if self.inner.input(&mut self.raw, wanted)?.is_eof() {
                if let Some(high) = self.pending.take() {
                    bytes.push(high << 4);
                    produced += 1;
                }
                break;
            }

            let mut invalid = None;
            for &byte in &self.raw {
                if is_space(byte) {
                    continue;
                }

                let Some(value) = digit_value(byte) else {
                    invalid = Some(byte);
                    break;
                };
                match self.pending.take() {
                    Some(high) => {
                        bytes.push(high << 4 | value);
                        produced += 1;
                    }
                    None => self.pending = Some(value),
                }
            }

            if let Some(byte) = invalid {
                #[cfg(feature = "log")]
                log::debug!("invalid hexadecimal byte 0x{:02X}, closing", byte);

                bytes.truncate(start);
                self.abandon();
                return Err(StreamError::InvalidByte { byte });
            }
        }

        self.position += produced as u64;
        Ok(ReadOutcome::from_count(produced, length))
    }

    fn available(&self) -> usize {
        usize::from(self.pending.is_some()).max(self.inner.available())
    }

    fn position(&self) -> u64 {
        self.position
    }

    fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }

    fn close(&mut self) -> Result<()> {
        self.pending = None;
        self.raw = Vec::new();
        self.inner.close()
    }
}

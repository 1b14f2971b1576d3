//! Factory recognizing hexadecimal input.

use alloc::boxed::Box;
use alloc::vec::Vec;

use streamrs::{FilterFactory, InputStream, Result, StreamError};

use super::{HexDecodeInputStream, is_space};

/// [`FilterFactory`] for [`HexDecodeInputStream`].
///
/// A stream is recognized when its first `probe_len` bytes hold at least
/// one hexadecimal digit and nothing but digits and whitespace.
///
/// # Examples
///
/// ```
/// use streamrs::{FilterResolver, InputStream, MemoryInputStream};
/// use streamrs_codecs::HexDecodeFactory;
///
/// let mut resolver = FilterResolver::new();
/// resolver.add_factory(HexDecodeFactory::default());
///
/// let input = Box::new(MemoryInputStream::new(b"68656C6C6F".to_vec()));
/// let mut decoded = resolver.resolve(input).unwrap().into_inner();
///
/// let mut bytes = Vec::new();
/// decoded.read(&mut bytes, 5).unwrap();
/// assert_eq!(bytes, b"hello");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HexDecodeFactory {
    probe_len: usize,
}

impl HexDecodeFactory {
    /// Bytes sniffed by default.
    pub const DEFAULT_PROBE_LEN: usize = 64;

    /// Create a factory sniffing `probe_len` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::InvalidConfig`] if `probe_len` is zero.
    pub fn new(probe_len: usize) -> Result<Self> {
        if probe_len == 0 {
            return Err(StreamError::InvalidConfig("probe length must be greater than zero"));
        }
        Ok(Self { probe_len })
    }

    /// Bytes sniffed from the stream.
    #[inline]
    pub const fn probe_len(&self) -> usize {
        self.probe_len
    }
}

impl Default for HexDecodeFactory {
    fn default() -> Self {
        Self {
            probe_len: Self::DEFAULT_PROBE_LEN,
        }
    }
}

impl FilterFactory for HexDecodeFactory {
    fn support(&self, input: &mut dyn InputStream) -> Result<bool> {
        if !input.mark_supported() {
            return Err(StreamError::MarkRequired {
                stream: input.name(),
            });
        }

        let mut probe = Vec::with_capacity(self.probe_len);
        // A buffer exhausted exactly at the mark limit expires the mark on
        // refill, so keep one byte of slack past the sniffed window.
        input.mark(self.probe_len.saturating_add(1))?;
        let read = input.read(&mut probe, self.probe_len);
        input.reset()?;
        read?;

        let supported = probe.iter().any(u8::is_ascii_hexdigit)
            && probe
                .iter()
                .all(|&byte| byte.is_ascii_hexdigit() || is_space(byte));

        #[cfg(feature = "log")]
        log::trace!("hex probe over {} bytes: {}", probe.len(), supported);

        Ok(supported)
    }

    fn create(&self, input: Box<dyn InputStream>) -> Box<dyn InputStream> {
        Box::new(HexDecodeInputStream::new(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streamrs::{BufferedInputStream, MemoryInputStream};

    fn buffered(bytes: &[u8]) -> BufferedInputStream<MemoryInputStream> {
        BufferedInputStream::new(MemoryInputStream::new(bytes.to_vec()))
    }

    #[test]
    fn test_supports_hex_and_leaves_stream_in_place() {
        let factory = HexDecodeFactory::default();
        let mut input = buffered(b"68 65\n6C6C6F");

        assert!(factory.support(&mut input).unwrap());
        assert_eq!(input.available(), 12);

        let mut bytes = Vec::new();
        input.read(&mut bytes, 2).unwrap();
        assert_eq!(bytes, b"68");
    }

    #[test]
    fn test_sniff_ending_on_buffer_boundary() {
        let hex: Vec<u8> = b"0123456789ABCDEF".iter().copied().cycle().take(200).collect();
        let factory = HexDecodeFactory::default();

        for buffer_size in [1, 7, 16, 32, 64, 65, 1024] {
            let source = MemoryInputStream::new(hex.clone());
            let mut input = BufferedInputStream::with_buffer_size(source, buffer_size).unwrap();

            assert!(factory.support(&mut input).unwrap(), "buffer size {buffer_size}");

            let mut bytes = Vec::new();
            input.read(&mut bytes, 200).unwrap();
            assert_eq!(bytes, hex, "buffer size {buffer_size}");
        }
    }

    #[test]
    fn test_rejects_other_input() {
        let factory = HexDecodeFactory::new(4).unwrap();
        assert!(!factory.support(&mut buffered(b"hello")).unwrap());
        assert!(!factory.support(&mut buffered(b"    ")).unwrap());
        assert!(!factory.support(&mut buffered(b"")).unwrap());

        // Only the probe window is inspected.
        assert!(factory.support(&mut buffered(b"6865 and more")).unwrap());
    }

    #[test]
    fn test_requires_mark() {
        let mut input = MemoryInputStream::new(b"6865".to_vec());
        let err = HexDecodeFactory::default().support(&mut input).unwrap_err();
        assert!(matches!(err, StreamError::MarkRequired { .. }));
    }

    #[test]
    fn test_zero_probe_len_rejected() {
        assert!(HexDecodeFactory::new(0).is_err());
    }
}

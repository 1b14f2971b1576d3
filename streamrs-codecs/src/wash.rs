//! Wash filters: remove a set of bytes from the data in transit.
//!
//! The default rule removes whitespace (`\n`, `\t`, `\r`, `' '`), which turns
//! line-wrapped hexadecimal dumps into a single run of digits.

use alloc::vec::Vec;

use streamrs::{
    FilterOutputStream, InputStream, OutputStream, ReadOutcome, Result, StreamError,
    UncountableFilterInputStream,
};

/// Set of bytes removed by the wash filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WashRule {
    removed: [bool; 256],
}

impl WashRule {
    /// Rule removing every byte in `bytes`.
    pub const fn new(bytes: &[u8]) -> Self {
        let mut removed = [false; 256];
        let mut i = 0;
        while i < bytes.len() {
            removed[bytes[i] as usize] = true;
            i += 1;
        }
        Self { removed }
    }

    /// Rule removing `\n`, `\t`, `\r` and `' '`.
    pub const fn whitespace() -> Self {
        Self::new(b"\n\t\r ")
    }

    /// Check if `byte` is removed.
    #[inline]
    pub const fn removes(&self, byte: u8) -> bool {
        self.removed[byte as usize]
    }

    /// Append the bytes of `src` the rule keeps to `dest`.
    pub fn wash_into(&self, src: &[u8], dest: &mut Vec<u8>) {
        dest.extend(src.iter().copied().filter(|&byte| !self.removes(byte)));
    }
}

impl Default for WashRule {
    fn default() -> Self {
        Self::whitespace()
    }
}

/// Input stream removing the bytes of a [`WashRule`] from its subordinate
/// stream.
///
/// Reads keep pulling until `length` washed bytes are produced or the
/// subordinate stream ends. [`available`](InputStream::available) is 1 while
/// raw input remains and 0 after.
#[derive(Debug, Clone)]
pub struct WashInputStream<I> {
    inner: UncountableFilterInputStream<I>,
    rule: WashRule,
    raw: Vec<u8>,
    position: u64,
}

impl<I: InputStream> WashInputStream<I> {
    /// Remove whitespace from `inner`.
    pub fn new(inner: I) -> Self {
        Self::with_rule(inner, WashRule::whitespace())
    }

    /// Remove the bytes of `rule` from `inner`.
    pub fn with_rule(inner: I, rule: WashRule) -> Self {
        Self {
            inner: UncountableFilterInputStream::new(inner),
            rule,
            raw: Vec::new(),
            position: 0,
        }
    }

    /// The rule applied.
    #[inline]
    pub const fn rule(&self) -> &WashRule {
        &self.rule
    }

    /// Access the subordinate stream.
    #[inline]
    pub const fn get_ref(&self) -> &I {
        self.inner.get_ref()
    }
}

impl<I: InputStream> InputStream for WashInputStream<I> {
    fn input(&mut self, bytes: &mut Vec<u8>, length: usize) -> Result<ReadOutcome> {
        if self.inner.is_closed() {
            return Err(StreamError::Closed);
        }

        let start = bytes.len();
        while bytes.len() - start < length {
            self.raw.clear();
            let remaining = length - (bytes.len() - start);
            if self.inner.input(&mut self.raw, remaining)?.is_eof() {
                break;
            }
            self.rule.wash_into(&self.raw, bytes);
        }

        let produced = bytes.len() - start;
        self.position += produced as u64;
        Ok(ReadOutcome::from_count(produced, length))
    }

    fn available(&self) -> usize {
        self.inner.available()
    }

    fn position(&self) -> u64 {
        self.position
    }

    fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }

    fn close(&mut self) -> Result<()> {
        self.raw = Vec::new();
        self.inner.close()
    }
}

/// Output stream removing the bytes of a [`WashRule`] before writing.
///
/// [`output`](OutputStream::output) returns the number of bytes left after
/// washing.
///
/// # Examples
///
/// ```
/// use streamrs::{MemoryOutputStream, OutputStream};
/// use streamrs_codecs::WashOutputStream;
///
/// let mut output = WashOutputStream::new(MemoryOutputStream::new());
/// assert_eq!(output.write(b"6\n8\t6\r5 6C6C6F\n").unwrap(), 10);
/// assert_eq!(output.get_ref().as_bytes(), b"68656C6C6F");
/// ```
#[derive(Debug, Clone)]
pub struct WashOutputStream<O> {
    inner: FilterOutputStream<O>,
    rule: WashRule,
    washed: Vec<u8>,
}

impl<O: OutputStream> WashOutputStream<O> {
    /// Remove whitespace before writing to `inner`.
    pub fn new(inner: O) -> Self {
        Self::with_rule(inner, WashRule::whitespace())
    }

    /// Remove the bytes of `rule` before writing to `inner`.
    pub fn with_rule(inner: O, rule: WashRule) -> Self {
        Self {
            inner: FilterOutputStream::new(inner),
            rule,
            washed: Vec::new(),
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

impl<O: OutputStream> OutputStream for WashOutputStream<O> {
    fn output(&mut self, bytes: &[u8]) -> Result<usize> {
        self.washed.clear();
        self.rule.wash_into(bytes, &mut self.washed);
        self.inner.output(&self.washed)
    }

    fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }

    fn close(&mut self) -> Result<()> {
        self.washed = Vec::new();
        self.inner.close()
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streamrs::{MemoryInputStream, MemoryOutputStream};

    #[test]
    fn test_rule() {
        let rule = WashRule::default();
        assert!(rule.removes(b' ') && rule.removes(b'\n'));
        assert!(!rule.removes(b'A'));

        let mut dest = b">".to_vec();
        WashRule::new(b"-").wash_into(b"a-b-c", &mut dest);
        assert_eq!(dest, b">abc");
    }

    #[test]
    fn test_input() {
        // (source, skip, length, expected, skipped, available)
        let cases: [(&[u8], usize, usize, &[u8], usize, usize); 20] = [
            (b"68656C6C6F\n", 0, 10, b"68656C6C6F", 0, 1),
            (b"68656C6C6F\r", 0, 10, b"68656C6C6F", 0, 1),
            (b"68656C6C6F\t", 0, 10, b"68656C6C6F", 0, 1),
            (b"68656C6C6F ", 0, 10, b"68656C6C6F", 0, 1),
            (b"68656C6C6F\n", 0, 11, b"68656C6C6F", 0, 0),
            (b"68656C6C6F\r", 0, 11, b"68656C6C6F", 0, 0),
            (b"68656C6C6F\t", 0, 11, b"68656C6C6F", 0, 0),
            (b"68656C6C6F ", 0, 11, b"68656C6C6F", 0, 0),
            (b"6865\n6C6C6F\r", 0, 10, b"68656C6C6F", 0, 1),
            (b"6865\n6C6C6F\r", 0, 11, b"68656C6C6F", 0, 0),
            (b"6865\n6C6C6F\r", 0, 12, b"68656C6C6F", 0, 0),
            (b"6865\t6C6C6F ", 0, 11, b"68656C6C6F", 0, 0),
            (b"6865 6C6C6F\n", 0, 11, b"68656C6C6F", 0, 0),
            (b"6865\t6C6C6F\n", 2, 8, b"656C6C6F", 2, 1),
            (b"6865\t6C6C6F\n", 4, 6, b"6C6C6F", 4, 1),
            (b"6865\t6C6C6F\n", 5, 5, b"C6C6F", 5, 1),
            (b"6865\t6C6C6F\n", 6, 4, b"6C6F", 6, 1),
            (b"6865\t6C6C6F\n", 10, 1, b"", 10, 0),
            (b"68656C6C6F\n", 0, 2, b"68", 0, 1),
            (b"6865\n6C6C6F\r", 0, 6, b"68656C", 0, 1),
        ];

        for (source, skip, length, expected, skipped, available) in cases {
            let mut input = WashInputStream::new(MemoryInputStream::new(source.to_vec()));
            assert_eq!(input.skip(skip).unwrap(), skipped);

            let mut bytes = Vec::new();
            let outcome = input.input(&mut bytes, length).unwrap();
            assert_eq!(bytes, expected);
            assert_eq!(outcome, ReadOutcome::from_count(expected.len(), length));
            assert_eq!(input.available(), available, "{source:?}, {skip}, {length}");
        }
    }

    #[test]
    fn test_output() {
        let cases: [(&[u8], &[u8]); 4] = [
            (b"6\n8\t6\r5 6C6C6F\n", b"68656C6C6F"),
            (b"68656C6C6F\n68656C", b"68656C6C6F68656C"),
            (b"68656C\n6C6F68656C\n6C6F68656C\n", b"68656C6C6F68656C6C6F68656C"),
            (b"68\n656C6C6F68\n656C6C6F68\n656C", b"68656C6C6F68656C6C6F68656C"),
        ];

        for (hex, expected) in cases {
            let mut output = WashOutputStream::new(MemoryOutputStream::new());
            assert_eq!(output.output(hex).unwrap(), expected.len());
            assert_eq!(output.into_inner().as_bytes(), expected);
        }
    }

    #[test]
    fn test_custom_rule() {
        let rule = WashRule::new(b" ");
        let mut input = WashInputStream::with_rule(MemoryInputStream::new(b"a b\nc".to_vec()), rule);
        let mut bytes = Vec::new();
        input.read(&mut bytes, 10).unwrap();
        assert_eq!(bytes, b"ab\nc");
        assert_eq!(input.rule(), &rule);
    }
}

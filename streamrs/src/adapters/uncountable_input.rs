//! Filter input stream whose remaining byte count cannot be known.

use alloc::vec::Vec;

use super::FilterInputStream;
use crate::domain::{InputStream, ReadOutcome, Result};

/// Input stream forwarding to its subordinate stream, but reporting
/// [`available`](InputStream::available) as only 1 (input may remain) or 0
/// (nothing left).
///
/// Transforming filters whose output size depends on the content, such as
/// decoders skipping whitespace, build on it so callers never take the
/// subordinate count for their own.
///
/// # Examples
///
/// ```
/// use streamrs::{InputStream, MemoryInputStream, UncountableFilterInputStream};
///
/// let mut input = UncountableFilterInputStream::new(MemoryInputStream::new(b"hello".to_vec()));
/// assert_eq!(input.available(), 1);
///
/// let mut bytes = Vec::new();
/// input.read(&mut bytes, 5).unwrap();
/// assert_eq!(input.available(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct UncountableFilterInputStream<I> {
    inner: FilterInputStream<I>,
}

impl<I: InputStream> UncountableFilterInputStream<I> {
    /// Wrap `inner`.
    pub const fn new(inner: I) -> Self {
        Self {
            inner: FilterInputStream::new(inner),
        }
    }

    /// Access the subordinate stream.
    #[inline]
    pub const fn get_ref(&self) -> &I {
        self.inner.get_ref()
    }

    /// Mutable access to the subordinate stream.
    #[inline]
    pub fn get_mut(&mut self) -> &mut I {
        self.inner.get_mut()
    }

    /// Unwrap the subordinate stream.
    pub fn into_inner(self) -> I {
        self.inner.into_inner()
    }
}

impl<I: InputStream> InputStream for UncountableFilterInputStream<I> {
    fn input(&mut self, bytes: &mut Vec<u8>, length: usize) -> Result<ReadOutcome> {
        self.inner.input(bytes, length)
    }

    fn available(&self) -> usize {
        usize::from(self.inner.available() > 0)
    }

    fn position(&self) -> u64 {
        self.inner.position()
    }

    fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }

    fn close(&mut self) -> Result<()> {
        self.inner.close()
    }

    fn mark_supported(&self) -> bool {
        self.inner.mark_supported()
    }

    fn mark(&mut self, limit: usize) -> Result<()> {
        self.inner.mark(limit)
    }

    fn reset(&mut self) -> Result<()> {
        self.inner.reset()
    }
}

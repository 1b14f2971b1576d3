//! Transparent output decorator.

use crate::domain::{OutputStream, Result};

/// Output stream forwarding every operation to the stream it wraps.
///
/// Closing a filter output stream flushes it first.
#[derive(Debug, Clone, Default)]
pub struct FilterOutputStream<O> {
    inner: O,
}

impl<O: OutputStream> FilterOutputStream<O> {
    /// Wrap `inner`.
    pub const fn new(inner: O) -> Self {
        Self { inner }
    }

    /// Access the subordinate stream.
    #[inline]
    pub const fn get_ref(&self) -> &O {
        &self.inner
    }

    /// Mutable access to the subordinate stream.
    #[inline]
    pub fn get_mut(&mut self) -> &mut O {
        &mut self.inner
    }

    /// Unwrap the subordinate stream.
    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<O: OutputStream> OutputStream for FilterOutputStream<O> {
    fn output(&mut self, bytes: &[u8]) -> Result<usize> {
        self.inner.output(bytes)
    }

    fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }

    fn close(&mut self) -> Result<()> {
        if !self.inner.is_closed() {
            self.flush()?;
        }
        self.inner.close()
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()
    }
}

//! StreamState entity - the closed flag and read position every stream carries.

use crate::domain::error::{Result, StreamError};

/// Lifecycle state shared by every concrete stream.
///
/// A stream starts open (or pre-closed when its backing resource failed to
/// open), and `close()` is terminal. Closing twice is an error, and so is
/// any I/O on a closed stream.
///
/// ```text
///        close()
///   Open ─────────► Closed ──── close() ──► Err(AlreadyClosed)
///     │                ▲
///     └── open failed ─┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamState {
    closed: bool,
    position: u64,
}

impl StreamState {
    /// Create the state of a freshly opened stream.
    #[inline]
    pub const fn new() -> Self {
        Self {
            closed: false,
            position: 0,
        }
    }

    /// Create the state of a stream whose resource could not be opened.
    #[inline]
    pub const fn pre_closed() -> Self {
        Self {
            closed: true,
            position: 0,
        }
    }

    /// Check if the stream is closed.
    #[inline]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Bytes delivered so far.
    #[inline]
    pub const fn position(&self) -> u64 {
        self.position
    }

    /// Fail with [`StreamError::Closed`] if the stream is closed.
    #[inline]
    pub const fn ensure_open(&self) -> Result<()> {
        if self.closed {
            Err(StreamError::Closed)
        } else {
            Ok(())
        }
    }

    /// Mark the stream closed.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::AlreadyClosed`] on a second call.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Err(StreamError::AlreadyClosed);
        }
        self.closed = true;
        Ok(())
    }

    /// Reopen a closed stream. Only piped endpoints do this, on `connect`.
    #[inline]
    pub fn reopen(&mut self) {
        self.closed = false;
    }

    /// Record `count` delivered bytes.
    #[inline]
    pub fn advance(&mut self, count: usize) {
        self.position = self.position.saturating_add(count as u64);
    }
}

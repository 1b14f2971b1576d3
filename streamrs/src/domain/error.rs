//! Stream errors.
//!
//! Every failure of a stream operation is reported through [`StreamError`].
//! The variants fall into two kinds: I/O errors (closed-stream reuse, failed
//! host I/O, broken pipe connections, pushback overflow, invalid marks) and
//! out-of-bounds errors raised by the offset/length normalization of
//! [`Span`](crate::domain::Span). End of stream is not an error, see
//! [`ReadOutcome`](crate::domain::ReadOutcome).

use alloc::boxed::Box;
use core::fmt;

/// Errors produced by stream operations.
#[derive(Debug)]
#[non_exhaustive]
pub enum StreamError {
    /// `close()` was called on a stream that is already closed.
    AlreadyClosed,

    /// An I/O operation was attempted on a closed stream.
    Closed,

    /// The stream does not implement mark/reset.
    MarkUnsupported,

    /// `reset()` was called without a valid mark.
    InvalidMark,

    /// A format probe needs mark/reset but the stream cannot provide it.
    MarkRequired {
        /// Type name of the offending stream.
        stream: &'static str,
    },

    /// A piped endpoint is already connected to a live peer.
    AlreadyConnected,

    /// A piped output stream has no (live) downstream.
    NotConnected,

    /// The downstream of a piped output stream has been closed.
    PeerClosed,

    /// Pushing back would exceed the capacity of the pushback buffer.
    PushbackOverflow {
        /// Capacity of the pushback buffer.
        capacity: usize,
        /// Bytes that would be held after the push.
        requested: usize,
    },

    /// A filter met a byte it cannot interpret.
    InvalidByte {
        /// The offending byte.
        byte: u8,
    },

    /// A stream was configured with an invalid parameter.
    InvalidConfig(&'static str),

    /// The host capability failed.
    Host(Box<dyn core::error::Error + Send + Sync>),

    /// The offset or length of a substring operation is out of bounds.
    OutOfBounds {
        /// Offset after normalization.
        offset: usize,
        /// Length after normalization.
        length: usize,
        /// Length of the byte string the span was applied to.
        size: usize,
    },
}

impl StreamError {
    /// Wraps a host capability error.
    pub fn host<E>(err: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Self::Host(Box::new(err))
    }

    /// Check if this is an out-of-bounds error rather than an I/O error.
    #[inline]
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyClosed => write!(f, "Stream is already closed, can't be closed again"),
            Self::Closed => write!(f, "Stream closed"),
            Self::MarkUnsupported => write!(f, "mark/reset not supported"),
            Self::InvalidMark => write!(f, "Invalid mark"),
            Self::MarkRequired { stream } => write!(f, "{} does not support mark()", stream),
            Self::AlreadyConnected => write!(f, "Already connected"),
            Self::NotConnected => write!(f, "Current stream is not connected to any downstream"),
            Self::PeerClosed => write!(f, "Downstream is closed"),
            Self::PushbackOverflow { capacity, requested } => write!(
                f,
                "Insufficient space in pushback buffer ({} bytes needed, capacity {})",
                requested, capacity
            ),
            Self::InvalidByte { byte } => write!(f, "Invalid byte 0x{:02X}", byte),
            Self::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Self::Host(e) => write!(f, "Host I/O error: {}", e),
            Self::OutOfBounds { offset, length, size } => write!(
                f,
                "Invalid offset or length (offset {}, length {}, size {})",
                offset, length, size
            ),
        }
    }
}

impl core::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Host(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl embedded_io::Error for StreamError {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            Self::OutOfBounds { .. } | Self::InvalidConfig(_) | Self::InvalidByte { .. } => {
                embedded_io::ErrorKind::InvalidInput
            }
            Self::NotConnected => embedded_io::ErrorKind::NotConnected,
            Self::MarkUnsupported | Self::MarkRequired { .. } => embedded_io::ErrorKind::Unsupported,
            _ => embedded_io::ErrorKind::Other,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, StreamError>;

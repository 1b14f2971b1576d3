//! Result of a primitive read.

/// Outcome of a read: a byte count, or the end of the stream.
///
/// End of stream is only reported when bytes were requested and none could be
/// produced; a zero-length request always yields `Bytes(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadOutcome {
    /// This many bytes were delivered.
    Bytes(usize),
    /// The stream is exhausted.
    Eof,
}

impl ReadOutcome {
    /// Build the outcome for `count` bytes delivered out of `requested`.
    #[inline]
    pub const fn from_count(count: usize, requested: usize) -> Self {
        if count == 0 && requested > 0 {
            Self::Eof
        } else {
            Self::Bytes(count)
        }
    }

    /// Check if the stream is exhausted.
    #[inline]
    pub const fn is_eof(self) -> bool {
        matches!(self, Self::Eof)
    }

    /// Number of bytes delivered, zero at end of stream.
    #[inline]
    pub const fn count(self) -> usize {
        match self {
            Self::Bytes(n) => n,
            Self::Eof => 0,
        }
    }
}

//! Access mode for host files.

use core::fmt;

/// How a host file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OpenMode {
    /// Open an existing file for reading.
    #[default]
    Read,
    /// Create or truncate a file for writing.
    Write,
    /// Create a file if needed and write at its end.
    Append,
    /// Open an existing file for reading and writing.
    ReadWrite,
}

impl OpenMode {
    /// Check if the mode allows reading.
    #[inline]
    pub const fn is_readable(self) -> bool {
        matches!(self, Self::Read | Self::ReadWrite)
    }

    /// Check if the mode allows writing.
    #[inline]
    pub const fn is_writable(self) -> bool {
        !matches!(self, Self::Read)
    }
}

impl fmt::Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self {
            Self::Read => "r",
            Self::Write => "w",
            Self::Append => "a",
            Self::ReadWrite => "r+",
        };
        f.write_str(mode)
    }
}

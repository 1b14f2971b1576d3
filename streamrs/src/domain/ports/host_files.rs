//! HostFiles port - Secondary (driven) port for file I/O on the host.
//!
//! This port defines what file streams need from the platform. The core crate
//! never touches a file system itself; a host crate implements this trait and
//! the file streams are generic over it.

use crate::domain::value_objects::OpenMode;
use core::error::Error;

/// Port for host file operations.
///
/// This is a **secondary (driven) port** in hexagonal architecture terms.
///
/// ```text
/// ┌─────────────────────┐
/// │  FileInputStream<H> │
/// │  FileOutputStream<H>│
/// └──────────┬──────────┘
///            │ depends on
///            ▼
/// ┌─────────────────────┐
/// │   HostFiles Port    │  ◄── This trait
/// └──────────┬──────────┘
///            │ implemented by
///            ▼
/// ┌─────────────────────┐
/// │  Host crate         │
/// │  (e.g. std::fs)     │
/// └─────────────────────┘
/// ```
///
/// # Examples
///
/// ```ignore
/// let mut files = StdFiles;
/// let mut handle = files.open("data.bin", OpenMode::Read)?;
/// let mut buffer = [0u8; 512];
/// let n = files.read(&mut handle, &mut buffer)?;
/// files.close(handle)?;
/// ```
pub trait HostFiles {
    /// An open file.
    type Handle;

    /// The error type for host operations.
    ///
    /// This should be the underlying platform error type (e.g., `std::io::Error`).
    type Error: Error + Send + Sync + 'static;

    /// Open the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened in `mode`.
    fn open(&mut self, path: &str, mode: OpenMode) -> Result<Self::Handle, Self::Error>;

    /// Read into `dest`, returning the number of bytes read (0 at end of file).
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn read(&mut self, handle: &mut Self::Handle, dest: &mut [u8]) -> Result<usize, Self::Error>;

    /// Write `src`, returning the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn write(&mut self, handle: &mut Self::Handle, src: &[u8]) -> Result<usize, Self::Error>;

    /// Flush buffered writes to the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush fails.
    fn flush(&mut self, handle: &mut Self::Handle) -> Result<(), Self::Error>;

    /// Release the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform reports a failure on close.
    fn close(&mut self, handle: Self::Handle) -> Result<(), Self::Error>;

    /// Size of the file in bytes, if the host knows it.
    fn size(&self, handle: &Self::Handle) -> Option<u64> {
        let _ = handle;
        None
    }
}

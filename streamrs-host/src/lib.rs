//! Host file capability for `streamrs` on `std`.
//!
//! Provides [`StdFiles`], a [`HostFiles`] implementation over
//! [`std::fs::File`], and shorthands for opening file streams with it.
//!
//! # Example
//!
//! ```no_run
//! use streamrs::{InputStream, OutputStream};
//! use streamrs_host::{open_input, open_output};
//!
//! let mut output = open_output("greeting.txt");
//! output.write(b"hello")?;
//! output.close()?;
//!
//! let mut input = open_input("greeting.txt");
//! let mut bytes = Vec::new();
//! input.read(&mut bytes, 64)?;
//! assert_eq!(bytes, b"hello");
//! # Ok::<(), streamrs::StreamError>(())
//! ```

#![warn(missing_docs)]

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};

use log::{debug, trace};
use streamrs::{FileInputStream, FileOutputStream, HostFiles, OpenMode};

/// File input stream backed by the host file system.
pub type StdFileInputStream = FileInputStream<StdFiles>;

/// File output stream backed by the host file system.
pub type StdFileOutputStream = FileOutputStream<StdFiles>;

/// [`HostFiles`] over [`std::fs`].
///
/// Paths are interpreted relative to the current working directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFiles;

impl StdFiles {
    fn options(mode: OpenMode) -> OpenOptions {
        let mut options = OpenOptions::new();
        match mode {
            OpenMode::Read => options.read(true),
            OpenMode::Write => options.write(true).create(true).truncate(true),
            OpenMode::Append => options.append(true).create(true),
            OpenMode::ReadWrite => options.read(true).write(true),
        };
        options
    }
}

impl HostFiles for StdFiles {
    type Handle = File;
    type Error = io::Error;

    fn open(&mut self, path: &str, mode: OpenMode) -> io::Result<File> {
        let file = Self::options(mode).open(path)?;
        debug!("opened {} ({})", path, mode);
        Ok(file)
    }

    fn read(&mut self, handle: &mut File, dest: &mut [u8]) -> io::Result<usize> {
        let n = loop {
            match handle.read(dest) {
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                other => break other?,
            }
        };
        trace!("read {} of {} bytes", n, dest.len());
        Ok(n)
    }

    fn write(&mut self, handle: &mut File, src: &[u8]) -> io::Result<usize> {
        handle.write_all(src)?;
        trace!("wrote {} bytes", src.len());
        Ok(src.len())
    }

    fn flush(&mut self, handle: &mut File) -> io::Result<()> {
        handle.flush()
    }

    fn close(&mut self, handle: File) -> io::Result<()> {
        drop(handle);
        debug!("closed file");
        Ok(())
    }

    fn size(&self, handle: &File) -> Option<u64> {
        handle.metadata().ok().map(|meta| meta.len())
    }
}

/// Open `path` for reading.
///
/// The stream starts closed if the file cannot be opened, see
/// [`FileInputStream::open_error`].
pub fn open_input(path: &str) -> StdFileInputStream {
    FileInputStream::open(StdFiles, path, OpenMode::Read)
}

/// Create or truncate `path` for writing.
pub fn open_output(path: &str) -> StdFileOutputStream {
    FileOutputStream::open(StdFiles, path, OpenMode::Write)
}

/// Create `path` or open it for appending.
pub fn open_append(path: &str) -> StdFileOutputStream {
    FileOutputStream::open(StdFiles, path, OpenMode::Append)
}

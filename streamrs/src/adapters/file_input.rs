//! Input stream over a host file.

use alloc::string::String;
use alloc::vec::Vec;

use crate::domain::presets::DEFAULT_BUFFER_SIZE;
use crate::domain::{HostFiles, InputStream, OpenMode, ReadOutcome, Result, StreamError, StreamState};

/// Input stream reading a file through a [`HostFiles`] capability.
///
/// Construction never fails: if the host cannot open the file, the stream
/// starts closed and keeps the host error for [`open_error`](Self::open_error).
/// A failed read is reported once and leaves the stream closed.
///
/// # Examples
///
/// ```ignore
/// use streamrs::{FileInputStream, InputStream, OpenMode};
///
/// let mut input = FileInputStream::open(StdFiles, "data.txt", OpenMode::Read);
/// if let Some(err) = input.open_error() {
///     return Err(err.into());
/// }
///
/// let mut bytes = Vec::new();
/// input.read(&mut bytes, 1024)?;
/// ```
pub struct FileInputStream<H: HostFiles> {
    host: H,
    handle: Option<H::Handle>,
    source: String,
    mode: OpenMode,
    state: StreamState,
    open_error: Option<H::Error>,
}

impl<H: HostFiles> FileInputStream<H> {
    /// Open `source` on `host`.
    pub fn open(mut host: H, source: &str, mode: OpenMode) -> Self {
        let (handle, state, open_error) = match host.open(source, mode) {
            Ok(handle) => (Some(handle), StreamState::new(), None),
            Err(err) => {
                debug!("failed to open {} ({}): {}", source, mode, err);
                (None, StreamState::pre_closed(), Some(err))
            }
        };

        Self {
            host,
            handle,
            source: String::from(source),
            mode,
            state,
            open_error,
        }
    }

    /// Path the stream was opened with.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Mode the stream was opened with.
    #[inline]
    pub const fn mode(&self) -> OpenMode {
        self.mode
    }

    /// Host error that prevented the file from opening.
    #[inline]
    pub const fn open_error(&self) -> Option<&H::Error> {
        self.open_error.as_ref()
    }

    /// Access the host capability.
    #[inline]
    pub const fn host(&self) -> &H {
        &self.host
    }

    fn abandon(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = self.host.close(handle);
        }
        let _ = self.state.close();
    }
}

impl<H: HostFiles> InputStream for FileInputStream<H> {
    fn input(&mut self, bytes: &mut Vec<u8>, length: usize) -> Result<ReadOutcome> {
        self.state.ensure_open()?;
        let Some(handle) = self.handle.as_mut() else {
            return Err(StreamError::Closed);
        };

        let start = bytes.len();
        let mut filled = 0;
        while filled < length {
            // Grow one chunk at a time so huge requests never allocate up front.
            let chunk = (length - filled).min(DEFAULT_BUFFER_SIZE);
            let end = start + filled;
            bytes.resize(end + chunk, 0);

            match self.host.read(handle, &mut bytes[end..]) {
                Ok(0) => break,
                Ok(n) => {
                    filled += n;
                    bytes.truncate(start + filled);
                }
                Err(err) => {
                    bytes.truncate(start);
                    debug!("read from {} failed: {}", self.source, err);
                    self.abandon();
                    return Err(StreamError::host(err));
                }
            }
        }

        bytes.truncate(start + filled);
        self.state.advance(filled);
        Ok(ReadOutcome::from_count(filled, length))
    }

    fn available(&self) -> usize {
        match (&self.handle, self.state.is_closed()) {
            (Some(handle), false) => self
                .host
                .size(handle)
                .map_or(0, |size| {
                    usize::try_from(size.saturating_sub(self.state.position()))
                        .unwrap_or(usize::MAX)
                }),
            _ => 0,
        }
    }

    fn position(&self) -> u64 {
        self.state.position()
    }

    fn is_closed(&self) -> bool {
        self.state.is_closed()
    }

    fn close(&mut self) -> Result<()> {
        self.state.close()?;
        match self.handle.take() {
            Some(handle) => self.host.close(handle).map_err(StreamError::host),
            None => Ok(()),
        }
    }
}

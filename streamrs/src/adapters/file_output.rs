//! Output stream over a host file.

use alloc::string::String;

use crate::domain::{HostFiles, OpenMode, OutputStream, Result, StreamError, StreamState};

/// Output stream writing a file through a [`HostFiles`] capability.
///
/// Like [`FileInputStream`](super::FileInputStream), a file that cannot be
/// opened yields a closed stream. Closing flushes first.
pub struct FileOutputStream<H: HostFiles> {
    host: H,
    handle: Option<H::Handle>,
    source: String,
    mode: OpenMode,
    state: StreamState,
    open_error: Option<H::Error>,
}

impl<H: HostFiles> FileOutputStream<H> {
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

impl<H: HostFiles> OutputStream for FileOutputStream<H> {
    fn output(&mut self, bytes: &[u8]) -> Result<usize> {
        self.state.ensure_open()?;
        let Some(handle) = self.handle.as_mut() else {
            return Err(StreamError::Closed);
        };

        let mut written = 0;
        while written < bytes.len() {
            match self.host.write(handle, &bytes[written..]) {
                Ok(0) => break,
                Ok(n) => written += n,
                Err(err) => {
                    debug!("write to {} failed: {}", self.source, err);
                    self.abandon();
                    return Err(StreamError::host(err));
                }
            }
        }

        Ok(written)
    }

    fn is_closed(&self) -> bool {
        self.state.is_closed()
    }

    fn close(&mut self) -> Result<()> {
        if self.state.is_closed() {
            return Err(StreamError::AlreadyClosed);
        }

        // A failed flush already closed the stream and released the handle.
        let flushed = self.flush();
        if !self.state.is_closed() {
            self.state.close()?;
        }

        let released = match self.handle.take() {
            Some(handle) => self.host.close(handle).map_err(StreamError::host),
            None => Ok(()),
        };

        flushed.and(released)
    }

    fn flush(&mut self) -> Result<()> {
        self.state.ensure_open()?;
        let Some(handle) = self.handle.as_mut() else {
            return Err(StreamError::Closed);
        };

        if let Err(err) = self.host.flush(handle) {
            debug!("flush of {} failed: {}", self.source, err);
            self.abandon();
            return Err(StreamError::host(err));
        }
        Ok(())
    }
}

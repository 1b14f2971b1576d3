//! Writing end of a pipe.

use alloc::rc::Rc;

use super::PipedInputStream;
use super::channel::{Channel, Link};
use crate::domain::{OutputStream, Result, StreamError};

/// Writing end of an in-process pipe.
///
/// Every write is queued on the connected [`PipedInputStream`] at once.
#[derive(Debug, Default)]
pub struct PipedOutputStream {
    link: Rc<Link>,
    closed: bool,
}

impl PipedOutputStream {
    /// Create an unconnected endpoint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an endpoint connected to `downstream`, replacing any connection
    /// `downstream` had.
    pub fn with_downstream(downstream: &mut PipedInputStream) -> Self {
        let mut output = Self::new();
        output.link_to(downstream);
        output
    }

    /// Connect to `downstream`. Both endpoints are linked and reopened.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::AlreadyConnected`] if this endpoint is open and
    /// already connected, unless `force` is set.
    pub fn connect(&mut self, downstream: &mut PipedInputStream, force: bool) -> Result<()> {
        if !force && self.is_connected() && !self.closed {
            return Err(StreamError::AlreadyConnected);
        }

        self.link_to(downstream);
        Ok(())
    }

    /// Check if a live input stream is connected to this endpoint.
    pub fn is_connected(&self) -> bool {
        self.link.downstream.borrow().strong_count() > 0
    }

    pub(super) fn link(&self) -> &Rc<Link> {
        &self.link
    }

    pub(super) fn attach(&mut self, downstream: &Rc<Channel>) {
        *self.link.downstream.borrow_mut() = Rc::downgrade(downstream);
        self.closed = false;
    }

    fn link_to(&mut self, downstream: &mut PipedInputStream) {
        self.attach(downstream.channel());
        downstream.attach(&self.link);
        trace!("piped output connected");
    }
}

impl OutputStream for PipedOutputStream {
    fn output(&mut self, bytes: &[u8]) -> Result<usize> {
        if self.closed {
            return Err(StreamError::Closed);
        }

        let Some(channel) = self.link.downstream.borrow().upgrade() else {
            return Err(StreamError::NotConnected);
        };

        if channel.closed.get() {
            return Err(StreamError::PeerClosed);
        }

        channel.queue.borrow_mut().extend(bytes);
        Ok(bytes.len())
    }

    fn is_closed(&self) -> bool {
        self.closed
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Err(StreamError::AlreadyClosed);
        }
        self.closed = true;
        Ok(())
    }
}

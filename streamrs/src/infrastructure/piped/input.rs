//! Reading end of a pipe.

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;

use super::PipedOutputStream;
use super::channel::{Channel, Link};
use crate::domain::{InputStream, ReadOutcome, Result, StreamError};

/// Reading end of an in-process pipe.
///
/// Bytes written to the connected [`PipedOutputStream`] are queued here until
/// read. Reads never wait: an empty queue is the end of the stream for now,
/// and later writes make more bytes available.
///
/// The endpoints reference each other without owning each other, so either
/// one can be dropped first. Closing one endpoint leaves the other open.
#[derive(Debug, Default)]
pub struct PipedInputStream {
    channel: Rc<Channel>,
    upstream: Option<Weak<Link>>,
    position: u64,
}

impl PipedInputStream {
    /// Create an unconnected endpoint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an endpoint connected to `upstream`, replacing any connection
    /// `upstream` had.
    pub fn with_upstream(upstream: &mut PipedOutputStream) -> Self {
        let mut input = Self::new();
        input.link_to(upstream);
        input
    }

    /// Connect to `upstream`. Both endpoints are linked and reopened.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::AlreadyConnected`] if this endpoint is open and
    /// already connected, unless `force` is set.
    pub fn connect(&mut self, upstream: &mut PipedOutputStream, force: bool) -> Result<()> {
        if !force && self.is_connected() && !self.is_closed() {
            return Err(StreamError::AlreadyConnected);
        }

        self.link_to(upstream);
        Ok(())
    }

    /// Check if a live output stream is connected to this endpoint.
    pub fn is_connected(&self) -> bool {
        self.upstream
            .as_ref()
            .is_some_and(|upstream| upstream.strong_count() > 0)
    }

    /// Check if `upstream` is the output stream connected to this endpoint.
    pub fn is_connected_to(&self, upstream: &PipedOutputStream) -> bool {
        self.upstream
            .as_ref()
            .is_some_and(|link| Weak::ptr_eq(link, &Rc::downgrade(upstream.link())))
    }

    /// Queue `bytes` for reading, returning how many were queued.
    pub fn receive(&self, bytes: &[u8]) -> usize {
        self.channel.queue.borrow_mut().extend(bytes);
        bytes.len()
    }

    pub(super) fn channel(&self) -> &Rc<Channel> {
        &self.channel
    }

    pub(super) fn attach(&mut self, upstream: &Rc<Link>) {
        self.upstream = Some(Rc::downgrade(upstream));
        self.channel.closed.set(false);
    }

    fn link_to(&mut self, upstream: &mut PipedOutputStream) {
        self.attach(upstream.link());
        upstream.attach(&self.channel);
        trace!("piped input connected");
    }
}

impl InputStream for PipedInputStream {
    fn input(&mut self, bytes: &mut Vec<u8>, length: usize) -> Result<ReadOutcome> {
        if self.channel.closed.get() {
            return Err(StreamError::Closed);
        }

        let mut queue = self.channel.queue.borrow_mut();
        let n = length.min(queue.len());
        bytes.extend(queue.drain(..n));
        self.position += n as u64;

        Ok(ReadOutcome::from_count(n, length))
    }

    fn available(&self) -> usize {
        self.channel.queue.borrow().len()
    }

    fn position(&self) -> u64 {
        self.position
    }

    fn is_closed(&self) -> bool {
        self.channel.closed.get()
    }

    fn close(&mut self) -> Result<()> {
        if self.channel.closed.get() {
            return Err(StreamError::AlreadyClosed);
        }

        self.channel.queue.borrow_mut().clear();
        self.channel.closed.set(true);
        Ok(())
    }
}

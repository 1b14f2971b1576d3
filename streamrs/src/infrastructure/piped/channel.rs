//! Shared state between the two endpoints of a pipe.

use alloc::collections::VecDeque;
use alloc::rc::Weak;
use core::cell::{Cell, RefCell};

/// Queue owned by a piped input stream. Output streams only hold weak
/// references to it.
#[derive(Debug, Default)]
pub(crate) struct Channel {
    pub(crate) queue: RefCell<VecDeque<u8>>,
    pub(crate) closed: Cell<bool>,
}

/// Identity of a piped output stream, and the channel it writes to.
#[derive(Debug, Default)]
pub(crate) struct Link {
    pub(crate) downstream: RefCell<Weak<Channel>>,
}

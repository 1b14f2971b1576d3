//! In-memory input stream.

use alloc::vec::Vec;

use crate::domain::{InputStream, ReadOutcome, Result, StreamState};

/// Input stream serving the bytes of an owned buffer.
///
/// # Examples
///
/// ```
/// use streamrs::{InputStream, MemoryInputStream};
///
/// let mut input = MemoryInputStream::new(b"hello".to_vec());
/// let mut bytes = Vec::new();
/// input.read(&mut bytes, 4).unwrap();
/// assert_eq!(bytes, b"hell");
/// assert_eq!(input.available(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryInputStream {
    data: Vec<u8>,
    state: StreamState,
}

impl MemoryInputStream {
    /// Create a stream over `data`.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            state: StreamState::new(),
        }
    }

    fn cursor(&self) -> usize {
        // Never exceeds `data.len()`, which fits in usize.
        self.state.position() as usize
    }
}

impl InputStream for MemoryInputStream {
    fn input(&mut self, bytes: &mut Vec<u8>, length: usize) -> Result<ReadOutcome> {
        self.state.ensure_open()?;

        let start = self.cursor();
        let n = length.min(self.data.len() - start);
        bytes.extend_from_slice(&self.data[start..start + n]);
        self.state.advance(n);

        Ok(ReadOutcome::from_count(n, length))
    }

    fn available(&self) -> usize {
        if self.state.is_closed() {
            0
        } else {
            self.data.len() - self.cursor()
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
        self.data = Vec::new();
        Ok(())
    }
}

//! In-process pipe: a writing and a reading endpoint sharing a queue.
//!
//! ```text
//!  PipedOutputStream ──write──► [ queue ] ──read──► PipedInputStream
//!         │                        ▲ owned by the input side
//!         └──── Weak ──────────────┘
//! ```
//!
//! Endpoints are connected explicitly with `connect` (which links both sides
//! in one call) or created connected with [`pipe`]. The pair is
//! single-threaded; reads never block.

mod channel;
mod input;
mod output;

pub use input::PipedInputStream;
pub use output::PipedOutputStream;

/// Create a connected pair of endpoints.
///
/// # Examples
///
/// ```
/// use streamrs::{InputStream, OutputStream, pipe};
///
/// let (mut output, mut input) = pipe();
/// output.write(b"hello").unwrap();
/// output.write(b", world!").unwrap();
///
/// let mut bytes = Vec::new();
/// input.read(&mut bytes, 64).unwrap();
/// assert_eq!(bytes, b"hello, world!");
/// ```
pub fn pipe() -> (PipedOutputStream, PipedInputStream) {
    let mut input = PipedInputStream::new();
    let output = PipedOutputStream::with_downstream(&mut input);
    (output, input)
}

//! Domain entities - stateful objects with lifecycle and invariants.

mod lifecycle;
mod mark_buffer;

pub use lifecycle::StreamState;
pub use mark_buffer::MarkBuffer;

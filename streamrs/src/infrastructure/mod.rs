//! Infrastructure layer - plumbing built on the stream contracts.
//!
//! - **`piped`**: in-process pipe between a writing and a reading endpoint
//! - **`resolver`**: format-sniffing factories and the resolver trying them
//! - **`IoReader`** / **`IoWriter`**: `embedded_io` views of any stream

pub mod piped;
pub mod resolver;

mod embedded_io_impl;

pub use embedded_io_impl::{IoReader, IoWriter};

//! Composable byte streams with hexagonal architecture.
//!
//! This crate provides decorator-style input and output streams over any byte
//! source: buffering with mark/reset checkpoints, pushback, line splitting,
//! transparent filters and an in-process pipe. Streams are independent of the
//! concrete data source, which is reached through the [`HostFiles`] port.
//!
//! # Architecture
//!
//! The crate is organized into three layers:
//!
//! ## Domain Layer (`domain`)
//! Contracts and rules with no infrastructure dependencies:
//! - **Value Objects**: `Span` (offset/length normalization), `ReadOutcome`, `OpenMode`
//! - **Entities**: `StreamState` (closed flag + position), `MarkBuffer` (mark/reset state machine)
//! - **Ports**: `InputStream`, `OutputStream`, `HostFiles`
//!
//! ## Adapter Layer (`adapters`)
//! Concrete streams implementing the ports:
//! - **`MemoryInputStream`** / **`MemoryOutputStream`**: in-memory source and sink
//! - **`FileInputStream`** / **`FileOutputStream`**: streams over a `HostFiles` capability
//! - **`FilterInputStream`** / **`FilterOutputStream`**: transparent decorators
//! - **`BufferedInputStream`**: buffering with mark/reset
//! - **`BufferableFilterInputStream`**, **`PushbackInputStream`**, **`LineInputStream`**
//! - **`UncountableFilterInputStream`**: filter whose `available()` is only 0 or 1
//!
//! ## Infrastructure Layer (`infrastructure`)
//! Plumbing built on the domain:
//! - Piped stream pair (`PipedInputStream` / `PipedOutputStream`)
//! - Filter resolver and factories
//! - `embedded-io` bridge (`IoReader` / `IoWriter`)
//!
//! # Quick Start
//!
//! ```
//! use streamrs::{BufferedInputStream, InputStream, MemoryInputStream};
//!
//! let source = MemoryInputStream::new(b"123456789ABCDEF".to_vec());
//! let mut input = BufferedInputStream::with_buffer_size(source, 4).unwrap();
//!
//! let mut bytes = Vec::new();
//! input.read(&mut bytes, 2).unwrap();
//! assert_eq!(bytes, b"12");
//!
//! input.mark(4).unwrap();
//! input.read(&mut bytes, 3).unwrap();
//! assert_eq!(bytes, b"345");
//!
//! input.reset().unwrap();
//! input.read(&mut bytes, 3).unwrap();
//! assert_eq!(bytes, b"345");
//! ```
//!
//! # Features
//!
//! - `std`: Enable standard library features (`embedded-io/std`)
//! - `log`: Enable logging through the `log` facade

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

// Core layers
pub mod domain;
pub mod adapters;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::{
    HostFiles, InputStream, MarkBuffer, NormalizedSpan, OpenMode, OutputStream, ReadOutcome,
    Result, Span, StreamError, StreamState, presets,
};

pub use adapters::{
    BufferableFilterInputStream, BufferedInputStream, FileInputStream, FileOutputStream,
    FilterInputStream, FilterOutputStream, LineInputStream, MemoryInputStream,
    MemoryOutputStream, PushbackInputStream, UncountableFilterInputStream,
};

// Infrastructure layer exports
pub use infrastructure::piped::{PipedInputStream, PipedOutputStream, pipe};
pub use infrastructure::resolver::{FilterFactory, FilterResolver, PassThroughFactory, Resolution};
pub use infrastructure::{IoReader, IoWriter};

// Re-export embedded_io for convenience
pub use embedded_io;

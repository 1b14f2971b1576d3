//! Domain layer - stream contracts and rules with zero infrastructure dependencies.
//!
//! The domain layer contains:
//! - **Value Objects**: `Span`, `NormalizedSpan`, `ReadOutcome`, `OpenMode`
//! - **Entities**: `StreamState`, `MarkBuffer`
//! - **Ports**: `InputStream`, `OutputStream`, `HostFiles`
//! - **Domain Errors**: `StreamError`
//!
//! # Hexagonal Architecture
//!
//! ```text
//!     ┌──────────────────────────────────┐
//!     │      Domain Layer (Core)         │
//!     │                                  │
//!     │  ┌────────────────────────────┐  │
//!     │  │  Entities & Value Objects  │  │
//!     │  │  - Span, MarkBuffer, etc.  │  │
//!     │  └────────────────────────────┘  │
//!     │              │                   │
//!     │              ▼                   │
//!     │  ┌────────────────────────────┐  │
//!     │  │    Ports (Interfaces)      │  │
//!     │  │    - InputStream           │  │
//!     │  │    - OutputStream          │  │
//!     │  │    - HostFiles             │  │
//!     │  └────────────────────────────┘  │
//!     └──────────────────────────────────┘
//!                    ▲
//!                    │ implemented by
//!                    │
//!     ┌──────────────────────────────────┐
//!     │      Adapter Layer               │
//!     │  - MemoryInputStream             │
//!     │  - BufferedInputStream           │
//!     │  - FileInputStream<H>            │
//!     └──────────────────────────────────┘
//! ```

pub mod entities;
pub mod value_objects;
pub mod ports;
pub mod error;

// Re-export commonly used types
pub use entities::{MarkBuffer, StreamState};
pub use value_objects::{NormalizedSpan, OpenMode, ReadOutcome, Span};
pub use ports::{HostFiles, InputStream, OutputStream};
pub use error::{Result, StreamError};

/// Common buffer size presets.
pub mod presets {
    /// Default buffer size of buffered, bufferable and line streams.
    pub const DEFAULT_BUFFER_SIZE: usize = 1024;

    /// Default chunk size used by `skip`.
    pub const DEFAULT_SKIP_CHUNK: usize = 1024;

    /// Default capacity of a pushback buffer.
    pub const DEFAULT_PUSHBACK_CAPACITY: usize = 1;

    /// 4KB buffers.
    pub const BUFFER_4K: usize = 4 * 1024;

    /// 8KB buffers.
    pub const BUFFER_8K: usize = 8 * 1024;

    /// 64KB buffers.
    pub const BUFFER_64K: usize = 64 * 1024;
}

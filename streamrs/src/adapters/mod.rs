//! Adapter layer - concrete streams implementing the domain ports.
//!
//! # Hexagonal Architecture
//!
//! ```text
//!     ┌──────────────────────────────────┐
//!     │      Domain Layer                │
//!     │  - InputStream / OutputStream    │
//!     │  - HostFiles (port)              │
//!     └────────────┬─────────────────────┘
//!                  │
//!                  │ implements
//!                  ▼
//!     ┌──────────────────────────────────┐
//!     │      Adapter Layer               │  ◄── This module
//!     │  - Memory / File streams         │
//!     │  - Filter decorators             │
//!     └────────────┬─────────────────────┘
//!                  │
//!                  │ uses
//!                  ▼
//!     ┌──────────────────────────────────┐
//!     │  Host (HostFiles implementation) │
//!     └──────────────────────────────────┘
//! ```
//!
//! # Available Adapters
//!
//! - **`MemoryInputStream`** / **`MemoryOutputStream`**: in-memory source and sink
//! - **`FileInputStream`** / **`FileOutputStream`**: files reached through `HostFiles`
//! - **`FilterInputStream`** / **`FilterOutputStream`**: transparent decorators
//! - **`BufferedInputStream`**: look-ahead buffer with mark/reset
//! - **`BufferableFilterInputStream`**: filter with a pre-fetch buffer
//! - **`PushbackInputStream`**: un-read support with bounded capacity
//! - **`LineInputStream`**: `\n`-terminated line reader
//! - **`UncountableFilterInputStream`**: filter reporting `available()` as 0 or 1

mod buffered_input;
mod bufferable_input;
mod file_input;
mod file_output;
mod filter_input;
mod filter_output;
mod line_input;
mod memory_input;
mod memory_output;
mod pushback_input;
mod uncountable_input;

pub use buffered_input::BufferedInputStream;
pub use bufferable_input::BufferableFilterInputStream;
pub use file_input::FileInputStream;
pub use file_output::FileOutputStream;
pub use filter_input::FilterInputStream;
pub use filter_output::FilterOutputStream;
pub use line_input::LineInputStream;
pub use memory_input::MemoryInputStream;
pub use memory_output::MemoryOutputStream;
pub use pushback_input::PushbackInputStream;
pub use uncountable_input::UncountableFilterInputStream;

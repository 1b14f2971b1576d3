//! Value objects - small validated types with no identity.

mod open_mode;
mod read_outcome;
mod span;

pub use open_mode::OpenMode;
pub use read_outcome::ReadOutcome;
pub use span::{NormalizedSpan, Span};

pub(crate) use span::saturating_isize;

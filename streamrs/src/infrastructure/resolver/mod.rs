//! Format resolution: factories that sniff a stream and the resolver that
//! tries them in order.

mod factory;
mod filter_resolver;

pub use factory::{FilterFactory, PassThroughFactory};
pub use filter_resolver::{FilterResolver, Resolution};

//! Resolver picking the first factory that recognizes a stream.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use super::FilterFactory;
use crate::adapters::BufferedInputStream;
use crate::domain::{InputStream, Result};

/// Outcome of [`FilterResolver::resolve`].
pub enum Resolution {
    /// A factory recognized the stream and wrapped it.
    Resolved(Box<dyn InputStream>),
    /// No factory recognized the stream. The stream is handed back, possibly
    /// wrapped in a [`BufferedInputStream`].
    Unresolved(Box<dyn InputStream>),
}

impl Resolution {
    /// Check if a factory recognized the stream.
    #[inline]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// The filtered stream, if a factory recognized the input.
    pub fn resolved(self) -> Option<Box<dyn InputStream>> {
        match self {
            Self::Resolved(stream) => Some(stream),
            Self::Unresolved(_) => None,
        }
    }

    /// The stream, filtered or not.
    pub fn into_inner(self) -> Box<dyn InputStream> {
        match self {
            Self::Resolved(stream) | Self::Unresolved(stream) => stream,
        }
    }
}

impl fmt::Debug for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved(stream) => f.debug_tuple("Resolved").field(&stream.name()).finish(),
            Self::Unresolved(stream) => f.debug_tuple("Unresolved").field(&stream.name()).finish(),
        }
    }
}

/// Ordered list of [`FilterFactory`]s, tried first to last.
///
/// Factories probe with mark/reset, so streams that cannot mark are wrapped
/// in a [`BufferedInputStream`] before probing.
///
/// # Examples
///
/// ```
/// use streamrs::{FilterResolver, MemoryInputStream, PassThroughFactory};
///
/// let mut resolver = FilterResolver::new();
/// resolver.add_factory(PassThroughFactory);
///
/// let input = Box::new(MemoryInputStream::new(b"abc".to_vec()));
/// assert!(resolver.resolve(input).unwrap().is_resolved());
/// ```
#[derive(Default)]
pub struct FilterResolver {
    factories: Vec<Box<dyn FilterFactory>>,
}

impl FilterResolver {
    /// Create a resolver without factories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver trying `factories` in order.
    pub fn with_factories(factories: Vec<Box<dyn FilterFactory>>) -> Self {
        Self { factories }
    }

    /// Append a factory, tried after the ones already registered.
    pub fn add_factory<F: FilterFactory + 'static>(&mut self, factory: F) {
        self.factories.push(Box::new(factory));
    }

    /// Number of registered factories.
    #[inline]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check if no factory is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Wrap `input` in the filter of the first factory supporting it.
    ///
    /// # Errors
    ///
    /// Propagates the first probe error.
    pub fn resolve(&self, input: Box<dyn InputStream>) -> Result<Resolution> {
        let mut input = if input.mark_supported() {
            input
        } else {
            Box::new(BufferedInputStream::new(input))
        };

        for factory in &self.factories {
            if factory.support(input.as_mut())? {
                let stream = factory.create(input);
                debug!("stream resolved to {}", stream.name());
                return Ok(Resolution::Resolved(stream));
            }
        }

        Ok(Resolution::Unresolved(input))
    }

    /// Find the first factory supporting `input` without creating a filter.
    ///
    /// A stream that cannot mark is probed through a temporary buffer, so
    /// the bytes read by the probes are consumed from it.
    ///
    /// # Errors
    ///
    /// Propagates the first probe error.
    pub fn resolve_factory(&self, input: &mut dyn InputStream) -> Result<Option<&dyn FilterFactory>> {
        if input.mark_supported() {
            return self.find(input);
        }

        let mut buffered = BufferedInputStream::new(input);
        self.find(&mut buffered)
    }

    fn find(&self, input: &mut dyn InputStream) -> Result<Option<&dyn FilterFactory>> {
        for factory in &self.factories {
            if factory.support(input)? {
                return Ok(Some(factory.as_ref()));
            }
        }
        Ok(None)
    }
}

impl fmt::Debug for FilterResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterResolver")
            .field("factories", &self.factories.len())
            .finish()
    }
}

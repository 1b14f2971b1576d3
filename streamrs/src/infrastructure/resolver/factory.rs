//! Filter factories.

use alloc::boxed::Box;

use crate::adapters::FilterInputStream;
use crate::domain::{InputStream, Result, StreamError};

/// Recognizes a stream format and builds the filter that decodes it.
///
/// [`support`](Self::support) may read ahead to sniff the format, but must
/// rewind with `mark`/`reset` so the stream is left where it was.
///
/// # Examples
///
/// ```
/// use streamrs::{FilterFactory, FilterInputStream, InputStream, Result};
///
/// struct GzipSniffer;
///
/// impl FilterFactory for GzipSniffer {
///     fn support(&self, input: &mut dyn InputStream) -> Result<bool> {
///         let mut magic = Vec::new();
///         input.mark(2)?;
///         input.read(&mut magic, 2)?;
///         input.reset()?;
///         Ok(magic == [0x1f, 0x8b])
///     }
///
///     fn create(&self, input: Box<dyn InputStream>) -> Box<dyn InputStream> {
///         Box::new(FilterInputStream::new(input))
///     }
/// }
/// ```
pub trait FilterFactory {
    /// Check if this factory can decode `input`.
    ///
    /// # Errors
    ///
    /// Returns an error if the probe fails, e.g. because `input` cannot mark.
    fn support(&self, input: &mut dyn InputStream) -> Result<bool>;

    /// Wrap `input` in the filter this factory builds.
    fn create(&self, input: Box<dyn InputStream>) -> Box<dyn InputStream>;
}

/// Factory accepting any format, as long as the stream can mark.
///
/// It creates a plain [`FilterInputStream`], so the bytes pass through
/// unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughFactory;

impl FilterFactory for PassThroughFactory {
    fn support(&self, input: &mut dyn InputStream) -> Result<bool> {
        if !input.mark_supported() {
            return Err(StreamError::MarkRequired {
                stream: input.name(),
            });
        }
        Ok(true)
    }

    fn create(&self, input: Box<dyn InputStream>) -> Box<dyn InputStream> {
        Box::new(FilterInputStream::new(input))
    }
}

//! Offset/length normalization shared by every substring operation.

use crate::domain::error::{Result, StreamError};

/// A requested `(offset, length)` window over a byte string.
///
/// Negative values count from the end of the string, the same way slice
/// indices do in many scripting languages:
///
/// 1. `offset < 0` becomes `max(0, size + offset)`.
/// 2. `length < 0` becomes `max(0, size - offset + length)`.
/// 3. An offset past the end of the string (`offset > size`) is out of bounds.
///
/// A normalized length of zero is legal and describes an empty window. The
/// length is not clamped to the string: reads may grow the destination,
/// writes clamp with [`NormalizedSpan::clamp`].
///
/// # Examples
///
/// ```
/// use streamrs::domain::Span;
///
/// let span = Span::new(2, -1).normalize(5).unwrap();
/// assert_eq!((span.offset(), span.length()), (2, 2));
///
/// let span = Span::new(-6, 5).normalize(5).unwrap();
/// assert_eq!((span.offset(), span.length()), (0, 5));
///
/// assert!(Span::new(6, 1).normalize(5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    offset: isize,
    length: isize,
}

impl Span {
    /// Create a new, not yet normalized span.
    #[inline]
    pub const fn new(offset: isize, length: isize) -> Self {
        Self { offset, length }
    }

    /// A span covering all `size` bytes of a string.
    #[inline]
    pub const fn full(size: usize) -> Self {
        Self::new(0, saturating_isize(size))
    }

    /// Apply the normalization rules against a string of `size` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::OutOfBounds`] if the normalized offset is past
    /// the end of the string.
    pub fn normalize(self, size: usize) -> Result<NormalizedSpan> {
        let signed_size = saturating_isize(size);

        let offset = if self.offset < 0 {
            signed_size.saturating_add(self.offset).max(0)
        } else {
            self.offset
        };

        let length = if self.length < 0 {
            signed_size
                .saturating_sub(offset)
                .saturating_add(self.length)
                .max(0)
        } else {
            self.length
        };

        // Both are non-negative at this point.
        let (offset, length) = (offset as usize, length as usize);

        if offset > size {
            return Err(StreamError::OutOfBounds { offset, length, size });
        }

        Ok(NormalizedSpan { offset, length })
    }
}

/// A span after normalization: `offset <= size` is guaranteed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NormalizedSpan {
    offset: usize,
    length: usize,
}

impl NormalizedSpan {
    /// Start of the window.
    #[inline]
    pub const fn offset(self) -> usize {
        self.offset
    }

    /// Length of the window.
    #[inline]
    pub const fn length(self) -> usize {
        self.length
    }

    /// Check if the window is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.length == 0
    }

    /// The window as a range clamped to a string of `size` bytes.
    #[inline]
    pub fn clamp(self, size: usize) -> core::ops::Range<usize> {
        let start = self.offset.min(size);
        start..self.offset.saturating_add(self.length).min(size)
    }
}

#[inline]
pub(crate) const fn saturating_isize(value: usize) -> isize {
    if value > isize::MAX as usize {
        isize::MAX
    } else {
        value as isize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(offset: isize, length: isize, size: usize) -> (usize, usize) {
        let span = Span::new(offset, length).normalize(size).unwrap();
        (span.offset(), span.length())
    }

    #[test]
    fn test_positive_values_pass_through() {
        assert_eq!(window(0, 5, 5), (0, 5));
        assert_eq!(window(2, 2, 5), (2, 2));
        // Reads may ask for more than the destination currently holds.
        assert_eq!(window(5, 10, 5), (5, 10));
    }

    #[test]
    fn test_negative_offset_counts_from_end() {
        assert_eq!(window(-1, 5, 5), (4, 5));
        assert_eq!(window(-5, 5, 5), (0, 5));
        assert_eq!(window(-6, 5, 5), (0, 5));
    }

    #[test]
    fn test_negative_length_counts_from_end() {
        assert_eq!(window(0, -1, 5), (0, 4));
        assert_eq!(window(2, -1, 5), (2, 2));
        assert_eq!(window(2, -3, 5), (2, 0));
        assert_eq!(window(2, -30, 5), (2, 0));
    }

    #[test]
    fn test_offset_past_end_is_out_of_bounds() {
        let err = Span::new(6, 1).normalize(5).unwrap_err();
        assert!(err.is_out_of_bounds());

        // Offset equal to size is the append position.
        assert_eq!(window(5, 0, 5), (5, 0));
        assert_eq!(window(0, 3, 0), (0, 3));
        assert!(Span::new(1, 0).normalize(0).is_err());
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for size in 0..8usize {
            for offset in -10isize..10 {
                for length in -10isize..10 {
                    let Ok(first) = Span::new(offset, length).normalize(size) else {
                        continue;
                    };
                    let again = Span::new(first.offset() as isize, first.length() as isize)
                        .normalize(size)
                        .unwrap();
                    assert_eq!(first, again, "offset {offset}, length {length}, size {size}");
                }
            }
        }
    }

    #[test]
    fn test_clamp() {
        let span = Span::new(2, 10).normalize(5).unwrap();
        assert_eq!(span.clamp(5), 2..5);
        assert!(span.clamp(5).len() <= 3);
        assert_eq!(Span::full(5).normalize(5).unwrap().clamp(5), 0..5);
    }
}

//! Span module - Source location tracking.
//!
//! This module provides the [`Span`] type for representing the location of a
//! token in IDL source text: a byte range plus the human-readable line and
//! column of its first character.
//!
//! # Examples
//!
//! ```
//! use idlc_util::span::Span;
//!
//! let span = Span::new(10, 20, 1, 5);
//! assert_eq!(span.len(), 10);
//! ```

mod source_map;

pub use source_map::SourceFile;

use std::fmt;

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (`start..end`)
/// - Line and column numbers of `start` (for human-readable output)
///
/// # Examples
///
/// ```
/// use idlc_util::span::Span;
///
/// // Create a span with byte offsets and line/column info
/// let span = Span::new(10, 20, 1, 5);
///
/// // Create a point span (single location)
/// let point = Span::point(7, 1, 8);
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use idlc_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a single byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use idlc_util::span::Span;
    ///
    /// let point = Span::point(4, 2, 1);
    /// assert_eq!(point.start, point.end);
    /// ```
    #[inline]
    pub const fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if this span is empty (start == end)
    ///
    /// # Examples
    ///
    /// ```
    /// use idlc_util::span::Span;
    ///
    /// assert!(Span::new(10, 10, 1, 5).is_empty());
    /// assert!(!Span::new(10, 20, 1, 5).is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span contains a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use idlc_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert!(span.contains(15));
    /// assert!(!span.contains(20));
    /// ```
    #[inline]
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Merge two spans into a single span covering both
    ///
    /// Line and column are taken from whichever span starts first.
    ///
    /// # Examples
    ///
    /// ```
    /// use idlc_util::span::Span;
    ///
    /// let merged = Span::new(10, 20, 1, 5).merge(Span::new(25, 35, 2, 3));
    /// assert_eq!((merged.start, merged.end), (10, 35));
    /// assert_eq!((merged.line, merged.column), (1, 5));
    /// ```
    pub fn merge(self, other: Span) -> Span {
        let (first, _) = if self.start <= other.start {
            (self, other)
        } else {
            (other, self)
        };
        Span {
            start: first.start,
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }

    /// Returns the byte range covered by this span
    #[inline]
    pub const fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(3, 9, 2, 4);
        assert_eq!(span.start, 3);
        assert_eq!(span.end, 9);
        assert_eq!(span.len(), 6);
        assert_eq!(span.range(), 3..9);
    }

    #[test]
    fn test_span_point() {
        let span = Span::point(12, 3, 1);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
        assert!(!span.contains(12));
    }

    #[test]
    fn test_span_merge_is_order_independent() {
        let a = Span::new(0, 4, 1, 1);
        let b = Span::new(8, 12, 2, 3);
        assert_eq!(a.merge(b), b.merge(a));
        assert_eq!(a.merge(b), Span::new(0, 12, 1, 1));
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(0, 1, 7, 12).to_string(), "7:12");
    }
}

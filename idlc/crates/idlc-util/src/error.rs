//! Core error types for idlc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for source file operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceMapError {
    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan {
        /// Start offset of the span.
        start: usize,
        /// End offset of the span.
        end: usize,
    },

    /// Span out of bounds for file
    #[error("Span out of bounds: file has {file_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        /// Length of the file in bytes.
        file_len: usize,
        /// Start offset of the span.
        span_start: usize,
        /// End offset of the span.
        span_end: usize,
    },

    /// Span does not fall on UTF-8 character boundaries
    #[error("Span {start}..{end} is not on character boundaries")]
    NotCharBoundary {
        /// Start offset of the span.
        start: usize,
        /// End offset of the span.
        end: usize,
    },
}

/// Result type alias for source file operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_span_display() {
        let err = SourceMapError::InvalidSpan { start: 9, end: 3 };
        assert_eq!(err.to_string(), "Invalid span: start 9 > end 3");
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = SourceMapError::SpanOutOfBounds {
            file_len: 4,
            span_start: 2,
            span_end: 8,
        };
        assert_eq!(
            err.to_string(),
            "Span out of bounds: file has 4 bytes, span is 2..8"
        );
    }

    #[test]
    fn test_not_char_boundary_display() {
        let err = SourceMapError::NotCharBoundary { start: 1, end: 2 };
        assert_eq!(err.to_string(), "Span 1..2 is not on character boundaries");
    }
}

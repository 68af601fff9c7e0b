//! Source files and line lookup.
//!
//! [`SourceFile`] owns the text of one IDL file and precomputes the byte
//! offset of every line so that diagnostics can quote the offending line.

use std::sync::Arc;

use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use idlc_util::span::SourceFile;
///
/// let file = SourceFile::new("shapes.idl", "module shapes {};");
/// assert_eq!(file.name(), "shapes.idl");
/// assert_eq!(file.content(), "module shapes {};");
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        std::iter::once(0)
            .chain(
                content
                    .char_indices()
                    .filter(|&(_, ch)| ch == '\n')
                    .map(|(i, _)| i + 1),
            )
            .collect()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// # Examples
    ///
    /// ```
    /// use idlc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.idl", "line1\nline2\nline3");
    /// assert_eq!(file.line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset to 1-based (line, column) coordinates
    ///
    /// Columns are counted in characters, matching the lexer's cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use idlc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.idl", "module m {\n  struct S;\n};");
    /// assert_eq!(file.offset_to_line_col(13), (2, 3));
    /// ```
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let line_start = self.line_starts[line];
        let end = offset.min(self.content.len());
        let column = self
            .content
            .get(line_start..end)
            .map_or(end.saturating_sub(line_start), |s| s.chars().count());
        (line + 1, column + 1)
    }

    /// Get a specific source line (1-indexed), without its line terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use idlc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.idl", "line1\r\nline2\nline3");
    /// assert_eq!(file.line_at(1), Some("line1"));
    /// assert_eq!(file.line_at(3), Some("line3"));
    /// assert_eq!(file.line_at(4), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = *self.line_starts.get(line - 1)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());

        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Extract a substring from the file content with bounds checking
    ///
    /// # Examples
    ///
    /// ```
    /// use idlc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.idl", "const long X = 1;");
    /// assert_eq!(file.extract_range(0, 5).unwrap(), "const");
    /// assert!(file.extract_range(5, 0).is_err());
    /// ```
    pub fn extract_range(&self, start: usize, end: usize) -> SourceMapResult<&str> {
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }
        if !self.content.is_char_boundary(start) || !self.content.is_char_boundary(end) {
            return Err(SourceMapError::NotCharBoundary { start, end });
        }

        Ok(&self.content[start..end])
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

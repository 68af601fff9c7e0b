//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, collecting, and rendering
//! compiler diagnostics. The lexer itself never emits diagnostics (an
//! illegal token carries its own message); front ends turn those messages
//! into [`Diagnostic`]s and render them against the [`SourceFile`] they came
//! from.
//!
//! # Examples
//!
//! ```
//! use idlc_util::diagnostic::{Diagnostic, Handler};
//! use idlc_util::span::{SourceFile, Span};
//!
//! let file = SourceFile::new("m.idl", "const char c = 'a");
//! let handler = Handler::new();
//! handler.emit(Diagnostic::error("Character literal not terminated", Span::new(15, 17, 1, 16)));
//!
//! assert!(handler.has_errors());
//! let rendered = handler.diagnostics()[0].render(&file);
//! assert!(rendered.contains("--> m.idl:1:16"));
//! ```

use crate::span::{SourceFile, Span};
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use idlc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// An error that prevents compilation
    Error,
    /// A warning that doesn't prevent compilation
    Warning,
    /// Additional information about a diagnostic
    Note,
}

impl Level {
    /// Returns true if this level represents an error
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Additional notes for context
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            notes: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Add a note to the diagnostic
    ///
    /// # Examples
    ///
    /// ```
    /// use idlc_util::diagnostic::Diagnostic;
    /// use idlc_util::span::Span;
    ///
    /// let diag = Diagnostic::error("Missing exponent", Span::DUMMY)
    ///     .with_note("an exponent needs at least one digit");
    /// assert_eq!(diag.notes.len(), 1);
    /// ```
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Render the diagnostic rustc-style, quoting the offending source line.
    ///
    /// ```text
    /// error: Missing exponent
    ///  --> m.idl:1:16
    ///   |
    /// 1 | const double d = 3.56e;
    ///   |                  ^^^^^
    /// ```
    pub fn render(&self, file: &SourceFile) -> String {
        let line_no = self.span.line as usize;
        let gutter = line_no.to_string().len();
        let pad = " ".repeat(gutter);

        let mut out = format!("{}: {}\n", self.level, self.message);
        out.push_str(&format!(
            "{}--> {}:{}:{}\n",
            pad,
            file.name(),
            self.span.line,
            self.span.column
        ));

        if let Some(text) = file.line_at(line_no) {
            let column = self.span.column.max(1) as usize;
            let width = self.underline_width(file, text, column);
            out.push_str(&format!("{} |\n", pad));
            out.push_str(&format!("{} | {}\n", line_no, text));
            out.push_str(&format!(
                "{} | {}{}\n",
                pad,
                " ".repeat(column - 1),
                "^".repeat(width)
            ));
        }

        for note in &self.notes {
            out.push_str(&format!("{} = note: {}\n", pad, note));
        }

        out
    }

    /// Width of the caret underline, clipped to the quoted line.
    fn underline_width(&self, file: &SourceFile, line_text: &str, column: usize) -> usize {
        let remaining = line_text.chars().count().saturating_sub(column - 1);
        let spanned = file
            .extract_range(self.span.start, self.span.end)
            .map(|s| s.lines().next().unwrap_or("").chars().count())
            .unwrap_or(0);
        spanned.min(remaining).max(1)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.span, self.level, self.message)
    }
}

/// Diagnostic collector
///
/// Collects diagnostics emitted while processing one or more source files.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new, empty handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Remove and return all diagnostics
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Error.to_string(), "error");
        assert_eq!(Level::Note.to_string(), "note");
        assert!(Level::Error.is_error());
        assert!(!Level::Warning.is_error());
    }

    #[test]
    fn test_render_with_caret() {
        let file = SourceFile::new("m.idl", "const double d = 3.56e;");
        let diag = Diagnostic::error("Missing exponent", Span::new(17, 22, 1, 18));
        let rendered = diag.render(&file);

        let expected = "error: Missing exponent\n \
                        --> m.idl:1:18\n  \
                        |\n\
                        1 | const double d = 3.56e;\n  \
                        |                  ^^^^^\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_empty_span_has_one_caret() {
        let file = SourceFile::new("m.idl", "module _ {};");
        let diag = Diagnostic::error("", Span::new(7, 8, 1, 8));
        let rendered = diag.render(&file);
        assert!(rendered.ends_with("  |        ^\n"));
    }

    #[test]
    fn test_render_notes() {
        let file = SourceFile::new("m.idl", "x");
        let diag = Diagnostic::warning("w", Span::new(0, 1, 1, 1)).with_note("extra");
        assert!(diag.render(&file).contains(" = note: extra"));
    }

    #[test]
    fn test_handler_counts() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        handler.emit(Diagnostic::error("a", Span::DUMMY));
        handler.emit(Diagnostic::warning("b", Span::DUMMY));
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.diagnostics().len(), 2);
        assert_eq!(handler.take().len(), 2);
        assert!(handler.diagnostics().is_empty());
    }
}

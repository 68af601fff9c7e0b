//! Common types and utilities for idlt commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::path::Path;
use std::str::FromStr;

use idlc_lex::Token;
use idlc_util::{Diagnostic, Handler, SourceFile};

use crate::error::{IdltError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported token stream output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `KIND 'text'` line per token
    Text,
    /// A JSON array of token objects
    Json,
}

impl FromStr for OutputFormat {
    type Err = IdltError;

    /// Parse a format name (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(IdltError::Validation(format!(
                "{} {}",
                error_messages::UNKNOWN_FORMAT,
                s
            ))),
        }
    }
}

// ============================================================================
// Source Utilities
// ============================================================================

/// Read an IDL file into a [`SourceFile`] named after its path.
pub fn read_source(path: &Path) -> Result<SourceFile> {
    if !path.is_file() {
        return Err(IdltError::FileOperation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| IdltError::FileOperation(format!("{}: {}", path.display(), e)))?;
    Ok(SourceFile::new(path.display().to_string(), content))
}

/// Convert an illegal token into an error diagnostic.
pub fn illegal_token_diagnostic(token: &Token) -> Diagnostic {
    if token.text.is_empty() {
        Diagnostic::error(error_messages::BARE_ESCAPE_MARKER, token.span)
            .with_note("a leading '_' escapes the identifier that follows it")
    } else {
        Diagnostic::error(token.text.clone(), token.span)
    }
}

/// Emit a diagnostic for every illegal token and print them to stderr.
///
/// Returns the number of errors reported.
pub fn report_illegal_tokens(file: &SourceFile, tokens: &[Token]) -> usize {
    let handler = Handler::new();
    for token in tokens.iter().filter(|t| t.is_illegal()) {
        handler.emit(illegal_token_diagnostic(token));
    }

    for diagnostic in handler.diagnostics() {
        eprint!("{}", diagnostic.render(file));
    }
    handler.error_count()
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format:";

    /// Rendered in place of the empty text of a bare `_`.
    pub const BARE_ESCAPE_MARKER: &str = "Expected an identifier after '_'";
}

#[cfg(test)]
mod tests {
    use super::*;
    use idlc_lex::TokenKind;
    use idlc_util::Span;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "yaml".parse::<OutputFormat>(),
            Err(IdltError::Validation(_))
        ));
    }

    #[test]
    fn test_illegal_token_diagnostic() {
        let token = Token::new(TokenKind::Illegal, "Missing exponent", Span::new(0, 2, 1, 1));
        let diagnostic = illegal_token_diagnostic(&token);
        assert_eq!(diagnostic.message, "Missing exponent");
        assert!(diagnostic.notes.is_empty());
    }

    #[test]
    fn test_bare_marker_diagnostic_has_message() {
        let token = Token::new(TokenKind::Illegal, "", Span::new(0, 1, 1, 1));
        let diagnostic = illegal_token_diagnostic(&token);
        assert_eq!(diagnostic.message, error_messages::BARE_ESCAPE_MARKER);
        assert_eq!(diagnostic.notes.len(), 1);
    }

    #[test]
    fn test_report_counts_errors() {
        let file = SourceFile::new("t.idl", "# x $");
        let tokens = idlc_lex::tokenize(file.content());
        assert_eq!(report_illegal_tokens(&file, &tokens), 2);
    }

    #[test]
    fn test_read_source_missing_file() {
        let result = read_source(Path::new("/nonexistent/file.idl"));
        assert!(matches!(result, Err(IdltError::FileOperation(_))));
    }
}

//! idlc-lex - Lexical Analyzer for OMG IDL
//!
//! This crate provides the lexer (tokenizer) of the IDL compiler. It
//! transforms IDL source text into a stream of classified tokens that a
//! parser pulls one at a time.
//!
//! # Example Usage
//!
//! ```
//! use idlc_lex::{Lexer, TokenKind};
//!
//! let source = "const long MAX = 0x10;";
//! let mut lexer = Lexer::new(source);
//!
//! // Get tokens one at a time
//! assert_eq!(lexer.next_token().kind, TokenKind::KwConst);
//! assert_eq!(lexer.next_token().kind, TokenKind::KwLong);
//!
//! // Or iterate through the rest (the iterator stops before Eof)
//! let rest: Vec<_> = lexer.map(|t| t.text).collect();
//! assert_eq!(rest, ["MAX", "=", "0x10", ";"]);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions, keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`unicode`] - Character classification helpers
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! The full OMG IDL keyword set, matched case-sensitively (`TRUE`, `FALSE`,
//! `Object` and `ValueBase` keep their capitals). A leading `_` escapes a
//! keyword: `_module` is the identifier `module`.
//!
//! ## Literals
//!
//! - **Integer**: `42`, `012` (octal), `0xAB`
//! - **Float**: `1.0`, `.5`, `1e10`, `2.5e-3`
//! - **Character**: `'a'`, `'\n'`, `L'✓'`
//! - **String**: `"text"`, `L"wide"`
//!
//! ## Punctuation
//!
//! `; { } :: : , ( ) < > << >> [ ] = | ^ & + - * / % ~`
//!
//! ## Errors
//!
//! The lexer never fails. Malformed input becomes a
//! [`TokenKind::Illegal`] token whose text is the diagnostic message.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod lexer;
pub mod token;
pub mod unicode;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::{tokenize, tokenize_with_options, Lexer, LexerOptions};
pub use token::{Token, TokenKind};

//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, options and dispatch
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Integer and floating-point literal lexing
//! - `string` - Character and string literal lexing
//! - `escape` - Escape sequence decoding
//! - `operator` - Operator and punctuation lexing

mod core;
mod escape;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::{tokenize, tokenize_with_options, Lexer, LexerOptions};
pub use self::operator::punctuation_kind;

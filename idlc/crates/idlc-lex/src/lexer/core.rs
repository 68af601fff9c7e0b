//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, its options and the dispatch
//! that routes each token start to a sub-scanner.

use idlc_util::Span;
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use crate::unicode::is_ident_start;

/// Lexer configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexerOptions {
    /// Reject identifiers that differ from a keyword only by letter case,
    /// such as `Abstract` or `vAlUeBaSe`.
    pub strict_keyword_case: bool,
}

impl LexerOptions {
    /// Options with strict keyword-case checking enabled.
    pub fn strict() -> Self {
        Self {
            strict_keyword_case: true,
        }
    }
}

/// Lexer for OMG IDL source text.
///
/// Call [`Lexer::next_token`] until it returns [`TokenKind::Eof`]; further
/// calls keep returning `Eof`. The lexer never fails: malformed input comes
/// back as [`TokenKind::Illegal`] tokens whose text is the diagnostic, and
/// every call other than the final `Eof` consumes input.
///
/// # Example
///
/// ```
/// use idlc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("module m {};");
/// assert_eq!(lexer.next_token().kind, TokenKind::KwModule);
/// assert_eq!(lexer.next_token().text, "m");
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Behaviour switches.
    pub(crate) options: LexerOptions,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer with default options.
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, LexerOptions::default())
    }

    /// Creates a new lexer with the given options.
    pub fn with_options(source: &'a str, options: LexerOptions) -> Self {
        Self {
            cursor: Cursor::new(source),
            options,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Whitespace is skipped first; the returned token's span covers the
    /// token's own text only.
    pub fn next_token(&mut self) -> Token {
        self.cursor.skip_whitespace();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let token = self.scan_token();

        trace!(
            kind = token.kind.name(),
            start = token.span.start,
            end = token.span.end,
            "token"
        );
        if token.is_illegal() {
            debug!(
                line = token.span.line,
                column = token.span.column,
                message = %token.text,
                "illegal token"
            );
        }

        token
    }

    fn scan_token(&mut self) -> Token {
        if self.cursor.is_at_end() {
            return self.make_token(TokenKind::Eof, "");
        }

        if let Some(token) = self.lex_punctuation() {
            return token;
        }

        match self.cursor.current_char() {
            '\'' => self.lex_char_literal(false),
            'L' if self.cursor.peek_char(1) == '\'' => self.lex_char_literal(true),
            'L' if self.cursor.peek_char(1) == '"' => self.lex_string_literal(true),
            '_' => self.lex_escaped_identifier(),
            c if is_ident_start(c) => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            '.' if self.cursor.peek_char(1).is_ascii_digit() => self.lex_number(),
            '"' => self.lex_string_literal(false),
            c => {
                self.cursor.advance();
                self.make_token(TokenKind::Illegal, c.to_string())
            },
        }
    }

    /// Builds a token spanning from the current token start to the cursor.
    pub(crate) fn make_token(&self, kind: TokenKind, text: impl Into<String>) -> Token {
        Token::new(kind, text, self.current_span())
    }

    /// Builds an illegal token carrying `message`.
    pub(crate) fn illegal(&self, message: impl Into<String>) -> Token {
        self.make_token(TokenKind::Illegal, message)
    }

    fn current_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Returns the options this lexer was created with.
    pub fn options(&self) -> LexerOptions {
        self.options
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the source text being scanned.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

/// Scans `source` with default options, returning every token including the
/// trailing [`TokenKind::Eof`].
///
/// # Example
///
/// ```
/// use idlc_lex::{tokenize, TokenKind};
///
/// let kinds: Vec<_> = tokenize("a::b").iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Identifier, TokenKind::ScopeSeparator, TokenKind::Identifier, TokenKind::Eof]
/// );
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with_options(source, LexerOptions::default())
}

/// Like [`tokenize`], with explicit options.
pub fn tokenize_with_options(source: &str, options: LexerOptions) -> Vec<Token> {
    let mut lexer = Lexer::with_options(source, options);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eof_is_sticky() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
        for _ in 0..3 {
            let token = lexer.next_token();
            assert!(token.is_eof());
            assert_eq!(token.span, Span::new(1, 1, 1, 2));
        }
    }

    #[test]
    fn test_iterator_excludes_eof() {
        let kinds: Vec<_> = Lexer::new("a ; b").map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [TokenKind::Identifier, TokenKind::Semicolon, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_tokenize_includes_eof() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
        assert_eq!(tokens[0].text, "");
    }

    #[test]
    fn test_unexpected_character() {
        let tokens = tokenize("#$");
        assert_eq!(tokens[0], Token::new(TokenKind::Illegal, "#", Span::new(0, 1, 1, 1)));
        assert_eq!(tokens[1], Token::new(TokenKind::Illegal, "$", Span::new(1, 2, 1, 2)));
    }

    #[test]
    fn test_interior_nul_is_illegal() {
        let tokens = tokenize("a\0b");
        assert_eq!(tokens[1].kind, TokenKind::Illegal);
        assert_eq!(tokens[1].text, "\0");
        assert_eq!(tokens[1].span, Span::new(1, 2, 1, 2));
        assert_eq!(tokens[2].text, "b");
    }

    #[test]
    fn test_lone_dot_is_illegal() {
        let tokens = tokenize(".x");
        assert_eq!(tokens[0].kind, TokenKind::Illegal);
        assert_eq!(tokens[0].text, ".");
    }

    #[test]
    fn test_span_line_and_column() {
        let tokens = tokenize("module\n  m");
        assert_eq!(tokens[1].span, Span::new(9, 10, 2, 3));
    }

    #[test]
    fn test_wide_prefix_without_quote_is_identifier() {
        let tokens = tokenize("L Long");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text, "L");
        assert_eq!(tokens[1].text, "Long");
    }

    #[test]
    fn test_options_accessor() {
        let lexer = Lexer::with_options("", LexerOptions::strict());
        assert!(lexer.options().strict_keyword_case);
        assert!(!Lexer::new("").options().strict_keyword_case);
    }
}

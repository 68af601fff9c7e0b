//! Operator and punctuation lexing.
//!
//! `::`, `<<` and `>>` are matched before their single-character prefixes;
//! everything else is a direct character-to-kind table.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a punctuation token at the cursor, if there is one.
    ///
    /// Returns `None` without consuming anything when the current character
    /// is not punctuation.
    pub(crate) fn lex_punctuation(&mut self) -> Option<Token> {
        let (kind, width) = match (self.cursor.current_char(), self.cursor.peek_char(1)) {
            (':', ':') => (TokenKind::ScopeSeparator, 2),
            ('<', '<') => (TokenKind::Shl, 2),
            ('>', '>') => (TokenKind::Shr, 2),
            (c, _) => (punctuation_kind(c)?, 1),
        };

        self.cursor.advance_n(width);
        Some(self.make_token(kind, kind.as_str()))
    }
}

/// Maps a single character to its punctuation kind.
///
/// `\` and `@` have no meaning in IDL outside literals; they get their own
/// kinds so a parser can report them precisely.
///
/// # Example
///
/// ```
/// use idlc_lex::lexer::punctuation_kind;
/// use idlc_lex::TokenKind;
///
/// assert_eq!(punctuation_kind('~'), Some(TokenKind::Tilde));
/// assert_eq!(punctuation_kind('#'), None);
/// ```
pub fn punctuation_kind(c: char) -> Option<TokenKind> {
    let kind = match c {
        ';' => TokenKind::Semicolon,
        '{' => TokenKind::LBrace,
        '}' => TokenKind::RBrace,
        ',' => TokenKind::Comma,
        '=' => TokenKind::Eq,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        '[' => TokenKind::LBracket,
        ']' => TokenKind::RBracket,
        '|' => TokenKind::Pipe,
        '^' => TokenKind::Caret,
        '&' => TokenKind::Amp,
        '*' => TokenKind::Star,
        '/' => TokenKind::Slash,
        '%' => TokenKind::Percent,
        '~' => TokenKind::Tilde,
        ':' => TokenKind::Colon,
        '<' => TokenKind::Lt,
        '>' => TokenKind::Gt,
        '\\' => TokenKind::Backslash,
        '@' => TokenKind::At,
        _ => return None,
    };
    Some(kind)
}

//! Identifier and keyword lexing.
//!
//! Two rules live here and are kept apart: the escape marker (a leading `_`
//! suppresses keyword lookup) and the optional keyword-case collision check.

use crate::token::{Token, TokenKind};
use crate::unicode::{is_ident_continue, is_ident_start};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword starting at an ASCII letter.
    ///
    /// The exact spelling is looked up case-sensitively. With
    /// `strict_keyword_case` set, a spelling that matches a keyword only
    /// case-insensitively is illegal.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        let ident = self.read_identifier();

        if let Some(kind) = TokenKind::from_keyword(ident) {
            return self.make_token(kind, ident);
        }

        if self.options.strict_keyword_case {
            if let Some(message) = keyword_collision(ident) {
                return self.illegal(message);
            }
        }

        self.make_token(TokenKind::Identifier, ident)
    }

    /// Lexes an escaped identifier: `_` followed by an identifier.
    ///
    /// The marker is dropped and keyword lookup skipped, so `_module` is
    /// the identifier `module`. A marker not followed by a letter yields an
    /// illegal token with empty text, consuming only the `_`.
    pub(crate) fn lex_escaped_identifier(&mut self) -> Token {
        self.cursor.advance(); // '_'

        if !is_ident_start(self.cursor.current_char()) {
            return self.illegal("");
        }

        let ident = self.read_identifier();
        self.make_token(TokenKind::Identifier, ident)
    }

    /// Reads the maximal run of `[A-Za-z0-9_]`.
    fn read_identifier(&mut self) -> &'a str {
        let start = self.cursor.position();
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        self.cursor.slice_from(start)
    }
}

/// Returns the collision diagnostic if `ident` equals a keyword ignoring
/// case but is not spelled exactly like it.
fn keyword_collision(ident: &str) -> Option<String> {
    TokenKind::keyword_case_collision(ident).map(|kind| {
        format!(
            "Identifier '{}' collides with keyword '{}'",
            ident,
            kind.as_str()
        )
    })
}

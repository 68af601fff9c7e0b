//! Character and string literal lexing.
//!
//! Both literal families come in a narrow and a wide (`L`-prefixed) form.
//! The token text is the decoded value; on error it is the first
//! diagnostic found, and the lexer resynchronises past the literal.

use super::escape::EscapeError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

const NULL_IN_STRING: &str = "(null) character not allowed in strings";

impl<'a> Lexer<'a> {
    /// Lexes a character literal: `'c'` or `L'c'`.
    ///
    /// Exactly one character or escape sequence must precede the closing
    /// quote; `''` is an empty literal. After an error the rest of the
    /// literal is skipped up to a closing quote on the same line.
    pub(crate) fn lex_char_literal(&mut self, wide: bool) -> Token {
        self.cursor.advance_n(if wide { 2 } else { 1 });

        let (kind, unterminated) = if wide {
            (
                TokenKind::WideCharacterLiteral,
                "Wide character literal not terminated",
            )
        } else {
            (
                TokenKind::CharacterLiteral,
                "Character literal not terminated",
            )
        };

        let mut value = String::new();
        let mut error = None;

        match self.cursor.current_char() {
            _ if self.cursor.is_at_end() => return self.illegal(unterminated),
            '\n' => return self.illegal(unterminated),
            '\'' => {
                self.cursor.advance();
                return self.make_token(kind, value);
            },
            // A backslash cannot carry the literal onto the next line
            '\\' if self.cursor.peek_char(1) == '\n' => {
                self.cursor.advance();
                return self.illegal(unterminated);
            },
            '\\' => match self.read_escape(wide) {
                Ok(c) => value.push(c),
                Err(EscapeError::Eof) => return self.illegal(unterminated),
                Err(EscapeError::Invalid(message)) => error = Some(message),
            },
            c => {
                value.push(c);
                self.cursor.advance();
            },
        }

        if error.is_none() && self.cursor.match_char('\'') {
            return self.make_token(kind, value);
        }

        if self.skip_to_char_close() {
            self.illegal(error.unwrap_or_else(|| unterminated.to_string()))
        } else {
            self.illegal(unterminated)
        }
    }

    /// Skips to and consumes a closing `'` on the current line.
    ///
    /// Returns false if a newline or the end of input came first; the
    /// newline is left unconsumed.
    fn skip_to_char_close(&mut self) -> bool {
        while !self.cursor.is_at_end() {
            match self.cursor.current_char() {
                '\n' => return false,
                '\'' => {
                    self.cursor.advance();
                    return true;
                },
                '\\' => {
                    self.cursor.advance();
                    if self.cursor.current_char() != '\n' {
                        self.cursor.advance();
                    }
                },
                _ => self.cursor.advance(),
            }
        }
        false
    }

    /// Lexes a string literal: `"..."` or `L"..."`.
    ///
    /// Raw newlines are allowed inside. A narrow string may not contain a
    /// NUL, whether written raw or produced by an escape.
    pub(crate) fn lex_string_literal(&mut self, wide: bool) -> Token {
        self.cursor.advance_n(if wide { 2 } else { 1 });

        let (kind, unterminated) = if wide {
            (
                TokenKind::WideStringLiteral,
                "Wide string literal not terminated",
            )
        } else {
            (TokenKind::StringLiteral, "String literal not terminated")
        };

        let mut value = String::new();
        let mut error: Option<String> = None;

        loop {
            if self.cursor.is_at_end() {
                return self.illegal(unterminated);
            }

            let c = match self.cursor.current_char() {
                '"' => {
                    self.cursor.advance();
                    break;
                },
                '\\' => match self.read_escape(wide) {
                    Ok(c) => c,
                    Err(EscapeError::Eof) => return self.illegal(unterminated),
                    Err(EscapeError::Invalid(message)) => {
                        error.get_or_insert(message);
                        continue;
                    },
                },
                c => {
                    self.cursor.advance();
                    c
                },
            };

            if c == '\0' && !wide {
                error.get_or_insert_with(|| NULL_IN_STRING.to_string());
            }
            value.push(c);
        }

        match error {
            Some(message) => self.illegal(message),
            None => self.make_token(kind, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{tokenize, Lexer, Token, TokenKind};

    fn lex_lit(source: &str) -> Token {
        Lexer::new(source).next_token()
    }

    fn assert_lit(source: &str, kind: TokenKind, text: &str) {
        let token = lex_lit(source);
        assert_eq!(token.kind, kind, "source: {:?}", source);
        assert_eq!(token.text, text, "source: {:?}", source);
    }

    #[test]
    fn test_char_literals() {
        assert_lit("'a'", TokenKind::CharacterLiteral, "a");
        assert_lit("'\\x41'", TokenKind::CharacterLiteral, "A");
        assert_lit("'\\n'", TokenKind::CharacterLiteral, "\n");
        assert_lit("'\\''", TokenKind::CharacterLiteral, "'");
        assert_lit("'\"'", TokenKind::CharacterLiteral, "\"");
        assert_lit("'\\101'", TokenKind::CharacterLiteral, "A");
    }

    #[test]
    fn test_wide_char_literals() {
        assert_lit("L'\\u2713'", TokenKind::WideCharacterLiteral, "✓");
        assert_lit("L'✓'", TokenKind::WideCharacterLiteral, "✓");
        assert_lit("L'a'", TokenKind::WideCharacterLiteral, "a");
    }

    #[test]
    fn test_empty_char_literal() {
        let token = lex_lit("''");
        assert_eq!(token.kind, TokenKind::CharacterLiteral);
        assert_eq!(token.text, "");
        assert_eq!(token.span.len(), 2);
    }

    #[test]
    fn test_unterminated_char_literal() {
        assert_lit("'a", TokenKind::Illegal, "Character literal not terminated");
        assert_lit("'", TokenKind::Illegal, "Character literal not terminated");
        assert_lit("L'a", TokenKind::Illegal, "Wide character literal not terminated");
        assert_lit("'\\", TokenKind::Illegal, "Character literal not terminated");
    }

    #[test]
    fn test_char_literal_stops_at_newline() {
        let tokens = tokenize("'ab\nx");
        assert_eq!(tokens[0].text, "Character literal not terminated");
        assert_eq!(tokens[0].span.len(), 3);
        assert_eq!(tokens[1].text, "x");

        let tokens = tokenize("'\nx");
        assert_eq!(tokens[0].span.len(), 1);
    }

    #[test]
    fn test_char_backslash_before_newline() {
        let tokens = tokenize("'\\\nx");
        assert_eq!(tokens[0].kind, TokenKind::Illegal);
        assert_eq!(tokens[0].text, "Character literal not terminated");
        assert_eq!(tokens[0].span.len(), 2);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "x");
        assert_eq!(tokens[1].span.line, 2);

        let tokens = tokenize("L'\\\nconst long a = 'c';");
        assert_eq!(tokens[0].text, "Wide character literal not terminated");
        assert_eq!(tokens[0].span.len(), 3);
        assert_eq!(tokens[1].kind, TokenKind::KwConst);
        assert_eq!(tokens[5].kind, TokenKind::CharacterLiteral);
        assert_eq!(tokens[5].text, "c");
        assert_eq!(tokens[6].kind, TokenKind::Semicolon);
    }

    #[test]
    fn test_char_literal_extra_characters() {
        let tokens = tokenize("'ab' ;");
        assert_eq!(tokens[0].kind, TokenKind::Illegal);
        assert_eq!(tokens[0].text, "Character literal not terminated");
        assert_eq!(tokens[0].span.len(), 4);
        assert_eq!(tokens[1].kind, TokenKind::Semicolon);
    }

    #[test]
    fn test_char_escape_with_extra_digits() {
        let tokens = tokenize("'\\x414'");
        assert_eq!(tokens[0].text, "Character literal not terminated");
        assert_eq!(tokens[0].span.len(), 7);
        assert!(tokens[1].is_eof());
    }

    #[test]
    fn test_char_bad_escape() {
        let tokens = tokenize("'\\xz' x");
        assert_eq!(tokens[0].kind, TokenKind::Illegal);
        assert_eq!(tokens[0].text, "Illegal character 'z' in escape sequence");
        assert_eq!(tokens[0].span.len(), 5);
        assert_eq!(tokens[1].text, "x");
    }

    #[test]
    fn test_char_unknown_escape() {
        assert_lit("'\\q'", TokenKind::Illegal, "Unknown escape sequence '\\q'");
        assert_lit("'\\u0041'", TokenKind::Illegal, "Unknown escape sequence '\\u'");
    }

    #[test]
    fn test_char_bad_escape_at_eof_is_unterminated() {
        assert_lit("'\\xz", TokenKind::Illegal, "Character literal not terminated");
    }

    #[test]
    fn test_string_literals() {
        assert_lit("\"\"", TokenKind::StringLiteral, "");
        assert_lit("\"hello\"", TokenKind::StringLiteral, "hello");
        assert_lit("\"a\\tb\\\"c\"", TokenKind::StringLiteral, "a\tb\"c");
        assert_lit("\"\\x414\"", TokenKind::StringLiteral, "A4");
        assert_lit("\"line\nbreak\"", TokenKind::StringLiteral, "line\nbreak");
        assert_lit("\"'\"", TokenKind::StringLiteral, "'");
    }

    #[test]
    fn test_wide_string_literals() {
        assert_lit("L\"\\u2713 ok\"", TokenKind::WideStringLiteral, "✓ ok");
        assert_lit("L\"\\0\"", TokenKind::WideStringLiteral, "\0");
    }

    #[test]
    fn test_unterminated_string() {
        assert_lit("\"abc", TokenKind::Illegal, "String literal not terminated");
        assert_lit("L\"abc", TokenKind::Illegal, "Wide string literal not terminated");
        assert_lit("\"abc\\", TokenKind::Illegal, "String literal not terminated");
        assert_lit("\"\\q", TokenKind::Illegal, "String literal not terminated");
    }

    #[test]
    fn test_null_in_narrow_string() {
        assert_lit(
            "\"\\0\"",
            TokenKind::Illegal,
            "(null) character not allowed in strings",
        );
        assert_lit(
            "\"a\0b\"",
            TokenKind::Illegal,
            "(null) character not allowed in strings",
        );
    }

    #[test]
    fn test_string_first_error_wins() {
        let token = lex_lit("\"\\q\\xz\"");
        assert_eq!(token.text, "Unknown escape sequence '\\q'");
        assert_eq!(token.span.len(), 7);
    }

    #[test]
    fn test_string_recovery_continues_after_close() {
        let tokens = tokenize("\"\\xz\" ;");
        assert_eq!(tokens[0].text, "Illegal character 'z' in escape sequence");
        assert_eq!(tokens[1].kind, TokenKind::Semicolon);
    }

    #[test]
    fn test_string_span_covers_quotes() {
        let tokens = tokenize("  L\"ab\"  ");
        assert_eq!(tokens[0].span.start, 2);
        assert_eq!(tokens[0].span.end, 7);
    }
}

//! Number literal lexing.
//!
//! This module handles integer literals in octal, decimal and hexadecimal
//! form, and floating-point literals with an optional exponent.

use crate::token::{Token, TokenKind};
use crate::unicode::is_digit_in_base;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// Called at a digit, or at a `.` followed by a digit.
    ///
    /// # Number Formats
    ///
    /// - Octal: `012` (a `0` followed by an octal digit)
    /// - Hexadecimal: `0xAB`, `0X1f` (the prefix needs a hex digit after it)
    /// - Decimal: `42`, `0`
    /// - Float: `1.0e-2`, `.5`, `1.`, `1e10`, `012.5`
    ///
    /// Hexadecimal literals never continue into floats.
    pub(crate) fn lex_number(&mut self) -> Token {
        let start = self.cursor.position();
        let first = self.cursor.current_char();
        let second = self.cursor.peek_char(1);

        if first == '0'
            && matches!(second, 'x' | 'X')
            && is_digit_in_base(self.cursor.peek_char(2), 16)
        {
            self.cursor.advance_n(2);
            self.eat_digits(16);
            return self.make_token(TokenKind::IntegerLiteral, self.cursor.slice_from(start));
        }

        if first == '.' {
            return self.lex_float_fraction(start);
        }

        if first == '0' && is_digit_in_base(second, 8) {
            self.eat_digits(8);
        } else {
            self.eat_digits(10);
        }

        match self.cursor.current_char() {
            '.' => self.lex_float_fraction(start),
            'e' | 'E' => self.lex_float_exponent(start),
            _ => self.make_token(TokenKind::IntegerLiteral, self.cursor.slice_from(start)),
        }
    }

    /// Lexes `. [digits] [exponent]`, with the cursor at the `.`.
    fn lex_float_fraction(&mut self, start: usize) -> Token {
        self.cursor.advance(); // '.'
        self.eat_digits(10);

        match self.cursor.current_char() {
            'e' | 'E' => self.lex_float_exponent(start),
            _ => self.make_token(
                TokenKind::FloatingPointLiteral,
                self.cursor.slice_from(start),
            ),
        }
    }

    /// Lexes `(e|E) [+|-] digits`, with the cursor at the marker.
    fn lex_float_exponent(&mut self, start: usize) -> Token {
        self.cursor.advance(); // 'e' or 'E'
        if matches!(self.cursor.current_char(), '+' | '-') {
            self.cursor.advance();
        }

        if !self.cursor.current_char().is_ascii_digit() {
            return self.illegal("Missing exponent");
        }

        self.eat_digits(10);
        self.make_token(
            TokenKind::FloatingPointLiteral,
            self.cursor.slice_from(start),
        )
    }

    /// Consumes the maximal run of digits in `base`.
    fn eat_digits(&mut self, base: u32) {
        while is_digit_in_base(self.cursor.current_char(), base) {
            self.cursor.advance();
        }
    }
}

//! Character cursor for traversing IDL source text.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It decodes UTF-8 one code
//! point at a time, tracks line/column information for token spans, and
//! offers the short lookahead the lexer needs to tell `::` from `:` or
//! `L'x'` from the identifier `L`.

use crate::unicode::is_whitespace;

/// A cursor for traversing source code character by character.
///
/// The cursor borrows the source and never copies it. Past the end of the
/// input every read returns the sentinel `'\0'`; use [`Cursor::is_at_end`]
/// to tell the sentinel apart from a NUL that is part of the input.
///
/// # Example
///
/// ```
/// use idlc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("::x");
///
/// assert_eq!(cursor.current_char(), ':');
/// assert_eq!(cursor.peek_char(1), ':');
/// cursor.advance_n(2);
/// assert_eq!(cursor.current_char(), 'x');
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character at the cursor position.
    ///
    /// Returns '\0' (null character) if at the end of the source.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` code points ahead of the current one.
    ///
    /// `peek_char(0)` is the current character. Reads past the end return
    /// `'\0'`.
    ///
    /// # Example
    ///
    /// ```
    /// use idlc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("L'✓'");
    /// assert_eq!(cursor.peek_char(0), 'L');
    /// assert_eq!(cursor.peek_char(2), '✓');
    /// assert_eq!(cursor.peek_char(3), '\'');
    /// assert_eq!(cursor.peek_char(4), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = &self.source.as_bytes()[self.position..];

        // Fast path: everything up to and including the target is ASCII
        if offset < rest.len() && rest[..=offset].is_ascii() {
            return rest[offset] as char;
        }

        self.source[self.position..]
            .chars()
            .nth(offset)
            .unwrap_or('\0')
    }

    /// Advances the cursor to the next character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.source.len() {
            return;
        }

        // Fast path for ASCII (most common)
        let b = self.source.as_bytes()[self.position];
        let (width, c) = if b < 128 {
            (1, b as char)
        } else {
            match self.source[self.position..].chars().next() {
                Some(c) => (c.len_utf8(), c),
                None => return,
            }
        };

        self.position += width;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advances the cursor by the given number of characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Matches and consumes the expected character if present.
    ///
    /// Returns true if the character was matched and consumed, false otherwise.
    /// The sentinel never matches, even when `expected` is `'\0'`.
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips IDL whitespace: space, tab, newline, carriage return and
    /// vertical tab.
    ///
    /// # Example
    ///
    /// ```
    /// use idlc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(" \t\r\n\x0Bmodule");
    /// cursor.skip_whitespace();
    /// assert_eq!(cursor.current_char(), 'm');
    /// ```
    pub fn skip_whitespace(&mut self) {
        while !self.is_at_end() && is_whitespace(self.current_char()) {
            self.advance();
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the source from the given start position to the
    /// current position.
    ///
    /// # Example
    ///
    /// ```
    /// use idlc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("0x1F;");
    /// let start = cursor.position();
    /// cursor.advance_n(4);
    /// assert_eq!(cursor.slice_from(start), "0x1F");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("module m;");
        assert_eq!(cursor.current_char(), 'm');
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_advance() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.current_char(), 'a');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'b');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'c');
        cursor.advance();
        assert_eq!(cursor.current_char(), '\0');
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = Cursor::new("αβγ");
        assert_eq!(cursor.current_char(), 'α');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'β');
        assert_eq!(cursor.position(), 2);
        cursor.advance();
        assert_eq!(cursor.current_char(), 'γ');
        assert_eq!(cursor.column(), 3);
    }

    #[test]
    fn test_peek_char() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.peek_char(0), 'a');
        assert_eq!(cursor.peek_char(1), 'b');
        assert_eq!(cursor.peek_char(2), 'c');
        assert_eq!(cursor.peek_char(3), '\0');
        assert_eq!(cursor.peek_char(100), '\0');
    }

    #[test]
    fn test_peek_char_past_multibyte() {
        let cursor = Cursor::new("✓'x");
        assert_eq!(cursor.peek_char(1), '\'');
        assert_eq!(cursor.peek_char(2), 'x');
    }

    #[test]
    fn test_match_char() {
        let mut cursor = Cursor::new("::");
        assert!(cursor.match_char(':'));
        assert!(cursor.match_char(':'));
        assert!(!cursor.match_char(':'));
        assert!(!cursor.match_char('\0'));
    }

    #[test]
    fn test_match_char_interior_nul() {
        let mut cursor = Cursor::new("\0");
        assert!(!cursor.is_at_end());
        assert!(cursor.match_char('\0'));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_skip_whitespace_stops_at_form_feed() {
        let mut cursor = Cursor::new("  \x0C");
        cursor.skip_whitespace();
        assert_eq!(cursor.current_char(), '\x0C');
    }

    #[test]
    fn test_line_column_tracking() {
        let mut cursor = Cursor::new("line1\nline2\nline3");
        cursor.advance_n(5);
        assert_eq!(cursor.column(), 6);

        cursor.advance();
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 1);

        cursor.advance_n(6);
        assert_eq!(cursor.line(), 3);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_slice_and_remaining() {
        let mut cursor = Cursor::new("const long X;");
        let start = cursor.position();
        cursor.advance_n(5);
        assert_eq!(cursor.slice_from(start), "const");
        assert_eq!(cursor.remaining(), " long X;");
        assert_eq!(cursor.source(), "const long X;");
    }

    #[test]
    fn test_advance_n_clamps() {
        let mut cursor = Cursor::new("ab");
        cursor.advance_n(10);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\0');
        cursor.advance();
        assert!(cursor.is_at_end());
    }
}

//! Escape sequence decoding for character and string literals.

use crate::unicode::{codepoint_to_char, hex_digit_to_value, is_digit_in_base};
use crate::Lexer;

/// Why an escape sequence could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EscapeError {
    /// Input ended inside the escape.
    Eof,
    /// Malformed escape; the diagnostic text.
    Invalid(String),
}

impl<'a> Lexer<'a> {
    /// Decodes one escape sequence, with the cursor at the backslash.
    ///
    /// Numeric escapes are greedy but bounded: up to 2 hex digits after `\x`,
    /// up to 4 after `\u` (wide literals only) and up to 3 octal digits.
    /// Leftover digits stay in the input.
    pub(crate) fn read_escape(&mut self, wide: bool) -> Result<char, EscapeError> {
        self.cursor.advance(); // '\\'

        if self.cursor.is_at_end() {
            return Err(EscapeError::Eof);
        }

        let c = self.cursor.current_char();
        if let Some(decoded) = simple_escape(c) {
            self.cursor.advance();
            return Ok(decoded);
        }

        match c {
            'x' => {
                self.cursor.advance();
                self.read_numeric_escape(16, 2)
            },
            'u' if wide => {
                self.cursor.advance();
                self.read_numeric_escape(16, 4)
            },
            c if is_digit_in_base(c, 8) => self.read_numeric_escape(8, 3),
            c => {
                self.cursor.advance();
                Err(EscapeError::Invalid(format!(
                    "Unknown escape sequence '\\{}'",
                    c
                )))
            },
        }
    }

    /// Reads 1 to `max_digits` digits in `base` and converts them to a
    /// character. The first non-digit is left unconsumed.
    fn read_numeric_escape(&mut self, base: u32, max_digits: usize) -> Result<char, EscapeError> {
        let mut value: u32 = 0;
        let mut count = 0;

        while count < max_digits && is_digit_in_base(self.cursor.current_char(), base) {
            let digit = hex_digit_to_value(self.cursor.current_char()).unwrap_or(0);
            value = value * base + digit;
            self.cursor.advance();
            count += 1;
        }

        if count == 0 {
            if self.cursor.is_at_end() {
                return Err(EscapeError::Eof);
            }
            return Err(EscapeError::Invalid(format!(
                "Illegal character '{}' in escape sequence",
                self.cursor.current_char()
            )));
        }

        codepoint_to_char(value).ok_or_else(|| {
            EscapeError::Invalid(format!(
                "Invalid code point U+{:04X} in escape sequence",
                value
            ))
        })
    }
}

/// Single-character escapes: `\n \t \v \b \r \f \a \\ \? \' \"`.
fn simple_escape(c: char) -> Option<char> {
    let decoded = match c {
        'n' => '\n',
        't' => '\t',
        'v' => '\x0B',
        'b' => '\x08',
        'r' => '\r',
        'f' => '\x0C',
        'a' => '\x07',
        '\\' => '\\',
        '?' => '?',
        '\'' => '\'',
        '"' => '"',
        _ => return None,
    };
    Some(decoded)
}

//! Character classification for the IDL lexer.
//!
//! IDL identifiers and numbers are ASCII-only; only literal bodies may hold
//! arbitrary code points. These helpers keep each classification rule in
//! one place.

/// Checks if a character is IDL whitespace.
///
/// The whitespace set is space, horizontal tab, newline, carriage return and
/// vertical tab. Form feed is not whitespace.
///
/// # Example
///
/// ```
/// use idlc_lex::unicode::is_whitespace;
///
/// assert!(is_whitespace('\x0B'));
/// assert!(is_whitespace('\r'));
/// assert!(!is_whitespace('\x0C'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B')
}

/// Checks if a character can start an identifier.
///
/// Only ASCII letters qualify; a leading underscore is the escape marker and
/// is handled before this check.
///
/// # Example
///
/// ```
/// use idlc_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('Z'));
/// assert!(!is_ident_start('_'));
/// assert!(!is_ident_start('α'));
/// assert!(!is_ident_start('1'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Checks if a character can continue an identifier: `[A-Za-z0-9_]`.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character is a digit in the given base (8, 10 or 16).
///
/// # Example
///
/// ```
/// use idlc_lex::unicode::is_digit_in_base;
///
/// assert!(is_digit_in_base('7', 8));
/// assert!(!is_digit_in_base('8', 8));
/// assert!(is_digit_in_base('f', 16));
/// assert!(!is_digit_in_base('g', 16));
/// ```
#[inline]
pub fn is_digit_in_base(c: char, base: u32) -> bool {
    c.is_digit(base)
}

/// Returns the numeric value of a hexadecimal (or octal/decimal) digit.
pub fn hex_digit_to_value(c: char) -> Option<u32> {
    c.to_digit(16)
}

/// Converts a decoded escape value to a character.
///
/// Returns `None` for surrogates and anything above `U+10FFFF`.
///
/// # Example
///
/// ```
/// use idlc_lex::unicode::codepoint_to_char;
///
/// assert_eq!(codepoint_to_char(0x2713), Some('✓'));
/// assert_eq!(codepoint_to_char(0xD800), None);
/// ```
pub fn codepoint_to_char(codepoint: u32) -> Option<char> {
    char::from_u32(codepoint)
}

//! Character classification for the Mini C scanner.
//!
//! Mini C source is single-byte text, so every predicate here works on a
//! raw `u8`. All functions are pure.

/// Checks if a byte can start an identifier (a "super letter").
///
/// # Example
///
/// ```
/// use minic_lex::charclass::is_ident_start;
///
/// assert!(is_ident_start(b'a'));
/// assert!(is_ident_start(b'Z'));
/// assert!(is_ident_start(b'_'));
/// assert!(!is_ident_start(b'1'));
/// assert!(!is_ident_start(b'+'));
/// ```
#[inline]
pub fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Checks if a byte can continue an identifier (a "super letter or digit").
///
/// # Example
///
/// ```
/// use minic_lex::charclass::is_ident_continue;
///
/// assert!(is_ident_continue(b'a'));
/// assert!(is_ident_continue(b'_'));
/// assert!(is_ident_continue(b'7'));
/// assert!(!is_ident_continue(b'-'));
/// assert!(!is_ident_continue(b' '));
/// ```
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Converts a hex digit to its value.
///
/// Returns the value (0-15) for `0-9`, `a-f`, `A-F`, or `None` for anything
/// else.
///
/// # Example
///
/// ```
/// use minic_lex::charclass::hex_digit_value;
///
/// assert_eq!(hex_digit_value(b'0'), Some(0));
/// assert_eq!(hex_digit_value(b'9'), Some(9));
/// assert_eq!(hex_digit_value(b'a'), Some(10));
/// assert_eq!(hex_digit_value(b'F'), Some(15));
/// assert_eq!(hex_digit_value(b'g'), None);
/// ```
#[inline]
pub fn hex_digit_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Returns the value of `b` as a digit in `radix` (8, 10, or 16).
#[inline]
pub fn digit_value(b: u8, radix: u8) -> Option<u8> {
    hex_digit_value(b).filter(|&v| v < radix)
}

/// Checks for the whitespace set of C's `isspace`: space, `\t`, `\n`,
/// vertical tab, form feed, and `\r`.
#[inline]
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

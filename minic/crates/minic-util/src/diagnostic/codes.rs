//! Diagnostic codes for categorizing lexical errors.
//!
//! Every lexical diagnostic carries a [`DiagnosticCode`] so tools and tests
//! can match on it without parsing message text. The lexical codes follow
//! the Mini C error table (1 through 8), followed by the capacity and I/O
//! conditions.
//!
//! ```
//! use minic_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_EXPECTED_AMPERSAND;
//! assert_eq!(code.number(), 2);
//! assert_eq!(code.to_string(), "E0002");
//! ```

use std::fmt;

/// Catalog code of a diagnostic, rendered as the prefix followed by the
/// number zero-padded to four digits (`E0007`).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// `E` for every lexical error.
    pub prefix: &'static str,
    /// Position in the catalog.
    pub number: u32,
}

impl DiagnosticCode {
    /// Makes a code from its parts.
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// The `E`/`W` prefix.
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// The catalog number.
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// The rendered code, such as `E0001`.
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // Lexical errors

    /// E0001: Identifier longer than the identifier buffer
    pub const E_IDENTIFIER_TOO_LONG: Self = Self::new("E", 1);
    /// E0002: `&` not followed by a second `&`
    pub const E_EXPECTED_AMPERSAND: Self = Self::new("E", 2);
    /// E0003: `|` not followed by a second `|`
    pub const E_EXPECTED_PIPE: Self = Self::new("E", 3);
    /// E0004: Character that starts no token
    pub const E_INVALID_CHARACTER: Self = Self::new("E", 4);
    /// E0005: Character literal without closing quote
    pub const E_UNTERMINATED_CHAR: Self = Self::new("E", 5);
    /// E0006: String literal without closing quote
    pub const E_UNTERMINATED_STRING: Self = Self::new("E", 6);
    /// E0007: Block comment without `*/`
    pub const E_UNTERMINATED_COMMENT: Self = Self::new("E", 7);
    /// E0008: Malformed numeric literal
    pub const E_MALFORMED_NUMBER: Self = Self::new("E", 8);
    /// E0009: String literal longer than the string buffer
    pub const E_STRING_TOO_LONG: Self = Self::new("E", 9);
    /// E0010: Comment longer than the comment buffer
    pub const E_COMMENT_TOO_LONG: Self = Self::new("E", 10);
    /// E0011: Input stream could not be read
    pub const E_STREAM_READ: Self = Self::new("E", 11);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_pads_to_four_digits() {
        assert_eq!(DiagnosticCode::new("E", 1).as_str(), "E0001");
        assert_eq!(DiagnosticCode::new("E", 12).as_str(), "E0012");
        assert_eq!(DiagnosticCode::new("E", 1001).as_str(), "E1001");
    }

    #[test]
    fn test_display_and_debug() {
        let code = DiagnosticCode::E_MALFORMED_NUMBER;
        assert_eq!(format!("{}", code), "E0008");
        assert_eq!(format!("{:?}", code), "DiagnosticCode(E0008)");
    }

    #[test]
    fn test_lexical_codes_follow_error_table() {
        let codes = [
            DiagnosticCode::E_IDENTIFIER_TOO_LONG,
            DiagnosticCode::E_EXPECTED_AMPERSAND,
            DiagnosticCode::E_EXPECTED_PIPE,
            DiagnosticCode::E_INVALID_CHARACTER,
            DiagnosticCode::E_UNTERMINATED_CHAR,
            DiagnosticCode::E_UNTERMINATED_STRING,
            DiagnosticCode::E_UNTERMINATED_COMMENT,
            DiagnosticCode::E_MALFORMED_NUMBER,
        ];
        for (i, code) in codes.iter().enumerate() {
            assert_eq!(code.number() as usize, i + 1);
            assert_eq!(code.prefix(), "E");
        }
    }

    #[test]
    fn test_code_equality() {
        assert_eq!(DiagnosticCode::new("E", 6), DiagnosticCode::E_UNTERMINATED_STRING);
        assert_ne!(DiagnosticCode::E_STRING_TOO_LONG, DiagnosticCode::E_COMMENT_TOO_LONG);
    }
}

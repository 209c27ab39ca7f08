//! Scanner configuration.

use serde::{Deserialize, Serialize};

/// Knobs for a [`Scanner`](crate::Scanner).
///
/// The defaults reproduce the classic Mini C scanner: 11-character
/// identifiers, 999-character strings and comments, and the strict rule for
/// what may follow an exponent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Longest identifier spelling kept before `IdentifierTooLong`.
    pub max_identifier_len: usize,

    /// Longest string literal body kept before `StringTooLong`.
    pub max_string_len: usize,

    /// Longest comment body kept before `CommentTooLong`.
    pub max_comment_len: usize,

    /// Only `;`, tab, newline, or `.` may follow an exponent.
    ///
    /// When false, anything that cannot continue a number or identifier is
    /// accepted, end of stream included.
    pub strict_exponent_suffix: bool,

    /// Consume comments without producing tokens for them.
    pub skip_comments: bool,
}

impl ScannerConfig {
    /// Identifier buffer capacity of the classic scanner.
    pub const DEFAULT_MAX_IDENTIFIER_LEN: usize = 11;

    /// String buffer capacity of the classic scanner.
    pub const DEFAULT_MAX_STRING_LEN: usize = 999;

    /// Comment buffer capacity of the classic scanner.
    pub const DEFAULT_MAX_COMMENT_LEN: usize = 999;
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            max_identifier_len: Self::DEFAULT_MAX_IDENTIFIER_LEN,
            max_string_len: Self::DEFAULT_MAX_STRING_LEN,
            max_comment_len: Self::DEFAULT_MAX_COMMENT_LEN,
            strict_exponent_suffix: true,
            skip_comments: false,
        }
    }
}

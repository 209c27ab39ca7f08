//! Lexical error catalog.
//!
//! Every condition the scanner can report is a [`LexError`]. None of them is
//! fatal: the scanner turns each one into a diagnostic and keeps going.

use minic_util::DiagnosticCode;
use thiserror::Error;

/// A lexical error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LexError {
    /// Identifier spelling exceeded the identifier buffer.
    #[error("an identifier length must be at most {max} characters")]
    IdentifierTooLong {
        /// Capacity of the identifier buffer
        max: usize,
    },

    /// A lone `&`.
    #[error("next character must be &")]
    ExpectedAmpersand,

    /// A lone `|`.
    #[error("next character must be |")]
    ExpectedPipe,

    /// A byte that starts no token.
    #[error("invalid character {0:?}")]
    InvalidCharacter(char),

    /// Character literal without its closing `'`.
    #[error("missing closing quote on character literal")]
    UnterminatedChar,

    /// String literal without its closing `"`.
    #[error("missing closing quote on string literal")]
    UnterminatedString,

    /// Block comment without its closing `*/`.
    #[error("unterminated block comment, you need to close the comment")]
    UnterminatedComment,

    /// Bad digits, exponent, or suffix in a numeric literal.
    #[error("invalid number: {0}")]
    MalformedNumber(String),

    /// String literal exceeded the string buffer.
    #[error("a string literal length must be at most {max} characters")]
    StringTooLong {
        /// Capacity of the string buffer
        max: usize,
    },

    /// Comment exceeded the comment buffer.
    #[error("a comment length must be at most {max} characters")]
    CommentTooLong {
        /// Capacity of the comment buffer
        max: usize,
    },

    /// The input stream failed; scanning stopped as if at end of stream.
    #[error("failed to read input: {0}")]
    Io(String),
}

impl LexError {
    /// Catalog code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::IdentifierTooLong { .. } => DiagnosticCode::E_IDENTIFIER_TOO_LONG,
            LexError::ExpectedAmpersand => DiagnosticCode::E_EXPECTED_AMPERSAND,
            LexError::ExpectedPipe => DiagnosticCode::E_EXPECTED_PIPE,
            LexError::InvalidCharacter(_) => DiagnosticCode::E_INVALID_CHARACTER,
            LexError::UnterminatedChar => DiagnosticCode::E_UNTERMINATED_CHAR,
            LexError::UnterminatedString => DiagnosticCode::E_UNTERMINATED_STRING,
            LexError::UnterminatedComment => DiagnosticCode::E_UNTERMINATED_COMMENT,
            LexError::MalformedNumber(_) => DiagnosticCode::E_MALFORMED_NUMBER,
            LexError::StringTooLong { .. } => DiagnosticCode::E_STRING_TOO_LONG,
            LexError::CommentTooLong { .. } => DiagnosticCode::E_COMMENT_TOO_LONG,
            LexError::Io(_) => DiagnosticCode::E_STREAM_READ,
        }
    }
}

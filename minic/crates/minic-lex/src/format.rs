//! Token rendering.
//!
//! [`write_token`] produces the fixed-column listing line of the classic
//! Mini C scanner, for example:
//!
//! ```text
//! Token     %ident (   4,         main )
//! Token        int (  33,            0 )
//! Token    %number (   5,           42 )
//! ```
//!
//! [`TokenRecord`] is the same information as a serializable value, for
//! machine-readable output.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::token::Token;

/// Listing line for a token, as a `Display` value.
///
/// # Example
///
/// ```
/// use minic_lex::{TokenLine, Token};
///
/// let line = TokenLine(&Token::Number(42)).to_string();
/// assert_eq!(line, "Token    %number (   5,           42 )");
/// ```
pub struct TokenLine<'a>(pub &'a Token);

impl fmt::Display for TokenLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = self.0;
        let name = token.name();
        let number = token.number();

        match token {
            Token::Ident(spelling) => {
                write!(f, "Token {:>10} ( {:>3}, {:>12} )", name, number, spelling)
            },
            Token::Number(value) => {
                write!(f, "Token {:>10} ( {:>3}, {:>12} )", name, number, value)
            },
            Token::RealNumber(value) => {
                write!(f, "Token {:>10} ( {:>3}, {:>12.6})", name, number, value)
            },
            Token::CharLit(ch) => write!(f, "Token {:>10} ( {:>3}, {:>12})", name, number, ch),
            Token::StringLit(text) => {
                write!(f, "Token {:>10} ( {:>3}, {:>12})", name, number, text)
            },
            Token::LineComment(text) | Token::DocComment(text) | Token::BlockComment(text) => {
                write!(f, "Token {:>10} ( {:>3}, {})", name, number, text)
            },
            _ => write!(f, "Token {:>10} ( {:>3}, {:>12} )", name, number, "0"),
        }
    }
}

/// Writes one listing line for `token`, newline included.
///
/// Token text holds one `char` per source byte, so the line is written back
/// as those bytes: a literal or comment comes out exactly as it was read.
///
/// # Example
///
/// ```
/// use minic_lex::{write_token, Token};
///
/// let mut out = Vec::new();
/// write_token(&Token::LessEqual, &mut out).unwrap();
/// assert_eq!(out, b"Token         <= (  22,            0 )\n");
/// ```
pub fn write_token<W: Write + ?Sized>(token: &Token, out: &mut W) -> io::Result<()> {
    let mut line = source_bytes(&TokenLine(token).to_string());
    line.push(b'\n');
    out.write_all(&line)
}

/// Maps each `char` up to U+00FF to the byte it was read from. Anything
/// wider can only come from a hand-built token and is kept as UTF-8.
fn source_bytes(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len());
    let mut wide = [0; 4];
    for ch in text.chars() {
        match u8::try_from(ch) {
            Ok(b) => bytes.push(b),
            Err(_) => bytes.extend_from_slice(ch.encode_utf8(&mut wide).as_bytes()),
        }
    }
    bytes
}

/// Renders the listing line for `token`, without the trailing newline.
pub fn format_token(token: &Token) -> String {
    TokenLine(token).to_string()
}

/// Serializable view of a token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenRecord {
    /// Display name of the token kind.
    pub kind: &'static str,

    /// Ordinal of the token kind.
    pub number: u8,

    /// The token's value, if its kind carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<TokenValue>,
}

/// Value carried by a [`TokenRecord`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// Integer literal.
    Integer(i64),
    /// Real-number literal.
    Real(f64),
    /// Identifier, character, string, or comment text.
    Text(String),
}

impl From<&Token> for TokenRecord {
    fn from(token: &Token) -> Self {
        let value = match token {
            Token::Number(n) => Some(TokenValue::Integer(*n)),
            Token::RealNumber(r) => Some(TokenValue::Real(*r)),
            Token::CharLit(c) => Some(TokenValue::Text(c.to_string())),
            Token::Ident(s)
            | Token::StringLit(s)
            | Token::LineComment(s)
            | Token::DocComment(s)
            | Token::BlockComment(s) => Some(TokenValue::Text(s.clone())),
            _ => None,
        };

        Self {
            kind: token.name(),
            number: token.number(),
            value,
        }
    }
}

//! minic-lex - Lexical Scanner for Mini C
//!
//! This crate turns a Mini C byte stream into tokens, one token per call.
//! It is the front end a Mini C parser pulls from.
//!
//! # Example Usage
//!
//! ```
//! use minic_util::Handler;
//! use minic_lex::{Scanner, Token};
//!
//! let source = "int x = 0x1F;";
//! let mut handler = Handler::new();
//! let mut scanner = Scanner::new(source.as_bytes(), &mut handler);
//!
//! assert_eq!(scanner.next_token(), Token::Int);
//! assert_eq!(scanner.next_token(), Token::Ident("x".to_string()));
//! assert_eq!(scanner.next_token(), Token::Assign);
//! assert_eq!(scanner.next_token(), Token::Number(31));
//! assert_eq!(scanner.next_token(), Token::Semicolon);
//! assert_eq!(scanner.next_token(), Token::Eof);
//! assert!(!handler.has_errors());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type, ordinals, and the keyword table
//! - [`lexer`] - The scanner and its sub-scanners
//! - [`cursor`] - One-byte lookahead cursor over the input stream
//! - [`charclass`] - Character classification
//! - [`format`] - Listing and serializable token rendering
//! - [`config`] - Scanner configuration
//! - [`error`] - Lexical error catalog
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `const`, `else`, `if`, `int`, `return`, `void`, `while`, `char`,
//! `double`, `string`, `for`, `switch`, `case`, `default`, `continue`,
//! `break`
//!
//! ## Literals
//!
//! - **Integer**: `42`, `0x1F`, `017`
//! - **Real**: `3.14`, `2e3`, `2.5e-2`
//! - **Character**: `'a'`
//! - **String**: `"text"`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`, `++`, `--`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Logical**: `&&`, `||`, `!`
//! - **Assignment**: `=`, `+=`, `-=`, `*=`, `/=`, `%=`
//!
//! ## Delimiters
//!
//! `(`, `)`, `{`, `}`, `[`, `]`, `,`, `;`, `:`
//!
//! ## Comments
//!
//! `// line`, `/* block */`, and `/** doc */` comments are tokens too,
//! unless [`ScannerConfig::skip_comments`] is set.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod charclass;
pub mod config;
pub mod cursor;
mod edge_cases;
pub mod error;
pub mod format;
pub mod lexer;
pub mod token;

// Re-export main types for convenience
pub use charclass::{hex_digit_value, is_ident_continue, is_ident_start};
pub use config::ScannerConfig;
pub use cursor::Cursor;
pub use error::LexError;
pub use format::{format_token, write_token, TokenLine, TokenRecord, TokenValue};
pub use lexer::{classify_block_comment, Scanner};
pub use token::{keyword_from_ident, Token, KEYWORDS};

use std::io::Read;

use minic_util::Handler;

/// Scans `reader` to the end, returning every token before `Eof`.
pub fn tokenize<R: Read>(reader: R, handler: &mut Handler, config: ScannerConfig) -> Vec<Token> {
    Scanner::with_config(reader, handler, config).collect()
}

//! Comment scanning.
//!
//! Comments are tokens in Mini C. A line comment holds the text after `//`
//! up to the newline. A block comment holds the text between `/*` and `*/`
//! with every newline stored as the two characters `\n`, so the text always
//! fits on one output line.

use std::io::Read;

use super::buffer::BoundedBuffer;
use crate::error::LexError;
use crate::token::Token;
use crate::Scanner;

impl<'a, R: Read> Scanner<'a, R> {
    /// Scans a line comment after `//`. The newline is left in the stream.
    pub(crate) fn scan_line_comment(&mut self) -> Token {
        let mut buf = BoundedBuffer::new(self.config.max_comment_len);
        while let Some(b) = self.cursor.eat_if(|b| b != b'\n') {
            buf.push(b);
        }

        self.check_comment_overflow(&buf);
        Token::LineComment(buf.into_string())
    }

    /// Scans a block or doc comment after `/*`.
    pub(crate) fn scan_block_comment(&mut self) -> Token {
        let mut buf = BoundedBuffer::new(self.config.max_comment_len);

        let terminated = loop {
            match self.cursor.bump() {
                Some(b'*') if self.cursor.eat(b'/') => break true,
                Some(b'\n') => {
                    buf.push(b'\\');
                    buf.push(b'n');
                },
                Some(b) => buf.push(b),
                None => break false,
            }
        };

        self.check_comment_overflow(&buf);
        if !terminated {
            self.report(LexError::UnterminatedComment);
        }

        classify_block_comment(buf.into_string())
    }

    fn check_comment_overflow(&mut self, buf: &BoundedBuffer) {
        if buf.overflowed() {
            self.report(LexError::CommentTooLong {
                max: self.config.max_comment_len,
            });
        }
    }
}

/// Decides whether a captured block comment body is a doc comment.
///
/// A body starting with `*` (written `/** ... */`) is a doc comment. Matching
/// `*` pairs at both ends are stripped, working inward until the ends stop
/// matching; if there was no pair at all, only the leading `*` is dropped.
///
/// # Example
///
/// ```
/// use minic_lex::{classify_block_comment, Token};
///
/// assert_eq!(classify_block_comment("*hello*".into()), Token::DocComment("hello".into()));
/// assert_eq!(classify_block_comment("* hi ".into()), Token::DocComment(" hi ".into()));
/// assert_eq!(classify_block_comment("hello".into()), Token::BlockComment("hello".into()));
/// ```
pub fn classify_block_comment(body: String) -> Token {
    if !body.starts_with('*') {
        return Token::BlockComment(body);
    }

    let mut text = body.as_str();
    let mut paired = false;
    while text.len() >= 2 && text.starts_with('*') && text.ends_with('*') {
        text = &text[1..text.len() - 1];
        paired = true;
    }
    if !paired {
        text = &text[1..];
    }

    Token::DocComment(text.to_string())
}

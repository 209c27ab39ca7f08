//! String and character literal scanning.
//!
//! Mini C literals have no escape sequences: a character literal is exactly
//! one byte between `'` quotes, and a string runs to the next `"`.

use std::io::Read;

use super::buffer::BoundedBuffer;
use crate::error::LexError;
use crate::token::Token;
use crate::Scanner;

impl<'a, R: Read> Scanner<'a, R> {
    /// Scans a character literal after its opening `'`.
    ///
    /// If the byte after the character is not a closing quote, it is
    /// retracted so the next token starts there.
    pub(crate) fn scan_char(&mut self) -> Token {
        let value = match self.cursor.bump() {
            Some(b) => char::from(b),
            None => {
                self.report(LexError::UnterminatedChar);
                return Token::CharLit('\0');
            },
        };

        match self.cursor.bump() {
            Some(b'\'') => {},
            Some(other) => {
                self.cursor.retract(other);
                self.report(LexError::UnterminatedChar);
            },
            None => self.report(LexError::UnterminatedChar),
        }

        Token::CharLit(value)
    }

    /// Scans a string literal after its opening `"`.
    ///
    /// Always returns a string token. A missing closing quote or an
    /// over-long body is reported, and the token holds what was read.
    pub(crate) fn scan_string(&mut self) -> Token {
        let mut buf = BoundedBuffer::new(self.config.max_string_len);

        let terminated = loop {
            match self.cursor.bump() {
                Some(b'"') => break true,
                Some(b) => buf.push(b),
                None => break false,
            }
        };

        if buf.overflowed() {
            self.report(LexError::StringTooLong {
                max: self.config.max_string_len,
            });
        }
        if !terminated {
            self.report(LexError::UnterminatedString);
        }

        Token::StringLit(buf.into_string())
    }
}

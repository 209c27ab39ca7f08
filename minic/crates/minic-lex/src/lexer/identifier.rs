//! Identifier and keyword scanning.

use std::io::Read;

use super::buffer::BoundedBuffer;
use crate::charclass::is_ident_continue;
use crate::error::LexError;
use crate::token::{keyword_from_ident, Token};
use crate::Scanner;

impl<'a, R: Read> Scanner<'a, R> {
    /// Scans an identifier or keyword whose first byte was already consumed.
    ///
    /// Identifier-continue bytes are consumed greedily. A spelling longer
    /// than the identifier buffer is reported and kept in truncated form,
    /// which is then looked up like any other spelling.
    pub(crate) fn scan_identifier(&mut self, first: u8) -> Token {
        let mut buf = BoundedBuffer::new(self.config.max_identifier_len);
        buf.push(first);
        while let Some(b) = self.cursor.eat_if(is_ident_continue) {
            buf.push(b);
        }

        if buf.overflowed() {
            self.report(LexError::IdentifierTooLong {
                max: self.config.max_identifier_len,
            });
        }

        let spelling = buf.into_string();
        keyword_from_ident(&spelling).unwrap_or(Token::Ident(spelling))
    }
}

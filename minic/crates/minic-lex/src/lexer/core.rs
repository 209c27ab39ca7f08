//! Core scanner implementation.
//!
//! This module contains the Scanner struct and its dispatch loop.

use std::io::Read;

use minic_util::{DiagnosticBuilder, Handler, Location};
use tracing::{debug, trace};

use crate::charclass::is_ident_start;
use crate::config::ScannerConfig;
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::Token;

/// Scanner for Mini C.
///
/// The scanner reads bytes from any [`Read`] source and produces one token
/// per call to [`Scanner::next_token`]. Lexical errors are reported to the
/// caller's [`Handler`] and never stop the scan: the scanner resumes with the
/// rest of the stream and still returns a token.
pub struct Scanner<'a, R> {
    /// Byte cursor over the input stream.
    pub(crate) cursor: Cursor<R>,

    /// Error handler for reporting lexical errors.
    handler: &'a mut Handler,

    /// Buffer capacities and suffix rules.
    pub(crate) config: ScannerConfig,

    /// Where the token being scanned started.
    token_start: Location,

    /// Set once `Eof` was returned.
    finished: bool,
}

impl<'a, R: Read> Scanner<'a, R> {
    /// Creates a scanner with the default configuration.
    pub fn new(reader: R, handler: &'a mut Handler) -> Self {
        Self::with_config(reader, handler, ScannerConfig::default())
    }

    /// Creates a scanner with the given configuration.
    pub fn with_config(reader: R, handler: &'a mut Handler, config: ScannerConfig) -> Self {
        Self {
            cursor: Cursor::new(reader),
            handler,
            config,
            token_start: Location::START,
            finished: false,
        }
    }

    /// Returns the next token.
    ///
    /// Skips whitespace, then dispatches on the next byte. Invalid input is
    /// reported and skipped until something forms a token, so the result is
    /// always a real token. At end of stream this returns `Token::Eof`, and
    /// keeps returning it on further calls.
    pub fn next_token(&mut self) -> Token {
        loop {
            if let Some(token) = self.scan_once() {
                trace!(token = %token, at = %self.token_start, "scanned token");
                if token.is_eof() {
                    self.finished = true;
                }
                return token;
            }
        }
    }

    /// One pass of the dispatch loop. `None` means nothing was produced and
    /// the loop should go around again.
    fn scan_once(&mut self) -> Option<Token> {
        self.cursor.skip_whitespace();
        self.token_start = self.cursor.location();

        let b = match self.cursor.bump() {
            Some(b) => b,
            None => {
                if let Some(err) = self.cursor.take_error() {
                    self.report(LexError::Io(err.to_string()));
                }
                return Some(Token::Eof);
            },
        };

        let token = match b {
            b'(' => Token::LParen,
            b')' => Token::RParen,
            b',' => Token::Comma,
            b';' => Token::Semicolon,
            b'[' => Token::LBracket,
            b']' => Token::RBracket,
            b'{' => Token::LBrace,
            b'}' => Token::RBrace,
            b':' => Token::Colon,
            b'/' => return self.scan_slash(),
            b'!' => self.scan_bang(),
            b'%' => self.scan_percent(),
            b'*' => self.scan_star(),
            b'+' => self.scan_plus(),
            b'-' => self.scan_minus(),
            b'<' => self.scan_less(),
            b'=' => self.scan_equals(),
            b'>' => self.scan_greater(),
            b'&' => return self.scan_ampersand(),
            b'|' => return self.scan_pipe(),
            b'\'' => self.scan_char(),
            b'"' => self.scan_string(),
            b if is_ident_start(b) => self.scan_identifier(b),
            b if b.is_ascii_digit() => self.scan_number(b),
            other => {
                self.report(LexError::InvalidCharacter(char::from(other)));
                return None;
            },
        };

        Some(token)
    }

    /// Reports a lexical error at the start of the current token.
    pub(crate) fn report(&mut self, error: LexError) {
        self.diagnostic(&error).emit(self.handler);
    }

    /// Reports an error together with the byte found in place of the
    /// expected one.
    pub(crate) fn report_found(&mut self, error: LexError, found: Option<u8>) {
        let note = match found {
            Some(b) => format!("found {:?}", char::from(b)),
            None => "found end of input".to_string(),
        };
        self.diagnostic(&error).note(note).emit(self.handler);
    }

    fn diagnostic(&self, error: &LexError) -> DiagnosticBuilder {
        debug!(code = %error.code(), at = %self.token_start, "{}", error);
        DiagnosticBuilder::error(error.to_string())
            .code(error.code())
            .location(self.token_start)
    }

    /// Location of the next byte to be scanned (1-based).
    pub fn location(&self) -> Location {
        self.cursor.location()
    }

    /// Location where the most recent token started.
    pub fn token_start(&self) -> Location {
        self.token_start
    }

    /// The configuration this scanner runs with.
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }
}

impl<'a, R: Read> Iterator for Scanner<'a, R> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token == Token::Eof {
            None
        } else {
            Some(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minic_util::DiagnosticCode;

    fn scan_all(source: &str) -> (Vec<Token>, Handler) {
        let mut handler = Handler::new();
        let tokens = Scanner::new(source.as_bytes(), &mut handler).collect();
        (tokens, handler)
    }

    #[test]
    fn test_punctuation() {
        let (tokens, handler) = scan_all("( ) , ; [ ] { } :");
        assert_eq!(
            tokens,
            vec![
                Token::LParen,
                Token::RParen,
                Token::Comma,
                Token::Semicolon,
                Token::LBracket,
                Token::RBracket,
                Token::LBrace,
                Token::RBrace,
                Token::Colon,
            ]
        );
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_eof_repeats() {
        let mut handler = Handler::new();
        let mut scanner = Scanner::new("x".as_bytes(), &mut handler);
        assert_eq!(scanner.next_token(), Token::Ident("x".into()));
        assert_eq!(scanner.next_token(), Token::Eof);
        assert_eq!(scanner.next_token(), Token::Eof);
    }

    #[test]
    fn test_next_token_mixes_with_iterator() {
        let mut handler = Handler::new();
        let mut scanner = Scanner::new("a b c".as_bytes(), &mut handler);
        assert_eq!(scanner.next_token(), Token::Ident("a".into()));
        assert_eq!(scanner.by_ref().next(), Some(Token::Ident("b".into())));
        let token: Token = scanner.next_token();
        assert!(!token.is_eof());
        assert_eq!(scanner.next_token(), Token::Eof);
    }

    #[test]
    fn test_iterator_stops_after_eof() {
        let mut handler = Handler::new();
        let mut scanner = Scanner::new("a".as_bytes(), &mut handler);
        assert_eq!(scanner.next(), Some(Token::Ident("a".into())));
        assert_eq!(scanner.next(), None);
        assert_eq!(scanner.next(), None);
    }

    #[test]
    fn test_invalid_character_is_skipped() {
        let (tokens, handler) = scan_all("a $ b");
        assert_eq!(
            tokens,
            vec![Token::Ident("a".into()), Token::Ident("b".into())]
        );
        assert_eq!(handler.codes(), vec![DiagnosticCode::E_INVALID_CHARACTER]);
    }

    #[test]
    fn test_invalid_characters_in_a_row() {
        let (tokens, handler) = scan_all("#@`x");
        assert_eq!(tokens, vec![Token::Ident("x".into())]);
        assert_eq!(handler.error_count(), 3);
    }

    #[test]
    fn test_invalid_character_at_end_still_yields_eof() {
        let mut handler = Handler::new();
        let mut scanner = Scanner::new("$".as_bytes(), &mut handler);
        assert_eq!(scanner.next_token(), Token::Eof);
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_error_location_is_token_start() {
        let (_, handler) = scan_all("int\n  $");
        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].location, Location::new(2, 3));
    }

    #[test]
    fn test_token_start_tracks_last_token() {
        let mut handler = Handler::new();
        let mut scanner = Scanner::new("a\n  bc".as_bytes(), &mut handler);
        scanner.next_token();
        assert_eq!(scanner.token_start(), Location::new(1, 1));
        scanner.next_token();
        assert_eq!(scanner.token_start(), Location::new(2, 3));
        assert_eq!(scanner.location(), Location::new(2, 5));
    }

    struct BrokenPipe;

    impl Read for BrokenPipe {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn test_read_failure_reports_and_ends() {
        let mut handler = Handler::new();
        let mut scanner = Scanner::new(BrokenPipe, &mut handler);
        assert_eq!(scanner.next_token(), Token::Eof);
        assert_eq!(scanner.next_token(), Token::Eof);
        assert_eq!(handler.codes(), vec![DiagnosticCode::E_STREAM_READ]);
    }

    #[test]
    fn test_statement() {
        let (tokens, handler) = scan_all("int x = 42;");
        assert_eq!(
            tokens,
            vec![
                Token::Int,
                Token::Ident("x".into()),
                Token::Assign,
                Token::Number(42),
                Token::Semicolon,
            ]
        );
        assert!(!handler.has_errors());
    }
}

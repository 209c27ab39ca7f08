//! Byte cursor over the scanner's input stream.
//!
//! This module provides the `Cursor` struct, a one-slot lookahead buffer
//! wrapping any [`Read`] implementation. It is the only place the scanner
//! touches the stream: every other component goes through `peek`, `bump`,
//! `eat`, and `retract`. The cursor also tracks the line and column of the
//! next byte so diagnostics can say where a problem started.

use std::io::{self, Read};

use minic_util::Location;
use tracing::warn;

/// A cursor for reading an input stream one byte at a time.
///
/// At most one byte is ever held back: either a byte that was peeked but not
/// consumed, or a byte that was consumed and then retracted. Pushback depth
/// never exceeds one.
///
/// Read failures end the stream; the error is kept and can be collected with
/// [`Cursor::take_error`].
///
/// # Example
///
/// ```
/// use minic_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("<=x".as_bytes());
///
/// assert_eq!(cursor.bump(), Some(b'<'));
/// assert!(cursor.eat(b'='));
/// assert!(!cursor.eat(b'='));
/// assert_eq!(cursor.peek(), Some(b'x'));
/// ```
pub struct Cursor<R> {
    /// The underlying byte stream.
    bytes: io::Bytes<R>,

    /// Lookahead slot: `Some(None)` means end of stream was already seen.
    peeked: Option<Option<u8>>,

    /// Location of the next byte to be consumed.
    location: Location,

    /// Location before the most recent `bump`, restored by `retract`.
    previous: Location,

    /// First read failure, if any, until taken.
    error: Option<io::Error>,

    /// Set once a read fails; the stream stays ended afterwards.
    failed: bool,
}

impl<R: Read> Cursor<R> {
    /// Creates a new cursor positioned at the start of `reader`.
    ///
    /// The cursor reads one byte per call, so wrap files in a
    /// [`std::io::BufReader`].
    pub fn new(reader: R) -> Self {
        Self {
            bytes: reader.bytes(),
            peeked: None,
            location: Location::START,
            previous: Location::START,
            error: None,
            failed: false,
        }
    }

    /// Returns the next byte without consuming it, or `None` at end of stream.
    ///
    /// # Example
    ///
    /// ```
    /// use minic_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab".as_bytes());
    /// assert_eq!(cursor.peek(), Some(b'a'));
    /// assert_eq!(cursor.peek(), Some(b'a'));
    /// ```
    pub fn peek(&mut self) -> Option<u8> {
        match self.peeked {
            Some(b) => b,
            None => {
                let b = self.read_byte();
                self.peeked = Some(b);
                b
            },
        }
    }

    /// Consumes and returns the next byte, or `None` at end of stream.
    pub fn bump(&mut self) -> Option<u8> {
        let b = match self.peeked.take() {
            Some(b) => b,
            None => self.read_byte(),
        };

        if let Some(b) = b {
            self.previous = self.location;
            if b == b'\n' {
                self.location.line += 1;
                self.location.column = 1;
            } else {
                self.location.column += 1;
            }
        }

        b
    }

    /// Consumes the next byte if it equals `expected`.
    ///
    /// Returns true if the byte was matched and consumed.
    pub fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consumes and returns the next byte if it satisfies `pred`.
    pub fn eat_if(&mut self, pred: impl FnOnce(u8) -> bool) -> Option<u8> {
        match self.peek() {
            Some(b) if pred(b) => self.bump(),
            _ => None,
        }
    }

    /// Pushes the most recently consumed byte back onto the stream.
    ///
    /// The next `peek` or `bump` sees `b` again. Only one byte may be pushed
    /// back, and only when nothing has been peeked since the last `bump`.
    ///
    /// # Example
    ///
    /// ```
    /// use minic_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab".as_bytes());
    /// let b = cursor.bump().unwrap();
    /// cursor.retract(b);
    /// assert_eq!(cursor.bump(), Some(b'a'));
    /// ```
    pub fn retract(&mut self, b: u8) {
        debug_assert!(self.peeked.is_none(), "pushback depth exceeds one");
        self.peeked = Some(Some(b));
        self.location = self.previous;
    }

    /// Skips C whitespace.
    pub fn skip_whitespace(&mut self) {
        while self.eat_if(crate::charclass::is_space).is_some() {}
    }

    /// Returns true if the stream has no more bytes.
    pub fn is_at_end(&mut self) -> bool {
        self.peek().is_none()
    }

    /// Location of the next byte to be consumed.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Takes the read failure that ended the stream, if there was one.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn read_byte(&mut self) -> Option<u8> {
        if self.failed {
            return None;
        }
        loop {
            match self.bytes.next()? {
                Ok(b) => return Some(b),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!(error = %e, "input stream read failed, treating as end of stream");
                    self.error = Some(e);
                    self.failed = true;
                    return None;
                },
            }
        }
    }
}

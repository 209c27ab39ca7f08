//! Integer and real-number scanning.
//!
//! Integers come in three radixes, chosen by the leading digits:
//!
//! - Decimal: `42`
//! - Hexadecimal: `0x1F`, `0X1f`
//! - Octal: `017` (a leading `0` followed by `0`-`7`)
//!
//! A `0` followed by any other byte is the literal zero, so `08` scans as
//! `0` and then `8`.
//!
//! Real numbers are an integer part followed by `.` and a fraction, an
//! exponent, or both: `3.14`, `2e3`, `2.5e+2`, `2e-3`.

use std::io::Read;

use crate::charclass::{digit_value, is_ident_continue};
use crate::error::LexError;
use crate::token::Token;
use crate::Scanner;

impl<'a, R: Read> Scanner<'a, R> {
    /// Scans a numeric literal whose first digit was already consumed.
    ///
    /// # Returns
    ///
    /// Either `Token::Number(i64)` or `Token::RealNumber(f64)`
    pub(crate) fn scan_number(&mut self, first: u8) -> Token {
        let integer = self.scan_integer(first);

        match self.cursor.peek() {
            Some(b'.') => {
                self.cursor.bump();
                self.scan_fraction(integer)
            },
            Some(b'e') | Some(b'E') => {
                self.cursor.bump();
                self.scan_exponent(integer as f64)
            },
            _ => Token::Number(integer),
        }
    }

    /// Scans the rest of an integer whose first digit was already consumed.
    fn scan_integer(&mut self, first: u8) -> i64 {
        if first != b'0' {
            return self.accumulate(10, i64::from(first - b'0')).0;
        }

        match self.cursor.peek() {
            Some(b'x') | Some(b'X') => {
                self.cursor.bump();
                let (value, digits) = self.accumulate(16, 0);
                if digits == 0 {
                    self.report(LexError::MalformedNumber(
                        "missing hexadecimal digits after 0x".to_string(),
                    ));
                }
                value
            },
            Some(b'0'..=b'7') => self.accumulate(8, 0).0,
            _ => 0,
        }
    }

    /// Folds digits of `radix` into `value` while they keep coming.
    ///
    /// Returns the value and the number of digits consumed. On overflow the
    /// value saturates at `i64::MAX`, the remaining digits are still
    /// consumed, and one error is reported.
    fn accumulate(&mut self, radix: u8, mut value: i64) -> (i64, usize) {
        let mut digits = 0;
        let mut overflowed = false;

        while let Some(d) = self.cursor.peek().and_then(|b| digit_value(b, radix)) {
            self.cursor.bump();
            digits += 1;
            if overflowed {
                continue;
            }
            match value
                .checked_mul(i64::from(radix))
                .and_then(|v| v.checked_add(i64::from(d)))
            {
                Some(v) => value = v,
                None => {
                    value = i64::MAX;
                    overflowed = true;
                },
            }
        }

        if overflowed {
            self.report(LexError::MalformedNumber(
                "integer literal is too large".to_string(),
            ));
        }

        (value, digits)
    }

    /// Scans the digits after `.`, then an optional exponent.
    fn scan_fraction(&mut self, integer: i64) -> Token {
        let mut digits = String::new();
        while let Some(b) = self.cursor.eat_if(|b| b.is_ascii_digit()) {
            digits.push(char::from(b));
        }

        let fraction = if digits.is_empty() {
            self.report(LexError::MalformedNumber(
                "no digits after decimal point".to_string(),
            ));
            0.0
        } else {
            format!("0.{}", digits).parse::<f64>().unwrap_or_default()
        };
        let mantissa = integer as f64 + fraction;

        if self.cursor.eat(b'e') || self.cursor.eat(b'E') {
            self.scan_exponent(mantissa)
        } else {
            Token::RealNumber(mantissa)
        }
    }

    /// Scans an exponent after `e`/`E` and applies it to `mantissa`.
    ///
    /// The magnitude goes through the same integer rules as any literal, so
    /// `1e010` is `1e8`.
    fn scan_exponent(&mut self, mantissa: f64) -> Token {
        let negative = if self.cursor.eat(b'-') {
            true
        } else {
            self.cursor.eat(b'+');
            false
        };

        let magnitude = match self.cursor.eat_if(|b| b.is_ascii_digit()) {
            Some(first) => self.scan_integer(first),
            None => {
                self.report(LexError::MalformedNumber(
                    "missing exponent digits".to_string(),
                ));
                0
            },
        };

        let scale = 10f64.powi(i32::try_from(magnitude).unwrap_or(i32::MAX));
        let mut value = if mantissa == 0.0 {
            0.0
        } else if negative {
            mantissa / scale
        } else {
            mantissa * scale
        };
        if !value.is_finite() {
            self.report(LexError::MalformedNumber(
                "real number is too large".to_string(),
            ));
            value = f64::MAX;
        }

        self.check_exponent_suffix();
        Token::RealNumber(value)
    }

    /// Checks the byte after an exponent without consuming it.
    fn check_exponent_suffix(&mut self) {
        let next = self.cursor.peek();
        let accepted = if self.config.strict_exponent_suffix {
            matches!(next, Some(b';' | b'\t' | b'\n' | b'.'))
        } else {
            !matches!(next, Some(b) if is_ident_continue(b))
        };

        if !accepted {
            let found = match next {
                Some(b) => format!("{:?}", char::from(b)),
                None => "end of input".to_string(),
            };
            self.report(LexError::MalformedNumber(format!(
                "unexpected {} after exponent",
                found
            )));
        }
    }
}

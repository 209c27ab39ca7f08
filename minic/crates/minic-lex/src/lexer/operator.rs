//! Operator scanning.
//!
//! Each method runs after the operator's first byte was consumed and peeks
//! at most one more byte to pick between the single and compound forms. A
//! peeked byte that does not belong to the operator stays in the stream.

use std::io::Read;

use crate::error::LexError;
use crate::token::Token;
use crate::Scanner;

impl<'a, R: Read> Scanner<'a, R> {
    /// Handles: `!`, `!=`
    pub(crate) fn scan_bang(&mut self) -> Token {
        if self.cursor.eat(b'=') {
            Token::NotEqual
        } else {
            Token::Not
        }
    }

    /// Handles: `%`, `%=`
    pub(crate) fn scan_percent(&mut self) -> Token {
        if self.cursor.eat(b'=') {
            Token::RemainderAssign
        } else {
            Token::Remainder
        }
    }

    /// Handles: `*`, `*=`
    pub(crate) fn scan_star(&mut self) -> Token {
        if self.cursor.eat(b'=') {
            Token::MulAssign
        } else {
            Token::Mul
        }
    }

    /// Handles: `+`, `++`, `+=`
    pub(crate) fn scan_plus(&mut self) -> Token {
        if self.cursor.eat(b'+') {
            Token::Increment
        } else if self.cursor.eat(b'=') {
            Token::AddAssign
        } else {
            Token::Plus
        }
    }

    /// Handles: `-`, `--`, `-=`
    pub(crate) fn scan_minus(&mut self) -> Token {
        if self.cursor.eat(b'-') {
            Token::Decrement
        } else if self.cursor.eat(b'=') {
            Token::SubAssign
        } else {
            Token::Minus
        }
    }

    /// Handles: `<`, `<=`
    pub(crate) fn scan_less(&mut self) -> Token {
        if self.cursor.eat(b'=') {
            Token::LessEqual
        } else {
            Token::Less
        }
    }

    /// Handles: `=`, `==`
    pub(crate) fn scan_equals(&mut self) -> Token {
        if self.cursor.eat(b'=') {
            Token::Equal
        } else {
            Token::Assign
        }
    }

    /// Handles: `>`, `>=`
    pub(crate) fn scan_greater(&mut self) -> Token {
        if self.cursor.eat(b'=') {
            Token::GreaterEqual
        } else {
            Token::Greater
        }
    }

    /// Handles: `&&`. A lone `&` is an error and produces no token.
    pub(crate) fn scan_ampersand(&mut self) -> Option<Token> {
        if self.cursor.eat(b'&') {
            Some(Token::And)
        } else {
            let found = self.cursor.peek();
            self.report_found(LexError::ExpectedAmpersand, found);
            None
        }
    }

    /// Handles: `||`. A lone `|` is an error and produces no token.
    pub(crate) fn scan_pipe(&mut self) -> Option<Token> {
        if self.cursor.eat(b'|') {
            Some(Token::Or)
        } else {
            let found = self.cursor.peek();
            self.report_found(LexError::ExpectedPipe, found);
            None
        }
    }

    /// Handles: `/`, `/=`, `//`, `/*`, `/**`
    ///
    /// Returns `None` for a comment when comments are skipped.
    pub(crate) fn scan_slash(&mut self) -> Option<Token> {
        let comment = if self.cursor.eat(b'*') {
            self.scan_block_comment()
        } else if self.cursor.eat(b'/') {
            self.scan_line_comment()
        } else if self.cursor.eat(b'=') {
            return Some(Token::DivAssign);
        } else {
            return Some(Token::Div);
        };

        if self.config.skip_comments {
            None
        } else {
            Some(comment)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Scanner, Token};
    use minic_util::{DiagnosticCode, Handler};

    fn scan_all(source: &str) -> (Vec<Token>, Handler) {
        let mut handler = Handler::new();
        let tokens = Scanner::new(source.as_bytes(), &mut handler).collect();
        (tokens, handler)
    }

    fn tokens(source: &str) -> Vec<Token> {
        let (tokens, handler) = scan_all(source);
        assert!(!handler.has_errors(), "errors scanning {:?}", source);
        tokens
    }

    #[test]
    fn test_single_and_compound_forms() {
        assert_eq!(
            tokens("! != % %= * *= + ++ += - -- -= / /= < <= = == > >="),
            vec![
                Token::Not,
                Token::NotEqual,
                Token::Remainder,
                Token::RemainderAssign,
                Token::Mul,
                Token::MulAssign,
                Token::Plus,
                Token::Increment,
                Token::AddAssign,
                Token::Minus,
                Token::Decrement,
                Token::SubAssign,
                Token::Div,
                Token::DivAssign,
                Token::Less,
                Token::LessEqual,
                Token::Assign,
                Token::Equal,
                Token::Greater,
                Token::GreaterEqual,
            ]
        );
    }

    #[test]
    fn test_less_leaves_next_byte() {
        assert_eq!(
            tokens("<x"),
            vec![Token::Less, Token::Ident("x".into())]
        );
    }

    #[test]
    fn test_logical_operators() {
        assert_eq!(tokens("a&&b||c").len(), 5);
        assert_eq!(tokens("&&")[0], Token::And);
        assert_eq!(tokens("||")[0], Token::Or);
    }

    #[test]
    fn test_greedy_pairs() {
        assert_eq!(
            tokens("+++"),
            vec![Token::Increment, Token::Plus]
        );
        assert_eq!(
            tokens("==="),
            vec![Token::Equal, Token::Assign]
        );
        assert_eq!(tokens("+-"), vec![Token::Plus, Token::Minus]);
    }

    #[test]
    fn test_lone_ampersand() {
        let (tokens, handler) = scan_all("&x");
        assert_eq!(tokens, vec![Token::Ident("x".into())]);
        assert_eq!(handler.codes(), vec![DiagnosticCode::E_EXPECTED_AMPERSAND]);
    }

    #[test]
    fn test_lone_pipe() {
        let (tokens, handler) = scan_all("a | b");
        assert_eq!(
            tokens,
            vec![Token::Ident("a".into()), Token::Ident("b".into())]
        );
        assert_eq!(handler.codes(), vec![DiagnosticCode::E_EXPECTED_PIPE]);
    }

    #[test]
    fn test_lone_ampersand_at_end() {
        let (tokens, handler) = scan_all("&");
        assert!(tokens.is_empty());
        assert_eq!(handler.diagnostics()[0].notes, vec!["found end of input"]);
    }

    #[test]
    fn test_lone_operator_notes_found_byte() {
        let (_, handler) = scan_all("a &b |;");
        let notes: Vec<Vec<String>> = handler.diagnostics().into_iter().map(|d| d.notes).collect();
        assert_eq!(notes, vec![vec!["found 'b'".to_string()], vec!["found ';'".to_string()]]);
    }
}

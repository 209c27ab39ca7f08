//! Token definitions for Mini C.
//!
//! [`Token`] is a closed enumeration with one variant per token kind. Only
//! the literal, identifier, and comment variants carry a value, so the value
//! a token holds is always determined by its kind.
//!
//! Every kind has a fixed ordinal and display name in the Mini C token
//! table (`!` is 0, `multilinecomment` is 55). The token formatter prints
//! both.

use std::fmt;

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

/// A Mini C token.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// `!`
    Not,
    /// `!=`
    NotEqual,
    /// `%`
    Remainder,
    /// `%=`
    RemainderAssign,
    /// An identifier and its spelling.
    Ident(String),
    /// An integer literal.
    Number(i64),
    /// `&&`
    And,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `*`
    Mul,
    /// `*=`
    MulAssign,
    /// `+`
    Plus,
    /// `++`
    Increment,
    /// `+=`
    AddAssign,
    /// `,`
    Comma,
    /// `-`
    Minus,
    /// `--`
    Decrement,
    /// `-=`
    SubAssign,
    /// `/`
    Div,
    /// `/=`
    DivAssign,
    /// `;`
    Semicolon,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `=`
    Assign,
    /// `==`
    Equal,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// End of the input stream.
    Eof,
    /// `const`
    Const,
    /// `else`
    Else,
    /// `if`
    If,
    /// `int`
    Int,
    /// `return`
    Return,
    /// `void`
    Void,
    /// `while`
    While,
    /// `{`
    LBrace,
    /// `||`
    Or,
    /// `}`
    RBrace,
    /// `char`
    Char,
    /// `double`
    Double,
    /// `string`
    String,
    /// `for`
    For,
    /// `switch`
    Switch,
    /// `case`
    Case,
    /// `default`
    Default,
    /// `continue`
    Continue,
    /// `break`
    Break,
    /// `:`
    Colon,
    /// A character literal.
    CharLit(char),
    /// A string literal, without its quotes.
    StringLit(String),
    /// A real-number literal.
    RealNumber(f64),
    /// A `//` comment, without the slashes.
    LineComment(String),
    /// A `/** ... */` comment with its marker stars stripped.
    DocComment(String),
    /// A `/* ... */` comment, without the delimiters.
    BlockComment(String),
}

/// Reserved spellings, in keyword-table order.
pub const KEYWORDS: [(&str, Token); 16] = [
    ("const", Token::Const),
    ("else", Token::Else),
    ("if", Token::If),
    ("int", Token::Int),
    ("return", Token::Return),
    ("void", Token::Void),
    ("while", Token::While),
    ("char", Token::Char),
    ("double", Token::Double),
    ("string", Token::String),
    ("for", Token::For),
    ("switch", Token::Switch),
    ("case", Token::Case),
    ("default", Token::Default),
    ("continue", Token::Continue),
    ("break", Token::Break),
];

lazy_static! {
    static ref KEYWORD_TABLE: FxHashMap<&'static str, Token> = KEYWORDS.iter().cloned().collect();
}

/// Looks up a spelling in the keyword table.
///
/// # Example
///
/// ```
/// use minic_lex::{keyword_from_ident, Token};
///
/// assert_eq!(keyword_from_ident("while"), Some(Token::While));
/// assert_eq!(keyword_from_ident("While"), None);
/// assert_eq!(keyword_from_ident("main"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<Token> {
    KEYWORD_TABLE.get(ident).cloned()
}

impl Token {
    /// Ordinal of this token's kind in the Mini C token table.
    pub fn number(&self) -> u8 {
        match self {
            Token::Not => 0,
            Token::NotEqual => 1,
            Token::Remainder => 2,
            Token::RemainderAssign => 3,
            Token::Ident(_) => 4,
            Token::Number(_) => 5,
            Token::And => 6,
            Token::LParen => 7,
            Token::RParen => 8,
            Token::Mul => 9,
            Token::MulAssign => 10,
            Token::Plus => 11,
            Token::Increment => 12,
            Token::AddAssign => 13,
            Token::Comma => 14,
            Token::Minus => 15,
            Token::Decrement => 16,
            Token::SubAssign => 17,
            Token::Div => 18,
            Token::DivAssign => 19,
            Token::Semicolon => 20,
            Token::Less => 21,
            Token::LessEqual => 22,
            Token::Assign => 23,
            Token::Equal => 24,
            Token::Greater => 25,
            Token::GreaterEqual => 26,
            Token::LBracket => 27,
            Token::RBracket => 28,
            Token::Eof => 29,
            Token::Const => 30,
            Token::Else => 31,
            Token::If => 32,
            Token::Int => 33,
            Token::Return => 34,
            Token::Void => 35,
            Token::While => 36,
            Token::LBrace => 37,
            Token::Or => 38,
            Token::RBrace => 39,
            Token::Char => 40,
            Token::Double => 41,
            Token::String => 42,
            Token::For => 43,
            Token::Switch => 44,
            Token::Case => 45,
            Token::Default => 46,
            Token::Continue => 47,
            Token::Break => 48,
            Token::Colon => 49,
            Token::CharLit(_) => 50,
            Token::StringLit(_) => 51,
            Token::RealNumber(_) => 52,
            Token::LineComment(_) => 53,
            Token::DocComment(_) => 54,
            Token::BlockComment(_) => 55,
        }
    }

    /// Display name of this token's kind in the Mini C token table.
    pub fn name(&self) -> &'static str {
        match self {
            Token::Not => "!",
            Token::NotEqual => "!=",
            Token::Remainder => "%",
            Token::RemainderAssign => "%=",
            Token::Ident(_) => "%ident",
            Token::Number(_) => "%number",
            Token::And => "&&",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::Mul => "*",
            Token::MulAssign => "*=",
            Token::Plus => "+",
            Token::Increment => "++",
            Token::AddAssign => "+=",
            Token::Comma => ",",
            Token::Minus => "-",
            Token::Decrement => "--",
            Token::SubAssign => "-=",
            Token::Div => "/",
            Token::DivAssign => "/=",
            Token::Semicolon => ";",
            Token::Less => "<",
            Token::LessEqual => "<=",
            Token::Assign => "=",
            Token::Equal => "==",
            Token::Greater => ">",
            Token::GreaterEqual => ">=",
            Token::LBracket => "[",
            Token::RBracket => "]",
            Token::Eof => "eof",
            Token::Const => "const",
            Token::Else => "else",
            Token::If => "if",
            Token::Int => "int",
            Token::Return => "return",
            Token::Void => "void",
            Token::While => "while",
            Token::LBrace => "{",
            Token::Or => "||",
            Token::RBrace => "}",
            Token::Char => "char",
            Token::Double => "double",
            Token::String => "string",
            Token::For => "for",
            Token::Switch => "switch",
            Token::Case => "case",
            Token::Default => "default",
            Token::Continue => "continue",
            Token::Break => "break",
            Token::Colon => ":",
            Token::CharLit(_) => "%char",
            Token::StringLit(_) => "%string",
            Token::RealNumber(_) => "%real_number",
            Token::LineComment(_) => "linecomment",
            Token::DocComment(_) => "docstringcomment",
            Token::BlockComment(_) => "multilinecomment",
        }
    }

    /// Returns true for the end-of-file token.
    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof)
    }

    /// Returns true for reserved words.
    pub fn is_keyword(&self) -> bool {
        matches!(self.number(), 30..=36 | 40..=48)
    }

    /// Returns true for line, doc, and block comments.
    pub fn is_comment(&self) -> bool {
        matches!(
            self,
            Token::LineComment(_) | Token::DocComment(_) | Token::BlockComment(_)
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(name) => write!(f, "{}({})", self.name(), name),
            Token::Number(n) => write!(f, "{}({})", self.name(), n),
            Token::RealNumber(r) => write!(f, "{}({})", self.name(), r),
            Token::CharLit(c) => write!(f, "{}({:?})", self.name(), c),
            Token::StringLit(s)
            | Token::LineComment(s)
            | Token::DocComment(s)
            | Token::BlockComment(s) => write!(f, "{}({:?})", self.name(), s),
            _ => f.write_str(self.name()),
        }
    }
}

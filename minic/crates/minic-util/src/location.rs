//! Source locations for diagnostics.
//!
//! Tokens carry no position information; only diagnostics do. A [`Location`]
//! records where the offending token started so a reader can find it.

use std::fmt;

/// A 1-based line/column position in the input stream.
///
/// Columns count bytes, since Mini C source is single-byte text.
///
/// # Examples
///
/// ```
/// use minic_util::Location;
///
/// let loc = Location::new(2, 5);
/// assert_eq!(loc.line, 2);
/// assert_eq!(loc.column, 5);
/// assert_eq!(loc.to_string(), "2:5");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}

impl Location {
    /// A placeholder location for diagnostics that have no position.
    pub const DUMMY: Location = Location { line: 0, column: 0 };

    /// The location of the first byte of a stream.
    pub const START: Location = Location { line: 1, column: 1 };

    /// Creates a location from a line and a column.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Returns true if this is the placeholder location.
    #[inline]
    pub fn is_dummy(&self) -> bool {
        *self == Self::DUMMY
    }
}

impl Default for Location {
    #[inline]
    fn default() -> Self {
        Self::DUMMY
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_start_location() {
        assert_eq!(Location::START, Location::new(1, 1));
        assert!(!Location::START.is_dummy());
    }

    #[test]
    fn test_default_is_dummy() {
        assert!(Location::default().is_dummy());
    }

    #[test]
    fn test_ordering_is_line_major() {
        assert!(Location::new(1, 80) < Location::new(2, 1));
        assert!(Location::new(3, 2) < Location::new(3, 10));
    }

    #[quickcheck]
    fn prop_display_round_trips(line: u32, column: u32) -> bool {
        let text = Location::new(line, column).to_string();
        let (l, c) = text.split_once(':').unwrap();
        l.parse::<u32>().unwrap() == line && c.parse::<u32>().unwrap() == column
    }
}

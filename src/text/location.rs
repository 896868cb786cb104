//! Logical document coordinates.

use std::fmt;

/// A `(row, column)` position in the raw document.
///
/// `row` is a logical line index and `column` counts `char`s from the start
/// of that line. Locations order by row first, then column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub row: usize,
    pub column: usize,
}

impl Location {
    /// Create a new location.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The start of the document.
    #[must_use]
    pub const fn start() -> Self {
        Self { row: 0, column: 0 }
    }
}

impl From<(usize, usize)> for Location {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_ordering() {
        assert!(Location::new(0, 9) < Location::new(1, 0));
        assert!(Location::new(2, 1) < Location::new(2, 3));
        assert_eq!(Location::from((4, 2)), Location::new(4, 2));
        assert_eq!(Location::start(), Location::default());
    }

    #[test]
    fn test_location_display() {
        assert_eq!(Location::new(3, 14).to_string(), "(3, 14)");
    }
}

//! Error types for wrap cache queries and edits.

use crate::text::Location;
use std::fmt;

/// Result type alias for wrap cache operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for wrap cache operations.
///
/// Every variant is a range error: a caller handed in a coordinate that the
/// cache does not (or no longer) describes. These are bookkeeping defects on
/// the caller's side and are never clamped away.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Logical line index outside the wrapped document.
    LineOutOfRange { index: usize, line_count: usize },
    /// Visual row offset at or beyond the total wrapped height.
    OffsetOutOfRange {
        offset: usize,
        height: usize,
        width: usize,
    },
    /// Splice bounds outside the offset table.
    SpliceOutOfRange { start: usize, end: usize, len: usize },
    /// Edit span that does not fit the cached table or the current document.
    EditOutOfRange {
        start: Location,
        old_end: Location,
        new_end: Location,
        line_count: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LineOutOfRange { index, line_count } => write!(
                f,
                "line index {index} out of bounds for document with {line_count} lines"
            ),
            Self::OffsetOutOfRange {
                offset,
                height,
                width,
            } => write!(
                f,
                "no line at wrapped offset {offset} (height {height}, wrapped at width {width})"
            ),
            Self::SpliceOutOfRange { start, end, len } => {
                write!(f, "splice range {start}..{end} out of bounds for table of length {len}")
            }
            Self::EditOutOfRange {
                start,
                old_end,
                new_end,
                line_count,
            } => write!(
                f,
                "edit {start}..{old_end} -> {start}..{new_end} does not fit {line_count} cached lines"
            ),
        }
    }
}

impl std::error::Error for Error {}

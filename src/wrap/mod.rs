//! Soft-wrap offset cache.
//!
//! A [`WrappedDocument`] keeps, for every logical line of a document, the
//! char offsets where that line breaks into visual lines at a fixed width.
//! Offsets come from a [`LineSplitter`]; the cache only stores them, keeps
//! them current across edits, and answers coordinate queries.
//!
//! Key types:
//!
//! - [`WrapOffsetTable`]: per-line offsets with whole-entry splicing
//! - [`WrappedDocument`]: full wraps, incremental refreshes and lookups
//! - [`WordSplitter`] / [`CharSplitter`]: bundled splitting strategies
//! - [`divide`]: turns a line and its offsets into visual lines
//!
//! # Examples
//!
//! ```
//! use wrapcache::wrap::{CharSplitter, WrappedDocument};
//!
//! let doc = vec!["abcdefgh", "xy"];
//! let mut wrapped = WrappedDocument::with_splitter(3, CharSplitter::new());
//! wrapped.wrap(&doc);
//! assert_eq!(wrapped.get_offsets(0).unwrap(), &[3, 6]);
//! assert_eq!(wrapped.height(), 4);
//! assert_eq!(wrapped.lines(&doc)[0], vec!["abc", "def", "gh"]);
//! ```

mod locator;
mod materialize;
mod splitter;
mod table;
mod wrapped;

pub use materialize::divide;
pub use splitter::{CharSplitter, LineSplitter, WordSplitter};
pub use table::WrapOffsetTable;
pub use wrapped::{VisualPosition, WrappedDocument};

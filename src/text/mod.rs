//! Logical documents and coordinates.
//!
//! The wrap cache only ever reads a document through [`DocumentLines`], so
//! any line store can be wrapped. [`Document`] is a rope-backed
//! implementation whose edits report the span the cache needs.
//!
//! # Examples
//!
//! ```
//! use wrapcache::text::{Document, DocumentLines, Location};
//!
//! let mut doc = Document::from_str("hello world\nfoo");
//! let edit = doc.insert(Location::new(0, 5), "\n");
//! assert_eq!(edit.end_location, Location::new(1, 0));
//! assert_eq!(doc.line_count(), 3);
//! assert_eq!(doc.line(1), " world");
//! ```

mod document;
mod location;

pub use document::{Document, DocumentLines, EditResult};
pub use location::Location;

//! `wrapcache` - incremental soft-wrap cache for text editing surfaces
//!
//! Maps the logical lines of a document onto the visual lines they occupy
//! when wrapped at a fixed cell width, and keeps that mapping current across
//! edits by rewrapping only the rows an edit touched.
//!
//! ```
//! use wrapcache::{Document, Location, WrappedDocument};
//!
//! let mut doc = Document::from_str("the quick brown fox\njumps");
//! let mut wrapped = WrappedDocument::new(10);
//! wrapped.wrap(&doc);
//! assert_eq!(wrapped.height(), 3);
//!
//! let edit = doc.insert(Location::new(1, 5), " over the lazy dog");
//! wrapped
//!     .refresh_range(&doc, edit.start_location, edit.old_end_location, edit.end_location)
//!     .unwrap();
//! assert_eq!(wrapped.offset_to_line_index(3).unwrap(), 1);
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow wrap::WrappedDocument etc
#![allow(clippy::missing_errors_doc)] // Every error is a range error
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::should_implement_trait)] // from_str naming is intentional
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine

pub mod error;
pub mod text;
pub mod unicode;
pub mod wrap;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use text::{Document, DocumentLines, EditResult, Location};
pub use unicode::WidthMethod;
pub use wrap::{
    CharSplitter, LineSplitter, VisualPosition, WordSplitter, WrapOffsetTable, WrappedDocument,
    divide,
};

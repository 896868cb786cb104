//! Unicode utilities for grapheme handling and display width.

mod grapheme;
mod width;

pub use grapheme::{GraphemeInfo, grapheme_indices, grapheme_info, grapheme_width};
pub use width::{WidthMethod, display_width_with_method};

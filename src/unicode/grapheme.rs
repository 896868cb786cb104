//! Grapheme cluster iteration with layout metadata.

use crate::unicode::width::WidthMethod;
use crate::unicode::width::display_width_with_method;
use unicode_segmentation::UnicodeSegmentation;

/// One grapheme cluster of a line, as the splitters see it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphemeInfo<'a> {
    /// The cluster itself.
    pub text: &'a str,
    /// Char index of the cluster's first char within the line.
    pub char_offset: usize,
    pub is_whitespace: bool,
}

impl GraphemeInfo<'_> {
    /// Cell width of this grapheme when placed at column `col`.
    #[must_use]
    pub fn width_at(&self, col: usize, tab_width: usize, method: WidthMethod) -> usize {
        grapheme_width(self.text, col, tab_width, method)
    }
}

/// Iterate over grapheme clusters with byte indices.
pub fn grapheme_indices(s: &str) -> impl Iterator<Item = (usize, &str)> {
    s.grapheme_indices(true)
}

/// Cell width of one grapheme placed at column `col`.
///
/// Tabs advance to the next multiple of `tab_width`.
#[must_use]
pub fn grapheme_width(grapheme: &str, col: usize, tab_width: usize, method: WidthMethod) -> usize {
    if grapheme == "\t" {
        let tab_width = tab_width.max(1);
        tab_width - (col % tab_width)
    } else {
        display_width_with_method(grapheme, method)
    }
}

/// Split a string into graphemes with their char offsets.
///
/// Widths are not precomputed since a tab's width depends on the column it
/// lands on, which changes with every visual line break.
#[must_use]
pub fn grapheme_info(s: &str) -> Vec<GraphemeInfo<'_>> {
    let mut char_offset = 0usize;
    s.graphemes(true)
        .map(|text| {
            let info = GraphemeInfo {
                text,
                char_offset,
                is_whitespace: text.chars().all(char::is_whitespace),
            };
            char_offset += text.chars().count();
            info
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grapheme_indices_emoji() {
        // Family emoji (ZWJ sequence)
        let g: Vec<_> = grapheme_indices("👨‍👩‍👧x").collect();
        assert_eq!(g.len(), 2);
        assert_eq!(g[1], ("👨‍👩‍👧".len(), "x"));
    }

    #[test]
    fn test_grapheme_info_char_offsets() {
        // e + combining acute accent is one grapheme of two chars
        let infos = grapheme_info("e\u{0301}x");
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].text, "e\u{0301}");
        assert_eq!(infos[0].char_offset, 0);
        assert_eq!(infos[0].width_at(0, 4, WidthMethod::WcWidth), 1);
        assert_eq!(infos[1].char_offset, 2);
    }

    #[test]
    fn test_tab_width_depends_on_column() {
        let infos = grapheme_info("ab\tc");
        let tab = infos[2];
        assert!(tab.is_whitespace);
        assert_eq!(tab.width_at(2, 4, WidthMethod::WcWidth), 2);
        assert_eq!(tab.width_at(0, 4, WidthMethod::WcWidth), 4);
        assert_eq!(tab.width_at(5, 4, WidthMethod::WcWidth), 3);
    }

    #[test]
    fn test_grapheme_width_zero_tab_width() {
        assert_eq!(grapheme_width("\t", 3, 0, WidthMethod::WcWidth), 1);
    }
}

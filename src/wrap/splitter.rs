//! Line splitting: deciding where a line breaks at a given width.
//!
//! The cache treats splitting as an opaque pure function behind
//! [`LineSplitter`]. Two grapheme-aware implementations ship with the crate:
//! [`WordSplitter`] breaks between words and folds words that are too long,
//! [`CharSplitter`] breaks wherever the next grapheme would overflow.

use crate::unicode::{GraphemeInfo, WidthMethod, grapheme_info};

/// Computes wrap offsets for a single line.
///
/// Implementations must be deterministic, must return strictly increasing
/// char offsets inside `1..text.chars().count()`, and must return no offsets
/// when `width` is 0.
pub trait LineSplitter {
    /// Char offsets inside `text` where visual lines break at `width` cells.
    fn split(&self, text: &str, width: usize) -> Vec<usize>;

    /// Cells occupied by `text` when drawn at the start of a visual line.
    fn measure(&self, text: &str) -> usize {
        cell_width(text, DEFAULT_TAB_WIDTH, WidthMethod::default())
    }
}

impl<F> LineSplitter for F
where
    F: Fn(&str, usize) -> Vec<usize>,
{
    fn split(&self, text: &str, width: usize) -> Vec<usize> {
        self(text, width)
    }
}

const DEFAULT_TAB_WIDTH: usize = 4;

/// Column reached after laying out `graphemes` from column `col`.
fn advance(
    graphemes: &[GraphemeInfo<'_>],
    col: usize,
    tab_width: usize,
    method: WidthMethod,
) -> usize {
    graphemes
        .iter()
        .fold(col, |col, g| col + g.width_at(col, tab_width, method))
}

fn cell_width(text: &str, tab_width: usize, method: WidthMethod) -> usize {
    advance(&grapheme_info(text), 0, tab_width, method)
}

/// Word-boundary splitter.
///
/// A word is a run of non-whitespace together with the whitespace around it
/// (leading whitespace only for the first word of a line). Words that do not
/// fit the current visual line move to the next one. Words wider than the
/// whole width are folded into width-sized chunks unless folding is off.
/// Trailing whitespace never causes a break on its own.
///
/// Columns, and so tab stops, restart at every visual line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordSplitter {
    method: WidthMethod,
    tab_width: usize,
    fold: bool,
}

impl Default for WordSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSplitter {
    /// Create a splitter with default width method, tab width 4 and folding.
    #[must_use]
    pub fn new() -> Self {
        Self {
            method: WidthMethod::default(),
            tab_width: DEFAULT_TAB_WIDTH,
            fold: true,
        }
    }

    /// Set the width method for ambiguous-width characters.
    #[must_use]
    pub fn width_method(mut self, method: WidthMethod) -> Self {
        self.method = method;
        self
    }

    /// Set tab width.
    #[must_use]
    pub fn tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width.max(1);
        self
    }

    /// Enable or disable folding of words wider than the wrap width.
    #[must_use]
    pub fn fold(mut self, fold: bool) -> Self {
        self.fold = fold;
        self
    }
}

/// Grapheme index ranges of one word: `start..end` with `content_end` marking
/// where the trailing whitespace begins.
struct Word {
    start: usize,
    content_end: usize,
    end: usize,
}

fn words(graphemes: &[GraphemeInfo<'_>]) -> Vec<Word> {
    let mut words = Vec::new();
    let mut i = 0;
    while i < graphemes.len() {
        let start = i;
        while i < graphemes.len() && graphemes[i].is_whitespace {
            i += 1;
        }
        if i == graphemes.len() {
            break;
        }
        while i < graphemes.len() && !graphemes[i].is_whitespace {
            i += 1;
        }
        let content_end = i;
        while i < graphemes.len() && graphemes[i].is_whitespace {
            i += 1;
        }
        words.push(Word {
            start,
            content_end,
            end: i,
        });
    }
    words
}

impl WordSplitter {
    fn advance(&self, graphemes: &[GraphemeInfo<'_>], col: usize) -> usize {
        advance(graphemes, col, self.tab_width, self.method)
    }

    /// Fold one over-wide word starting at column 0; returns the column the
    /// last chunk ends at.
    fn fold_word(
        &self,
        graphemes: &[GraphemeInfo<'_>],
        width: usize,
        breaks: &mut Vec<usize>,
    ) -> usize {
        let mut chunk_cells = 0usize;
        for g in graphemes {
            let mut cells = g.width_at(chunk_cells, self.tab_width, self.method);
            if chunk_cells > 0 && chunk_cells + cells > width {
                breaks.push(g.char_offset);
                chunk_cells = 0;
                cells = g.width_at(0, self.tab_width, self.method);
            }
            chunk_cells += cells;
        }
        chunk_cells
    }
}

impl LineSplitter for WordSplitter {
    fn split(&self, text: &str, width: usize) -> Vec<usize> {
        if width == 0 || text.is_empty() {
            return Vec::new();
        }

        let graphemes = grapheme_info(text);
        let mut breaks = Vec::new();
        let mut line_cells = 0usize;

        for word in words(&graphemes) {
            let content = &graphemes[word.start..word.content_end];
            let trailing = &graphemes[word.content_end..word.end];

            if self.advance(content, line_cells) <= width {
                line_cells = self.advance(trailing, self.advance(content, line_cells));
                continue;
            }

            if line_cells > 0 {
                breaks.push(graphemes[word.start].char_offset);
            }

            let content_end_col = if self.fold && self.advance(content, 0) > width {
                self.fold_word(content, width, &mut breaks)
            } else {
                self.advance(content, 0)
            };
            line_cells = self.advance(trailing, content_end_col);
        }

        breaks
    }

    fn measure(&self, text: &str) -> usize {
        cell_width(text, self.tab_width, self.method)
    }
}

/// Character-boundary splitter.
///
/// Breaks before any grapheme that would overflow the width. A grapheme
/// wider than the width occupies a visual line of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharSplitter {
    method: WidthMethod,
    tab_width: usize,
}

impl Default for CharSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl CharSplitter {
    /// Create a splitter with default width method and tab width 4.
    #[must_use]
    pub fn new() -> Self {
        Self {
            method: WidthMethod::default(),
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    /// Set the width method for ambiguous-width characters.
    #[must_use]
    pub fn width_method(mut self, method: WidthMethod) -> Self {
        self.method = method;
        self
    }

    /// Set tab width.
    #[must_use]
    pub fn tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width.max(1);
        self
    }
}

impl LineSplitter for CharSplitter {
    fn split(&self, text: &str, width: usize) -> Vec<usize> {
        if width == 0 {
            return Vec::new();
        }

        let mut breaks = Vec::new();
        let mut line_cells = 0usize;
        for g in grapheme_info(text) {
            let mut cells = g.width_at(line_cells, self.tab_width, self.method);
            if line_cells > 0 && line_cells + cells > width {
                breaks.push(g.char_offset);
                line_cells = 0;
                cells = g.width_at(0, self.tab_width, self.method);
            }
            line_cells += cells;
        }
        breaks
    }

    fn measure(&self, text: &str) -> usize {
        cell_width(text, self.tab_width, self.method)
    }
}

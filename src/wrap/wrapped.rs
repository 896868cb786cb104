//! A document view wrapped at a fixed width, maintained incrementally.

use crate::error::{Error, Result};
use crate::text::{DocumentLines, Location};
use crate::unicode::grapheme_indices;
use crate::wrap::locator::HeightIndex;
use crate::wrap::{LineSplitter, WordSplitter, WrapOffsetTable, divide};
use std::borrow::Cow;
use std::cell::RefCell;
use tracing::{debug, trace};

/// Position in the wrapped view: a visual row and a cell column within it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VisualPosition {
    pub row: usize,
    pub x: usize,
}

impl VisualPosition {
    /// Create a new visual position.
    #[must_use]
    pub const fn new(row: usize, x: usize) -> Self {
        Self { row, x }
    }
}

/// Wrap offsets for a document at a fixed width.
///
/// The document itself is not stored: every call that needs line text
/// borrows it. After each edit to the document, call
/// [`refresh_range`](Self::refresh_range) once with the edit span before
/// querying again. Queries issued between an edit and its refresh observe
/// stale offsets but never panic.
///
/// # Examples
///
/// ```
/// use wrapcache::WrappedDocument;
/// use wrapcache::text::{Document, Location};
///
/// let mut doc = Document::from_str("hello world\nfoo");
/// let mut wrapped = WrappedDocument::new(5);
/// wrapped.wrap(&doc);
/// assert_eq!(wrapped.height(), 3);
/// assert_eq!(wrapped.offset_to_line_index(2).unwrap(), 1);
///
/// let edit = doc.insert(Location::new(0, 5), "\n");
/// wrapped
///     .refresh_range(&doc, edit.start_location, edit.old_end_location, edit.end_location)
///     .unwrap();
/// assert_eq!(wrapped.line_count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct WrappedDocument<S = WordSplitter> {
    width: usize,
    splitter: S,
    table: WrapOffsetTable,
    heights: RefCell<HeightIndex>,
}

impl WrappedDocument<WordSplitter> {
    /// Create an unwrapped view that will wrap words at `width` cells.
    ///
    /// Call [`wrap`](Self::wrap) before querying.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self::with_splitter(width, WordSplitter::new())
    }
}

impl Default for WrappedDocument<WordSplitter> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<S: LineSplitter> WrappedDocument<S> {
    /// Create an unwrapped view using a custom splitter.
    #[must_use]
    pub fn with_splitter(width: usize, splitter: S) -> Self {
        Self {
            width,
            splitter,
            table: WrapOffsetTable::new(),
            heights: RefCell::new(HeightIndex::default()),
        }
    }

    /// Wrap width in cells; 0 means lines never wrap.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The splitter deciding break positions.
    #[must_use]
    pub fn splitter(&self) -> &S {
        &self.splitter
    }

    /// The cached offsets.
    #[must_use]
    pub fn table(&self) -> &WrapOffsetTable {
        &self.table
    }

    /// Number of logical lines in the cache.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.table.len()
    }

    fn split_line(&self, text: &str) -> Vec<usize> {
        if self.width == 0 {
            return Vec::new();
        }
        let offsets = self.splitter.split(text, self.width);
        debug_assert!(
            offsets.windows(2).all(|pair| pair[0] < pair[1]),
            "splitter returned unordered offsets {offsets:?}"
        );
        offsets
    }

    /// Wrap every line of `document` from scratch.
    ///
    /// The new table replaces the old one in a single assignment.
    pub fn wrap<D: DocumentLines + ?Sized>(&mut self, document: &D) {
        let entries: Vec<Vec<usize>> = (0..document.line_count())
            .map(|row| self.split_line(&document.line(row)))
            .collect();
        debug!(
            lines = entries.len(),
            width = self.width,
            "wrapped document"
        );
        self.table = WrapOffsetTable::from_entries(entries);
        self.heights.get_mut().clear();
    }

    /// Change the wrap width and rewrap the whole document.
    pub fn set_width<D: DocumentLines + ?Sized>(&mut self, document: &D, width: usize) {
        debug!(from = self.width, to = width, "wrap width changed");
        self.width = width;
        self.wrap(document);
    }

    /// Rewrap the rows touched by one edit.
    ///
    /// Must be called once, after `document` already holds the post-edit
    /// text. `start..old_end` is the edited region in pre-edit coordinates
    /// and `start..new_end` the region it became. Rows `start.row` through
    /// `new_end.row + 1` (clamped to the last line) are re-split; the extra
    /// row catches wrap changes caused by content moving into or out of the
    /// line after the edit. They replace the pre-edit rows
    /// `start.row..=old_end.row + 1`, so the table length changes by exactly
    /// `new_end.row - old_end.row`. No other row is read or written.
    ///
    /// After editing a [`Document`](crate::Document), pass the three
    /// locations of the returned [`EditResult`](crate::EditResult).
    pub fn refresh_range<D: DocumentLines + ?Sized>(
        &mut self,
        document: &D,
        start: Location,
        old_end: Location,
        new_end: Location,
    ) -> Result<()> {
        let line_count = document.line_count();
        let cached = self.table.len();
        if start > old_end
            || start > new_end
            || old_end.row >= cached
            || new_end.row >= line_count
            || line_count + old_end.row != cached + new_end.row
        {
            return Err(Error::EditOutOfRange {
                start,
                old_end,
                new_end,
                line_count: cached,
            });
        }

        let recompute_end = (new_end.row + 1).min(line_count - 1);
        let replace_end = (old_end.row + 2).min(cached);

        let entries: Vec<Vec<usize>> = (start.row..=recompute_end)
            .map(|row| {
                let offsets = self.split_line(&document.line(row));
                trace!(row, breaks = offsets.len(), "rewrapped row");
                offsets
            })
            .collect();

        debug!(
            %start,
            %old_end,
            %new_end,
            recomputed = entries.len(),
            replaced = replace_end - start.row,
            "refreshed wrap range"
        );

        self.table.replace_range(start.row, replace_end, entries)?;
        self.heights.get_mut().invalidate_from(start.row);
        Ok(())
    }

    fn with_heights<T>(&self, f: impl FnOnce(&HeightIndex) -> T) -> T {
        let mut heights = self.heights.borrow_mut();
        if heights.valid_len() != self.table.len() {
            heights.extend(&self.table);
        }
        f(&heights)
    }

    /// Total number of visual rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.with_heights(HeightIndex::total)
    }

    /// Number of visual rows taken by logical line `line_index`.
    pub fn line_height(&self, line_index: usize) -> Result<usize> {
        self.table.height(line_index)
    }

    /// Logical line index displayed at visual row `offset`.
    pub fn offset_to_line_index(&self, offset: usize) -> Result<usize> {
        self.with_heights(|heights| {
            heights.line_at(offset).ok_or(Error::OffsetOutOfRange {
                offset,
                height: heights.total(),
                width: self.width,
            })
        })
    }

    /// Visual row where logical line `line_index` begins.
    pub fn line_start_offset(&self, line_index: usize) -> Result<usize> {
        self.with_heights(|heights| {
            heights.start_of(line_index).ok_or(Error::LineOutOfRange {
                index: line_index,
                line_count: self.table.len(),
            })
        })
    }

    /// Wrap offsets of logical line `line_index`.
    pub fn get_offsets(&self, line_index: usize) -> Result<&[usize]> {
        self.table.get(line_index)
    }

    /// The wrapped view: for each logical line, its visual lines.
    ///
    /// Lines missing from the cache are returned unwrapped.
    #[must_use]
    pub fn lines<D: DocumentLines + ?Sized>(&self, document: &D) -> Vec<Vec<String>> {
        (0..document.line_count())
            .map(|row| {
                let text = document.line(row);
                let offsets = self.table.get(row).unwrap_or_default();
                divide(&text, offsets)
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            })
            .collect()
    }

    /// Visual position of a logical location.
    ///
    /// Columns past the end of the line resolve to the end of the line.
    pub fn location_to_offset<D: DocumentLines + ?Sized>(
        &self,
        document: &D,
        location: Location,
    ) -> Result<VisualPosition> {
        let offsets = self.get_offsets(location.row)?;
        let line_start = self.line_start_offset(location.row)?;
        let text = line_text(document, location.row)?;

        let section = offsets.partition_point(|&offset| offset <= location.column);
        let section_start = if section == 0 { 0 } else { offsets[section - 1] };
        let before: String = text
            .chars()
            .skip(section_start)
            .take(location.column.saturating_sub(section_start))
            .collect();

        Ok(VisualPosition::new(
            line_start + section,
            self.splitter.measure(&before),
        ))
    }

    /// Logical location shown at a visual position.
    ///
    /// `x` past the end of the visual line resolves to its last column; on a
    /// line that continues on the next visual row that is the last char
    /// before the break.
    pub fn offset_to_location<D: DocumentLines + ?Sized>(
        &self,
        document: &D,
        position: VisualPosition,
    ) -> Result<Location> {
        let row = self.offset_to_line_index(position.row)?;
        let line_start = self.line_start_offset(row)?;
        let offsets = self.get_offsets(row)?;
        let section = position.row - line_start;
        let section_start = if section == 0 { 0 } else { offsets[section - 1] };

        let text = line_text(document, row)?;
        let pieces = divide(&text, offsets);
        let piece = pieces.get(section).copied().unwrap_or_default();

        let mut column = section_start;
        let mut consumed = 0usize;
        for (byte_idx, grapheme) in grapheme_indices(piece) {
            let end = byte_idx + grapheme.len();
            if self.splitter.measure(&piece[..end]) > position.x {
                break;
            }
            column += piece[consumed..end].chars().count();
            consumed = end;
        }

        if let Some(&next_break) = offsets.get(section) {
            column = column.min(next_break.saturating_sub(1));
        }
        Ok(Location::new(row, column))
    }
}

/// Text of `row`, or a range error if the document has fewer lines.
fn line_text<D: DocumentLines + ?Sized>(document: &D, row: usize) -> Result<Cow<'_, str>> {
    let line_count = document.line_count();
    if row < line_count {
        Ok(document.line(row))
    } else {
        Err(Error::LineOutOfRange {
            index: row,
            line_count,
        })
    }
}

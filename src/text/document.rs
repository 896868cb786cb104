//! Line-oriented documents backed by a rope.

use crate::text::Location;
use ropey::{Rope, RopeSlice};
use std::borrow::Cow;

/// Read access to the logical lines of a document.
///
/// Implementors must always reflect their latest content: the wrap cache
/// reads lines right after an edit and expects to see the post-edit text.
/// Line text never includes the line terminator.
pub trait DocumentLines {
    /// Number of logical lines.
    fn line_count(&self) -> usize;

    /// Text of line `index`, without its terminator.
    ///
    /// Callers only pass indices below [`line_count`](Self::line_count).
    fn line(&self, index: usize) -> Cow<'_, str>;
}

impl<T: AsRef<str>> DocumentLines for [T] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Cow<'_, str> {
        Cow::Borrowed(self[index].as_ref())
    }
}

impl<T: AsRef<str>> DocumentLines for Vec<T> {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Cow<'_, str> {
        self.as_slice().line(index)
    }
}

/// Outcome of a [`Document::replace_range`] call.
///
/// `start_location..old_end_location` is the edited region before the edit
/// and `start_location..end_location` the region after it. Pass exactly these
/// three to `WrappedDocument::refresh_range`: the start may lie before the
/// requested one when the edit joined a lone `\r` with a following `\n`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditResult {
    /// Start of the edited region, valid before and after the edit.
    pub start_location: Location,
    /// End of the removed region, in pre-edit coordinates.
    pub old_end_location: Location,
    /// Location just past the inserted text.
    pub end_location: Location,
    /// Text that the edit removed.
    pub replaced_text: String,
}

/// Editable document stored in a rope.
///
/// A document always has at least one line; the empty document is a single
/// empty line and text ending in a newline has a trailing empty line.
#[derive(Clone, Debug, Default)]
pub struct Document {
    rope: Rope,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a document from a string.
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Get the number of characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_bytes() == 0
    }

    /// Full document text.
    #[must_use]
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Length of line `row` in chars, excluding the terminator.
    #[must_use]
    pub fn line_len(&self, row: usize) -> usize {
        if row >= self.rope.len_lines() {
            return 0;
        }
        let line = self.rope.line(row);
        line.len_chars() - terminator_len(line)
    }

    /// Location just past the last character.
    #[must_use]
    pub fn end(&self) -> Location {
        let row = self.rope.len_lines() - 1;
        Location::new(row, self.line_len(row))
    }

    /// Clamp a location onto an existing position of the document.
    #[must_use]
    pub fn clamp(&self, location: Location) -> Location {
        let row = location.row.min(self.rope.len_lines() - 1);
        Location::new(row, location.column.min(self.line_len(row)))
    }

    fn location_to_char(&self, location: Location) -> usize {
        let location = self.clamp(location);
        self.rope.line_to_char(location.row) + location.column
    }

    fn char_to_location(&self, char_idx: usize) -> Location {
        let char_idx = char_idx.min(self.rope.len_chars());
        let row = self.rope.char_to_line(char_idx);
        Location::new(row, char_idx - self.rope.line_to_char(row))
    }

    /// Replace the text between two locations.
    ///
    /// Both locations are clamped into the document and swapped if given in
    /// reverse order. The returned [`EditResult`] holds the edit span to feed
    /// the wrap cache.
    pub fn replace_range(&mut self, start: Location, end: Location, text: &str) -> EditResult {
        let (start_char, end_char) = {
            let a = self.location_to_char(start);
            let b = self.location_to_char(end);
            (a.min(b), a.max(b))
        };
        let old_end_location = self.char_to_location(end_char);

        let replaced_text = self.rope.slice(start_char..end_char).to_string();
        self.rope.remove(start_char..end_char);
        self.rope.insert(start_char, text);

        // A lone CR right before the edit merges with an LF that now follows it
        let joins_cr = start_char > 0
            && self.rope.char(start_char - 1) == '\r'
            && start_char < self.rope.len_chars()
            && self.rope.char(start_char) == '\n';
        let span_start = if joins_cr { start_char - 1 } else { start_char };

        EditResult {
            start_location: self.char_to_location(span_start),
            old_end_location,
            end_location: self.char_to_location(start_char + text.chars().count()),
            replaced_text,
        }
    }

    /// Insert text at a location.
    pub fn insert(&mut self, location: Location, text: &str) -> EditResult {
        self.replace_range(location, location, text)
    }

    /// Delete the text between two locations.
    pub fn delete(&mut self, start: Location, end: Location) -> EditResult {
        self.replace_range(start, end, "")
    }

    /// Get access to the underlying rope.
    #[must_use]
    pub fn rope(&self) -> &Rope {
        &self.rope
    }
}

impl DocumentLines for Document {
    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line(&self, index: usize) -> Cow<'_, str> {
        let line = self.rope.line(index);
        let content = line.slice(..line.len_chars() - terminator_len(line));
        Cow::from(content)
    }
}

impl From<&str> for Document {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl From<String> for Document {
    fn from(s: String) -> Self {
        Self::from_str(&s)
    }
}

/// Number of chars taken by the line break at the end of `line`.
fn terminator_len(line: RopeSlice<'_>) -> usize {
    let len = line.len_chars();
    if len == 0 {
        return 0;
    }
    match line.char(len - 1) {
        '\n' if len >= 2 && line.char(len - 2) == '\r' => 2,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}' => 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(doc: &Document) -> Vec<String> {
        (0..doc.line_count())
            .map(|i| doc.line(i).into_owned())
            .collect()
    }

    #[test]
    fn test_document_lines() {
        let doc = Document::from_str("hello world\nfoo");
        assert_eq!(doc.line_count(), 2);
        assert_eq!(lines(&doc), vec!["hello world", "foo"]);
    }

    #[test]
    fn test_empty_document_has_one_line() {
        let doc = Document::new();
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.line(0), "");
        assert_eq!(doc.end(), Location::start());
    }

    #[test]
    fn test_trailing_newline_adds_empty_line() {
        let doc = Document::from_str("a\n");
        assert_eq!(lines(&doc), vec!["a", ""]);
    }

    #[test]
    fn test_crlf_terminator_stripped() {
        let doc = Document::from_str("one\r\ntwo\r\n");
        assert_eq!(lines(&doc), vec!["one", "two", ""]);
        assert_eq!(doc.line_len(0), 3);
    }

    #[test]
    fn test_insert_newline_splits_line() {
        let mut doc = Document::from_str("hello world\nfoo");
        let result = doc.insert(Location::new(0, 5), "\n");
        assert_eq!(result.end_location, Location::new(1, 0));
        assert_eq!(result.replaced_text, "");
        assert_eq!(lines(&doc), vec!["hello", " world", "foo"]);
    }

    #[test]
    fn test_delete_merges_lines() {
        let mut doc = Document::from_str("ab\ncd\nef");
        let result = doc.delete(Location::new(0, 1), Location::new(2, 1));
        assert_eq!(result.replaced_text, "b\ncd\ne");
        assert_eq!(result.end_location, Location::new(0, 1));
        assert_eq!(lines(&doc), vec!["af"]);
    }

    #[test]
    fn test_replace_range_reversed_and_clamped() {
        let mut doc = Document::from_str("abc\nxyz");
        let result = doc.replace_range(Location::new(9, 9), Location::new(1, 1), "Q\nR");
        assert_eq!(result.replaced_text, "yz");
        assert_eq!(result.end_location, Location::new(2, 1));
        assert_eq!(lines(&doc), vec!["abc", "xQ", "R"]);
    }

    #[test]
    fn test_edit_joining_lone_cr_starts_at_cr() {
        let mut doc = Document::from_str("a\rX\nb");
        assert_eq!(doc.line_count(), 3);
        let result = doc.delete(Location::new(1, 0), Location::new(1, 1));
        assert_eq!(lines(&doc), vec!["a", "b"]);
        assert_eq!(result.start_location, Location::new(0, 1));
        assert_eq!(result.old_end_location, Location::new(1, 1));
        assert_eq!(result.end_location, Location::new(0, 2));
        assert!(result.start_location <= result.end_location);

        let mut doc = Document::from_str("a\rb");
        let result = doc.insert(Location::new(1, 0), "\nc\n");
        assert_eq!(lines(&doc), vec!["a", "c", "b"]);
        assert_eq!(result.start_location, Location::new(0, 1));
        assert_eq!(result.end_location, Location::new(2, 0));
    }

    #[test]
    fn test_replace_range_past_end_both_clamped() {
        let mut doc = Document::from_str("ab\ncd");
        let result = doc.replace_range(Location::new(5, 9), Location::new(6, 0), "x");
        // (5, 9) clamps to (1, 2) and (6, 0) to (1, 0), so the order flips
        assert_eq!(result.start_location, Location::new(1, 0));
        assert_eq!(result.old_end_location, Location::new(1, 2));
        assert_eq!(result.replaced_text, "cd");
        assert_eq!(lines(&doc), vec!["ab", "x"]);
    }

    #[test]
    fn test_multibyte_columns_are_chars() {
        let mut doc = Document::from_str("héllo");
        doc.insert(Location::new(0, 2), "-");
        assert_eq!(doc.text(), "hé-llo");
        assert_eq!(doc.end(), Location::new(0, 6));
    }
}

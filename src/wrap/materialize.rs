//! Splitting line text into visual lines.

/// Split `text` at the given char offsets.
///
/// Offsets are partition points: concatenating the returned pieces yields
/// `text` exactly. Offsets that are zero, not increasing, or at or past the
/// end of `text` are ignored, so stale offsets never panic.
#[must_use]
pub fn divide<'a>(text: &'a str, offsets: &[usize]) -> Vec<&'a str> {
    let mut pieces = Vec::with_capacity(offsets.len() + 1);
    let mut offsets = offsets.iter().copied().peekable();
    let mut piece_start = 0usize;
    let mut last_offset = 0usize;

    for (char_idx, (byte_idx, _)) in text.char_indices().enumerate() {
        while let Some(&offset) = offsets.peek() {
            if offset > char_idx {
                break;
            }
            offsets.next();
            if offset == char_idx && offset > last_offset {
                pieces.push(&text[piece_start..byte_idx]);
                piece_start = byte_idx;
                last_offset = offset;
            }
        }
    }

    pieces.push(&text[piece_start..]);
    pieces
}

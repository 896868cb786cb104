//! Fuzz target for incremental refresh.
//!
//! Applies arbitrary edits to a document and checks that each refresh leaves
//! the same offsets a full rewrap would produce.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wrapcache::{Document, DocumentLines, Location, WrappedDocument};

#[derive(Arbitrary, Debug)]
struct Edit {
    start: u16,
    len: u8,
    text: String,
}

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    width: u8,
    edits: Vec<Edit>,
}

fn location(doc: &Document, char_idx: usize) -> Location {
    let rope = doc.rope();
    let row = rope.char_to_line(char_idx);
    Location::new(row, char_idx - rope.line_to_char(row))
}

fuzz_target!(|input: Input| {
    let width = usize::from(input.width % 64);
    let mut doc = Document::from_str(&input.text);
    let mut wrapped = WrappedDocument::new(width);
    wrapped.wrap(&doc);

    for edit in input.edits.iter().take(16) {
        let len = doc.len_chars();
        let lo = usize::from(edit.start).min(len);
        let hi = (lo + usize::from(edit.len)).min(len);
        let result = doc.replace_range(location(&doc, lo), location(&doc, hi), &edit.text);
        wrapped
            .refresh_range(
                &doc,
                result.start_location,
                result.old_end_location,
                result.end_location,
            )
            .expect("edit span matches the document");

        assert_eq!(wrapped.line_count(), doc.line_count());
        let mut full = WrappedDocument::new(width);
        full.wrap(&doc);
        assert_eq!(wrapped.table(), full.table());

        // Lookups stay in range for every visual row
        for offset in 0..wrapped.height().min(64) {
            let line = wrapped.offset_to_line_index(offset).expect("row in range");
            assert!(line < wrapped.line_count());
        }
    }
});

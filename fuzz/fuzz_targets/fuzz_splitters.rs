//! Fuzz target for the bundled line splitters.
//!
//! Tests that splitting arbitrary text never panics and always yields
//! increasing offsets that divide the line without loss.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wrapcache::{CharSplitter, LineSplitter, WordSplitter, divide};

fuzz_target!(|data: (&str, u8)| {
    let (text, width) = data;
    let width = usize::from(width % 32);
    let len = text.chars().count();

    for offsets in [
        WordSplitter::new().split(text, width),
        WordSplitter::new().fold(false).split(text, width),
        CharSplitter::new().split(text, width),
    ] {
        assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(offsets.iter().all(|&offset| offset > 0 && offset < len));
        assert_eq!(divide(text, &offsets).concat(), text);
    }
});

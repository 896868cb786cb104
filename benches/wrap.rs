//! Wrap cache performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wrapcache::{
    CharSplitter, Document, LineSplitter, Location, WordSplitter, WrappedDocument, divide,
};

const PARAGRAPH: &str = "The quick brown fox jumps over the lazy dog while the cat \
watches from the fence, unimpressed by the whole affair and its many words.";

fn large_document(lines: usize) -> Document {
    let mut text = String::with_capacity(lines * (PARAGRAPH.len() + 1));
    for i in 0..lines {
        if i % 7 == 0 {
            text.push('\n');
            continue;
        }
        text.push_str(PARAGRAPH);
        text.push('\n');
    }
    Document::from(text)
}

fn full_wrap(c: &mut Criterion) {
    let doc = large_document(10_000);

    c.bench_function("wrap_10k_lines_word", |b| {
        b.iter(|| {
            let mut wrapped = WrappedDocument::new(black_box(80));
            wrapped.wrap(&doc);
            wrapped
        });
    });

    c.bench_function("wrap_10k_lines_char", |b| {
        b.iter(|| {
            let mut wrapped = WrappedDocument::with_splitter(black_box(80), CharSplitter::new());
            wrapped.wrap(&doc);
            wrapped
        });
    });
}

fn incremental_refresh(c: &mut Criterion) {
    let doc = large_document(10_000);
    let mut wrapped = WrappedDocument::new(80);
    wrapped.wrap(&doc);

    c.bench_function("refresh_single_char_insert", |b| {
        b.iter_batched(
            || (doc.clone(), wrapped.clone()),
            |(mut doc, mut wrapped)| {
                let edit = doc.insert(Location::new(5_000, 10), "x");
                wrapped
                    .refresh_range(
                        &doc,
                        edit.start_location,
                        edit.old_end_location,
                        edit.end_location,
                    )
                    .unwrap();
                wrapped
            },
            BatchSize::LargeInput,
        );
    });

    c.bench_function("refresh_newline_insert", |b| {
        b.iter_batched(
            || (doc.clone(), wrapped.clone()),
            |(mut doc, mut wrapped)| {
                let edit = doc.insert(Location::new(5_000, 10), "\n");
                wrapped
                    .refresh_range(
                        &doc,
                        edit.start_location,
                        edit.old_end_location,
                        edit.end_location,
                    )
                    .unwrap();
                wrapped
            },
            BatchSize::LargeInput,
        );
    });
}

fn lookups(c: &mut Criterion) {
    let doc = large_document(10_000);
    let mut wrapped = WrappedDocument::new(80);
    wrapped.wrap(&doc);
    let height = wrapped.height();

    c.bench_function("offset_to_line_index", |b| {
        let mut offset = 0usize;
        b.iter(|| {
            offset = (offset + 7_919) % height;
            black_box(wrapped.offset_to_line_index(black_box(offset)))
        });
    });

    c.bench_function("line_start_offset", |b| {
        let mut line = 0usize;
        b.iter(|| {
            line = (line + 613) % 10_000;
            black_box(wrapped.line_start_offset(black_box(line)))
        });
    });
}

fn splitting(c: &mut Criterion) {
    let splitter = WordSplitter::new();
    let long_line = PARAGRAPH.repeat(20);

    c.bench_function("word_split_long_line", |b| {
        b.iter(|| splitter.split(black_box(&long_line), 80));
    });

    let offsets = splitter.split(&long_line, 80);
    c.bench_function("divide_long_line", |b| {
        b.iter(|| divide(black_box(&long_line), black_box(&offsets)).len());
    });
}

criterion_group!(benches, full_wrap, incremental_refresh, lookups, splitting);
criterion_main!(benches);

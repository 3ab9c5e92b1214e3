//! Test utilities shared by the integration tests.
//!
//! Glyph runs are laid out on a fixed grid: every glyph is `ADVANCE` wide,
//! `HEIGHT` tall and placed directly after the previous one, so tests only
//! need to state the gaps they care about.
#![allow(dead_code)]

use pdf_x_text::core::*;
use std::path::PathBuf;

pub const ADVANCE: f64 = 6.0;
pub const HEIGHT: f64 = 10.0;
pub const LINE_PITCH: f64 = 12.0;

/// Get the path to the test fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Glyphs for `text` starting at `x` on baseline row `row`.
pub fn glyph_run(text: &str, x: f64, row: usize) -> Vec<GlyphSprite> {
    text.chars()
        .enumerate()
        .map(|(i, c)| glyph_at(c, x + i as f64 * ADVANCE, row))
        .collect()
}

pub fn glyph_at(c: char, x: f64, row: usize) -> GlyphSprite {
    GlyphSprite::with_box(c, x, row as f64 * LINE_PITCH, ADVANCE, HEIGHT)
}

/// X coordinate just past a run of `len` glyphs starting at `x`.
pub fn run_end(x: f64, len: usize) -> f64 {
    x + len as f64 * ADVANCE
}

/// Segment `text` as one line.
pub fn line_of(text: &str) -> LineText {
    LineBuilder::from_glyphs(glyph_run(text, 0.0, 0)).finish()
}

/// One line per entry.
pub fn page_of(rows: &[&str]) -> PageText {
    let mut builder = PageTextBuilder::new();
    for (row, text) in rows.iter().enumerate() {
        builder.begin_line();
        for glyph in glyph_run(text, 0.0, row) {
            builder.append(glyph);
        }
    }
    builder.finish()
}

/// Word texts of a line.
pub fn word_texts(line: &LineText) -> Vec<String> {
    line.words().iter().map(WordText::text).collect()
}

/// Word texts of a line under construction.
pub fn builder_texts(line: &LineBuilder) -> Vec<String> {
    line.words().iter().map(WordBuilder::text).collect()
}

//! # PDF-X Text: words, lines and selection for extracted PDF text
//!
//! This crate turns the positioned glyph sprites emitted by PDF-X's
//! content-stream interpreter into a hierarchy of words and lines used for
//! text extraction, search highlighting and interactive selection. It works
//! purely on geometry and character classes: no PDF syntax, fonts or pixels.
//!
//! ## Quick Start
//!
//! ```rust
//! use pdf_x_text::{GlyphSprite, LineBuilder, TextSelect};
//!
//! let mut line = LineBuilder::new();
//! for (i, c) in "Hello World".chars().enumerate() {
//!     line.append(GlyphSprite::with_box(c, i as f64 * 6.0, 700.0, 6.0, 10.0));
//! }
//!
//! let mut line = line.finish();
//! assert_eq!(line.words().len(), 3);
//!
//! line.select_all();
//! assert_eq!(line.selected_text(), "Hello World\n");
//! ```
//!
//! ## Architecture
//!
//! 1. **Builders**: [`LineBuilder`] runs the segmentation engine while a page
//!    is processed; [`PageTextBuilder`] groups lines as the interpreter
//!    reports line breaks
//! 2. **Frozen text**: [`LineText`] and [`WordText`] compute their bounds on
//!    first read and cache them
//! 3. **Selection**: [`TextSelect`] propagates selection and highlight state
//!    through the hierarchy
//!
//! ## Segmentation
//!
//! A word ends at a whitespace glyph, at a punctuation glyph, or where the
//! horizontal gap to the next glyph is wider than a fraction of the word's
//! average advance. Gaps become inferred whitespace words so extracted text
//! keeps its spacing. See [`SegmentationConfig`] for the tunables.

pub mod core;

// Re-export main types for convenience
pub use core::{
    GlyphSprite, LineBuilder, LineText, Mark, NodeState, OpenWord, Outline, PageText,
    PageTextBuilder, PathElement, Rect, SegmentationConfig, TextError, TextResult, TextSelect,
    WordBuilder, WordKind, WordText,
};

//! Words: runs of glyphs between whitespace, punctuation and inferred gaps.
//!
//! A [`WordBuilder`] collects glyphs while a page is processed. Once the line
//! is finished it becomes a [`WordText`], whose bounds are computed on first
//! read and cached for the rest of its life.

use std::cell::OnceCell;
use std::fmt;

use smallvec::SmallVec;

use super::classify;
use super::config::SegmentationConfig;
use super::geometry::{Rect, union_all};
use super::glyph::GlyphSprite;
use super::selection::{Mark, NodeState, TextSelect};

/// Inline capacity for glyphs per word
const INLINE_GLYPHS: usize = 6;

type Glyphs = SmallVec<[GlyphSprite; INLINE_GLYPHS]>;

/// What closed a word off from its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordKind {
    /// Ordinary run of letters, digits or symbols
    Text,
    /// Explicit space glyph
    Whitespace,
    /// Punctuation glyph standing as its own word
    Punctuation,
    /// Space synthesised from a horizontal gap
    InferredSpace,
}

impl WordKind {
    /// The whitespace flag. Punctuation words carry it too so they never
    /// merge with adjacent letters.
    pub fn is_whitespace(self) -> bool {
        !matches!(self, WordKind::Text)
    }
}

/// A word under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct WordBuilder {
    glyphs: Glyphs,
    kind: WordKind,
}

impl Default for WordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WordBuilder {
    /// Empty text word.
    pub fn new() -> Self {
        WordBuilder {
            glyphs: SmallVec::new(),
            kind: WordKind::Text,
        }
    }

    /// Single-glyph boundary word (whitespace or punctuation).
    pub fn boundary(kind: WordKind, glyph: GlyphSprite) -> Self {
        let mut glyphs = SmallVec::new();
        glyphs.push(glyph);
        WordBuilder { glyphs, kind }
    }

    /// Add a glyph at the end of the word. No validation.
    pub fn append(&mut self, glyph: GlyphSprite) {
        self.glyphs.push(glyph);
    }

    pub fn glyphs(&self) -> &[GlyphSprite] {
        &self.glyphs
    }

    pub fn kind(&self) -> WordKind {
        self.kind
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn text(&self) -> String {
        self.glyphs.iter().map(|g| g.unicode).collect()
    }

    /// See [`classify::detect_white_space`].
    pub fn detect_white_space(glyph: &GlyphSprite) -> bool {
        classify::detect_white_space(glyph)
    }

    /// See [`classify::detect_punctuation`].
    pub fn detect_punctuation(glyph: &GlyphSprite) -> bool {
        classify::detect_punctuation(glyph)
    }

    /// Whether an unencoded space sits between this word and `glyph`.
    ///
    /// Always false for an empty word. A NaN gap never counts as a space.
    pub fn detect_space(&self, glyph: &GlyphSprite, config: &SegmentationConfig) -> bool {
        let Some(last) = self.glyphs.last() else {
            return false;
        };
        let gap = glyph.leading_edge() - last.trailing_edge();
        gap > self.space_threshold(config)
    }

    /// Minimum gap that reads as a space after this word.
    ///
    /// Derived from the average advance; words drawn with zero advances
    /// fall back to the average glyph height.
    pub fn space_threshold(&self, config: &SegmentationConfig) -> f64 {
        if self.glyphs.is_empty() {
            return config.min_space_gap;
        }
        let count = self.glyphs.len() as f64;
        let avg_advance = self.glyphs.iter().map(|g| g.advance.abs()).sum::<f64>() / count;
        let unit = if avg_advance > 0.0 {
            avg_advance
        } else {
            self.glyphs.iter().map(|g| g.bounds.height.abs()).sum::<f64>() / count
        };
        (unit / config.space_fraction).max(config.min_space_gap)
    }

    /// Whitespace word covering the gap between this word and `glyph`.
    ///
    /// `glyph` is only measured, never consumed: the caller re-offers it.
    pub fn build_space_word(&self, glyph: &GlyphSprite) -> WordBuilder {
        let (start, y, height, font_size) = match self.glyphs.last() {
            Some(last) => (
                last.trailing_edge(),
                last.bounds.y,
                last.bounds.height,
                last.font_size,
            ),
            None => (
                glyph.leading_edge(),
                glyph.bounds.y,
                glyph.bounds.height,
                glyph.font_size,
            ),
        };
        let width = (glyph.leading_edge() - start).max(0.0);
        let space = GlyphSprite::new(' ', Rect::new(start, y, width, height), font_size, width);
        WordBuilder::boundary(WordKind::InferredSpace, space)
    }

    /// Freeze the word.
    pub fn finish(self) -> WordText {
        WordText {
            glyphs: self.glyphs,
            kind: self.kind,
            bounds: OnceCell::new(),
            state: NodeState::default(),
        }
    }
}

/// A finished word.
#[derive(Debug, Clone)]
pub struct WordText {
    glyphs: Glyphs,
    kind: WordKind,
    bounds: OnceCell<Option<Rect>>,
    state: NodeState,
}

impl WordText {
    pub fn glyphs(&self) -> &[GlyphSprite] {
        &self.glyphs
    }

    pub fn kind(&self) -> WordKind {
        self.kind
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph text, with any whitespace word collapsed to one space.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) {
        match self.kind {
            WordKind::Whitespace | WordKind::InferredSpace => {
                if !self.glyphs.is_empty() {
                    out.push(' ');
                }
            }
            // Punctuation keeps the whitespace flag but copies as its own glyph.
            WordKind::Text | WordKind::Punctuation => {
                out.extend(self.glyphs.iter().map(|g| g.unicode));
            }
        }
    }

    /// Union of the glyph boxes, `None` for a word without glyphs or with
    /// only zero-area ones.
    pub fn bounds(&self) -> Option<Rect> {
        *self
            .bounds
            .get_or_init(|| union_all(self.glyphs.iter().map(|g| Some(g.bounds))))
    }

    /// Select just this word.
    pub fn select(&mut self) {
        self.select_all();
    }

    /// Highlight just this word.
    pub fn highlight(&mut self) {
        self.highlight_all();
    }

    pub fn is_selected(&self) -> bool {
        self.state.is_selected()
    }

    pub fn is_highlighted(&self) -> bool {
        self.state.is_highlighted()
    }
}

impl PartialEq for WordText {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.glyphs == other.glyphs && self.state == other.state
    }
}

impl TextSelect for WordText {
    // Glyphs carry no state of their own: selecting a word marks both bits.
    fn select_all(&mut self) {
        self.state.selection = Mark::Both;
    }

    fn clear_selected(&mut self) {
        self.state.selection = Mark::None;
    }

    fn highlight_all(&mut self) {
        self.state.highlight = Mark::Both;
    }

    fn clear_highlighted(&mut self) {
        self.state.highlight = Mark::None;
    }

    fn write_selected(&self, out: &mut String) {
        if self.state.selection.is_active() {
            self.write_text(out);
        }
    }

    fn state(&self) -> NodeState {
        self.state
    }
}

impl fmt::Display for WordText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

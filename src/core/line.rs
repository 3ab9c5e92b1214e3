//! Lines of words and the glyph-by-glyph segmentation engine.
//!
//! [`LineBuilder`] decides, for every incoming glyph, whether it extends the
//! open word or starts a new one. Rules, in priority order:
//!
//! 1. whitespace glyph: closes the open word and becomes its own word
//! 2. punctuation glyph: same as 1, flagged as whitespace as well
//! 3. gap after the open word wider than its space threshold: closes the
//!    word, appends an inferred space, then re-offers the glyph
//! 4. anything else: appended to the open word, opened on demand

use std::cell::OnceCell;
use std::fmt;

use tracing::{trace, warn};

use super::config::SegmentationConfig;
use super::geometry::{Outline, Rect, union_all};
use super::glyph::GlyphSprite;
use super::selection::{Mark, NodeState, TextSelect};
use super::word::{WordBuilder, WordKind, WordText};

/// The word currently accepting glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenWord {
    #[default]
    None,
    /// Index into the line's words
    At(usize),
}

/// Result of offering a glyph to the line once.
enum Step {
    Consumed,
    Reoffer,
}

/// A line under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct LineBuilder {
    words: Vec<WordBuilder>,
    open: OpenWord,
    config: SegmentationConfig,
}

impl Default for LineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuilder {
    pub fn new() -> Self {
        Self::with_config(SegmentationConfig::default())
    }

    pub fn with_config(config: SegmentationConfig) -> Self {
        LineBuilder {
            words: Vec::new(),
            open: OpenWord::None,
            config,
        }
    }

    /// Segment a whole run of glyphs at once.
    pub fn from_glyphs<I>(glyphs: I) -> Self
    where
        I: IntoIterator<Item = GlyphSprite>,
    {
        let mut line = LineBuilder::new();
        line.extend(glyphs);
        line
    }

    pub fn config(&self) -> &SegmentationConfig {
        &self.config
    }

    /// Words so far, including the open one.
    pub fn words(&self) -> &[WordBuilder] {
        &self.words
    }

    pub fn open_word(&self) -> OpenWord {
        self.open
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Feed one glyph through the segmentation rules.
    pub fn append(&mut self, glyph: GlyphSprite) {
        let mut reentries = 0;
        while let Step::Reoffer = self.offer(&glyph) {
            reentries += 1;
            if reentries >= self.config.max_reentry {
                warn!(
                    target: "pdf_x_text::segment",
                    unicode = ?glyph.unicode,
                    reentries,
                    "re-entry cap reached, appending to a fresh word"
                );
                self.open = OpenWord::None;
                let index = self.open_index();
                self.words[index].append(glyph);
                return;
            }
        }
    }

    fn offer(&mut self, glyph: &GlyphSprite) -> Step {
        #[cfg(feature = "debug-logging")]
        trace!(target: "pdf_x_text::segment", unicode = ?glyph.unicode, x = glyph.bounds.x, "offer");

        if WordBuilder::detect_white_space(glyph) {
            self.push_boundary(WordKind::Whitespace, *glyph);
            return Step::Consumed;
        }

        if self.config.split_punctuation && WordBuilder::detect_punctuation(glyph) {
            self.push_boundary(WordKind::Punctuation, *glyph);
            return Step::Consumed;
        }

        if let OpenWord::At(index) = self.open {
            let word = &self.words[index];
            if word.detect_space(glyph, &self.config) {
                let space = word.build_space_word(glyph);
                trace!(
                    target: "pdf_x_text::segment",
                    word = index,
                    gap = space.glyphs()[0].bounds.width,
                    "inferred space"
                );
                self.words.push(space);
                self.open = OpenWord::None;
                return Step::Reoffer;
            }
        }

        let index = self.open_index();
        self.words[index].append(*glyph);
        Step::Consumed
    }

    /// Close the open word and append a closed single-glyph word.
    fn push_boundary(&mut self, kind: WordKind, glyph: GlyphSprite) {
        if let OpenWord::At(index) = self.open {
            trace!(target: "pdf_x_text::segment", word = index, ?kind, "word closed");
        }
        self.words.push(WordBuilder::boundary(kind, glyph));
        self.open = OpenWord::None;
    }

    /// Index of the open word, opening a fresh one if needed.
    fn open_index(&mut self) -> usize {
        match self.open {
            OpenWord::At(index) => index,
            OpenWord::None => {
                self.words.push(WordBuilder::new());
                let index = self.words.len() - 1;
                self.open = OpenWord::At(index);
                index
            }
        }
    }

    /// Freeze the line. The open word, if any, is kept as the last word.
    pub fn finish(self) -> LineText {
        LineText::from_words(self.words.into_iter().map(WordBuilder::finish).collect())
    }
}

impl Extend<GlyphSprite> for LineBuilder {
    fn extend<I: IntoIterator<Item = GlyphSprite>>(&mut self, iter: I) {
        for glyph in iter {
            self.append(glyph);
        }
    }
}

/// A finished line.
///
/// Bounds and outline are computed on first read and then cached; the word
/// list cannot change after [`LineBuilder::finish`], so the cache never goes
/// stale. Not `Sync`: one owner touches a line at a time.
#[derive(Debug, Clone)]
pub struct LineText {
    words: Vec<WordText>,
    bounds: OnceCell<Option<Rect>>,
    outline: OnceCell<Outline>,
    state: NodeState,
}

impl Default for LineText {
    fn default() -> Self {
        LineText::from_words(Vec::new())
    }
}

impl LineText {
    pub fn from_words(words: Vec<WordText>) -> Self {
        let mut line = LineText {
            words,
            bounds: OnceCell::new(),
            outline: OnceCell::new(),
            state: NodeState::default(),
        };
        line.refresh_state();
        line
    }

    pub fn words(&self) -> &[WordText] {
        &self.words
    }

    pub fn word(&self, index: usize) -> Option<&WordText> {
        self.words.get(index)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Union of the word bounds, `None` when no word has any.
    pub fn bounds(&self) -> Option<Rect> {
        *self
            .bounds
            .get_or_init(|| union_all(self.words.iter().map(WordText::bounds)))
    }

    /// Rectangular path around [`bounds`](Self::bounds).
    pub fn outline(&self) -> &Outline {
        self.outline.get_or_init(|| Outline::from_bounds(self.bounds()))
    }

    /// Line text with whitespace words collapsed to single spaces.
    pub fn text(&self) -> String {
        self.words.iter().map(WordText::text).collect()
    }

    /// Select one word. Returns false if `index` is out of range.
    pub fn select_word(&mut self, index: usize) -> bool {
        let Some(word) = self.words.get_mut(index) else {
            return false;
        };
        word.select();
        self.refresh_state();
        true
    }

    /// Highlight one word. Returns false if `index` is out of range.
    pub fn highlight_word(&mut self, index: usize) -> bool {
        let Some(word) = self.words.get_mut(index) else {
            return false;
        };
        word.highlight();
        self.refresh_state();
        true
    }

    /// Select every word whose bounds intersect `rect`.
    pub(crate) fn select_in_rect(&mut self, rect: &Rect) -> usize {
        let mut selected = 0;
        for word in &mut self.words {
            if word.bounds().is_some_and(|b| b.intersects(rect)) {
                word.select();
                if !word.is_whitespace() {
                    selected += 1;
                }
            }
        }
        self.refresh_state();
        selected
    }

    /// Highlight runs of text words matching `terms` in order,
    /// case-insensitively, together with the whitespace between them.
    pub(crate) fn highlight_terms(&mut self, terms: &[String]) -> usize {
        if terms.is_empty() {
            return 0;
        }
        let text_words: Vec<usize> = self
            .words
            .iter()
            .enumerate()
            .filter(|(_, w)| w.kind() == WordKind::Text)
            .map(|(i, _)| i)
            .collect();

        let mut matches = 0;
        for window in text_words.windows(terms.len()) {
            let hit = window
                .iter()
                .zip(terms)
                .all(|(&i, term)| self.words[i].text().to_lowercase() == *term);
            if hit {
                let (first, last) = (window[0], window[window.len() - 1]);
                for word in &mut self.words[first..=last] {
                    word.highlight();
                }
                matches += 1;
            }
        }
        self.refresh_state();
        matches
    }

    /// Recompute the descendant bits from the words.
    fn refresh_state(&mut self) {
        let words = &self.words;
        self.state.selection = self
            .state
            .selection
            .fold_children(words.iter().map(|w| w.state().selection));
        self.state.highlight = self
            .state
            .highlight
            .fold_children(words.iter().map(|w| w.state().highlight));
    }
}

impl TextSelect for LineText {
    fn select_all(&mut self) {
        self.state.selection = self.state.selection.with_own(true);
        for word in &mut self.words {
            word.select_all();
        }
        self.refresh_state();
    }

    fn clear_selected(&mut self) {
        self.state.selection = Mark::None;
        for word in &mut self.words {
            word.clear_selected();
        }
    }

    fn highlight_all(&mut self) {
        self.state.highlight = self.state.highlight.with_own(true);
        for word in &mut self.words {
            word.highlight_all();
        }
        self.refresh_state();
    }

    fn clear_highlighted(&mut self) {
        self.state.highlight = Mark::None;
        for word in &mut self.words {
            word.clear_highlighted();
        }
    }

    /// Selected words in order, then one `'\n'` if anything in the line is
    /// selected.
    fn write_selected(&self, out: &mut String) {
        for word in &self.words {
            word.write_selected(out);
        }
        if self.state.has_selected_descendant() {
            out.push('\n');
        }
    }

    fn state(&self) -> NodeState {
        self.state
    }
}

impl fmt::Display for LineText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

//! Page-level text: the lines of one page, in reading order.
//!
//! The content-stream interpreter drives a [`PageTextBuilder`], starting a
//! new line whenever it detects a line break, and hands the finished
//! [`PageText`] to search and selection.

use std::cell::OnceCell;

use tracing::debug;

use super::config::SegmentationConfig;
use super::error::{TextError, TextResult};
use super::geometry::{Rect, union_all};
use super::glyph::GlyphSprite;
use super::line::{LineBuilder, LineText};
use super::selection::{Mark, NodeState, TextSelect};
use super::word::WordText;

/// Collects lines while a page's content stream is processed.
#[derive(Debug, Clone, Default)]
pub struct PageTextBuilder {
    lines: Vec<LineBuilder>,
    config: SegmentationConfig,
}

impl PageTextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SegmentationConfig) -> Self {
        PageTextBuilder {
            lines: Vec::new(),
            config,
        }
    }

    /// Start a new line. Glyphs appended afterwards go to it.
    pub fn begin_line(&mut self) {
        self.lines.push(LineBuilder::with_config(self.config.clone()));
    }

    /// Append a glyph to the current line, starting one if none exists.
    pub fn append(&mut self, glyph: GlyphSprite) {
        if self.lines.is_empty() {
            self.begin_line();
        }
        if let Some(line) = self.lines.last_mut() {
            line.append(glyph);
        }
    }

    pub fn current_line(&self) -> Option<&LineBuilder> {
        self.lines.last()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn finish(self) -> PageText {
        let lines: Vec<LineText> = self.lines.into_iter().map(LineBuilder::finish).collect();
        debug!(
            target: "pdf_x_text::page",
            lines = lines.len(),
            words = lines.iter().map(LineText::len).sum::<usize>(),
            "page text finished"
        );
        PageText::from_lines(lines)
    }
}

/// Finished text of one page.
#[derive(Debug, Clone, Default)]
pub struct PageText {
    lines: Vec<LineText>,
    bounds: OnceCell<Option<Rect>>,
}

impl PageText {
    pub fn from_lines(lines: Vec<LineText>) -> Self {
        PageText {
            lines,
            bounds: OnceCell::new(),
        }
    }

    pub fn lines(&self) -> &[LineText] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> TextResult<&LineText> {
        self.lines.get(index).ok_or(TextError::LineOutOfRange {
            index,
            len: self.lines.len(),
        })
    }

    pub fn word(&self, line: usize, index: usize) -> TextResult<&WordText> {
        let text_line = self.line(line)?;
        text_line.word(index).ok_or(TextError::WordOutOfRange {
            line,
            index,
            len: text_line.len(),
        })
    }

    /// Union of all line bounds, `None` for a page without glyphs.
    pub fn bounds(&self) -> Option<Rect> {
        *self
            .bounds
            .get_or_init(|| union_all(self.lines.iter().map(LineText::bounds)))
    }

    /// Page text, one `'\n'` after each line.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.text());
            out.push('\n');
        }
        out
    }

    fn line_mut(&mut self, index: usize) -> TextResult<&mut LineText> {
        let len = self.lines.len();
        self.lines
            .get_mut(index)
            .ok_or(TextError::LineOutOfRange { index, len })
    }

    /// Add one word to the selection.
    pub fn select_word(&mut self, line: usize, index: usize) -> TextResult<()> {
        let text_line = self.line_mut(line)?;
        if text_line.select_word(index) {
            Ok(())
        } else {
            Err(TextError::WordOutOfRange {
                line,
                index,
                len: text_line.len(),
            })
        }
    }

    /// Add one word to the highlight.
    pub fn highlight_word(&mut self, line: usize, index: usize) -> TextResult<()> {
        let text_line = self.line_mut(line)?;
        if text_line.highlight_word(index) {
            Ok(())
        } else {
            Err(TextError::WordOutOfRange {
                line,
                index,
                len: text_line.len(),
            })
        }
    }

    /// Replace the selection with every word touched by a drag rectangle.
    ///
    /// Whitespace words inside the rectangle are selected too so the
    /// selected text keeps its spacing. Returns the number of non-whitespace
    /// words selected.
    pub fn select_in_rect(&mut self, rect: &Rect) -> usize {
        self.clear_selected();
        let mut selected = 0;
        for line in &mut self.lines {
            if line.bounds().is_some_and(|b| b.intersects(rect)) {
                selected += line.select_in_rect(rect);
            }
        }
        debug!(target: "pdf_x_text::page", selected, "rectangle selection");
        selected
    }

    /// Replace the highlight with every occurrence of `term`.
    ///
    /// Matching is case-insensitive over whole words; a term of several
    /// words matches consecutive words on one line. Returns the number of
    /// occurrences.
    pub fn highlight_matches(&mut self, term: &str) -> usize {
        self.clear_highlighted();
        let terms: Vec<String> = term.split_whitespace().map(str::to_lowercase).collect();
        let matches: usize = self
            .lines
            .iter_mut()
            .map(|line| line.highlight_terms(&terms))
            .sum();
        debug!(target: "pdf_x_text::page", term, matches, "search highlight");
        matches
    }

    /// `(line, word)` of the word under a point, if any.
    pub fn word_at(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        self.lines.iter().enumerate().find_map(|(line_index, line)| {
            if !line.bounds()?.contains_point(x, y) {
                return None;
            }
            line.words()
                .iter()
                .position(|w| w.bounds().is_some_and(|b| b.contains_point(x, y)))
                .map(|word_index| (line_index, word_index))
        })
    }
}

impl TextSelect for PageText {
    fn select_all(&mut self) {
        for line in &mut self.lines {
            line.select_all();
        }
    }

    fn clear_selected(&mut self) {
        for line in &mut self.lines {
            line.clear_selected();
        }
    }

    fn highlight_all(&mut self) {
        for line in &mut self.lines {
            line.highlight_all();
        }
    }

    fn clear_highlighted(&mut self) {
        for line in &mut self.lines {
            line.clear_highlighted();
        }
    }

    /// Per-line selected text, concatenated.
    fn write_selected(&self, out: &mut String) {
        for line in &self.lines {
            line.write_selected(out);
        }
    }

    /// The page itself is never marked; only its descendant bits are set.
    fn state(&self) -> NodeState {
        NodeState {
            selection: Mark::None.fold_children(self.lines.iter().map(|l| l.state().selection)),
            highlight: Mark::None.fold_children(self.lines.iter().map(|l| l.state().highlight)),
        }
    }
}

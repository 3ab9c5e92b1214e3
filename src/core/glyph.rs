//! Glyph sprites as emitted by the content-stream interpreter.

use super::geometry::Rect;

/// One positioned, already-decoded character emitted by the content-stream
/// interpreter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphSprite {
    /// Resolved Unicode value
    pub unicode: char,

    /// Bounding rectangle in page space
    pub bounds: Rect,

    /// Font size in page units
    pub font_size: f64,

    /// Horizontal pen advance in page units
    pub advance: f64,
}

impl GlyphSprite {
    pub fn new(unicode: char, bounds: Rect, font_size: f64, advance: f64) -> Self {
        GlyphSprite {
            unicode,
            bounds,
            font_size,
            advance,
        }
    }

    /// Glyph whose advance equals its box width.
    pub fn with_box(unicode: char, x: f64, y: f64, width: f64, height: f64) -> Self {
        GlyphSprite::new(unicode, Rect::new(x, y, width, height), height, width)
    }

    /// Leading edge in reading direction.
    pub fn leading_edge(&self) -> f64 {
        self.bounds.min_x()
    }

    /// Trailing edge in reading direction.
    pub fn trailing_edge(&self) -> f64 {
        self.bounds.max_x()
    }
}

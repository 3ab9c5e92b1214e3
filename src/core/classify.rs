//! Character classification used by word segmentation.
//!
//! Both predicates are total: every glyph classifies to `true` or `false`.

use super::glyph::GlyphSprite;

/// True if the glyph is pure spacing.
///
/// Covers every Unicode `White_Space` character, plus control characters
/// drawn with a positive advance. Fonts with a missing space mapping often
/// decode the space glyph to `U+0000` or another control code; the pen still
/// moves, nothing is painted.
pub fn detect_white_space(glyph: &GlyphSprite) -> bool {
    let c = glyph.unicode;
    c.is_whitespace() || (c.is_control() && glyph.advance > 0.0)
}

/// True if the glyph's character belongs to a punctuation class.
pub fn detect_punctuation(glyph: &GlyphSprite) -> bool {
    is_punctuation(glyph.unicode)
}

/// Punctuation classes recognised as word boundaries.
pub fn is_punctuation(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_punctuation();
    }
    matches!(
        c,
        // Latin-1 punctuation
        '\u{00A1}' | '\u{00A7}' | '\u{00AB}' | '\u{00B6}' | '\u{00B7}' | '\u{00BB}' | '\u{00BF}'
        // General Punctuation: dashes, quotes, bullets, ellipsis
        | '\u{2010}'..='\u{2027}'
        | '\u{2030}'..='\u{205E}'
        // CJK symbols and punctuation
        | '\u{3001}'..='\u{3003}'
        | '\u{3008}'..='\u{3011}'
        | '\u{3014}'..='\u{301F}'
        // Fullwidth forms
        | '\u{FF01}'..='\u{FF0F}'
        | '\u{FF1A}'..='\u{FF20}'
        | '\u{FF3B}'..='\u{FF3D}'
        | '\u{FF5B}'..='\u{FF65}'
    )
}

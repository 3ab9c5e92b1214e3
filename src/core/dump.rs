//! Plain-text glyph dumps.
//!
//! A dump records the glyph sprites an interpreter emitted for one page,
//! one glyph per row:
//!
//! ```text
//! % char  x     y    width height font_size advance
//! H       72.0  700  7.2   10.0   12.0      7.2
//! \s      79.2  700  3.0   10.0   12.0      3.0
//! ```
//!
//! A blank row ends the current line. Rows starting with `%` are comments.
//! The char column takes one character or an escape: `\s` space, `\t` tab,
//! `\\` backslash, `\%` percent, `\u{XXXX}` any scalar value.

use std::fs;
use std::path::Path;

use super::config::SegmentationConfig;
use super::error::{TextError, TextResult};
use super::geometry::Rect;
use super::glyph::GlyphSprite;
use super::page_text::{PageText, PageTextBuilder};

const FIELDS: usize = 7;

/// Parse a dump and segment it into page text.
pub fn parse_glyph_dump(input: &str, config: SegmentationConfig) -> TextResult<PageText> {
    let mut builder = PageTextBuilder::with_config(config);
    let mut line_break = true;

    for (row_index, row) in input.lines().enumerate() {
        let row_number = row_index + 1;
        let trimmed = row.trim();
        if trimmed.is_empty() {
            line_break = true;
            continue;
        }
        if trimmed.starts_with('%') {
            continue;
        }
        let glyph = parse_row(trimmed, row_number)?;
        if line_break {
            builder.begin_line();
            line_break = false;
        }
        builder.append(glyph);
    }

    Ok(builder.finish())
}

/// Read a dump from disk and segment it.
pub fn load_glyph_dump<P: AsRef<Path>>(path: P, config: SegmentationConfig) -> TextResult<PageText> {
    let input = fs::read_to_string(path)?;
    parse_glyph_dump(&input, config)
}

fn parse_row(row: &str, row_number: usize) -> TextResult<GlyphSprite> {
    let fields: Vec<&str> = row.split_whitespace().collect();
    if fields.len() != FIELDS {
        return Err(TextError::Parse {
            line: row_number,
            message: format!("expected {} fields, found {}", FIELDS, fields.len()),
        });
    }

    let unicode = parse_char(fields[0], row_number)?;
    let mut numbers = [0.0f64; FIELDS - 1];
    for (slot, field) in numbers.iter_mut().zip(&fields[1..]) {
        *slot = parse_number(field, row_number)?;
    }
    let [x, y, width, height, font_size, advance] = numbers;

    Ok(GlyphSprite::new(
        unicode,
        Rect::new(x, y, width, height),
        font_size,
        advance,
    ))
}

fn parse_char(token: &str, row_number: usize) -> TextResult<char> {
    let invalid = || TextError::Parse {
        line: row_number,
        message: format!("invalid character token '{}'", token),
    };

    let mut chars = token.chars();
    let first = chars.next().ok_or_else(invalid)?;
    if first != '\\' {
        return match chars.next() {
            None => Ok(first),
            Some(_) => Err(invalid()),
        };
    }

    match chars.as_str() {
        "s" => Ok(' '),
        "t" => Ok('\t'),
        "\\" => Ok('\\'),
        "%" => Ok('%'),
        escape => {
            let hex = escape
                .strip_prefix("u{")
                .and_then(|rest| rest.strip_suffix('}'))
                .ok_or_else(invalid)?;
            u32::from_str_radix(hex, 16)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(invalid)
        }
    }
}

fn parse_number(token: &str, row_number: usize) -> TextResult<f64> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(TextError::Parse {
            line: row_number,
            message: format!("invalid number '{}'", token),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_char_escapes() {
        assert_eq!(parse_char("a", 1), Ok('a'));
        assert_eq!(parse_char("\\s", 1), Ok(' '));
        assert_eq!(parse_char("\\t", 1), Ok('\t'));
        assert_eq!(parse_char("\\%", 1), Ok('%'));
        assert_eq!(parse_char("\\\\", 1), Ok('\\'));
        assert_eq!(parse_char("\\u{201C}", 1), Ok('\u{201C}'));
        assert!(parse_char("ab", 1).is_err());
        assert!(parse_char("\\u{D800}", 1).is_err());
        assert!(parse_char("\\q", 1).is_err());
    }

    #[test]
    fn test_parse_lines_and_comments() {
        let input = "\
% first line
a 0 0 6 10 12 6
b 6 0 6 10 12 6

c 0 12 6 10 12 6
";
        let page = parse_glyph_dump(input, SegmentationConfig::default()).unwrap();
        assert_eq!(page.lines().len(), 2);
        assert_eq!(page.text(), "ab\nc\n");
    }

    #[test]
    fn test_parse_errors_carry_row() {
        let input = "a 0 0 6 10 12 6\nb 6 0 six 10 12 6\n";
        let err = parse_glyph_dump(input, SegmentationConfig::default()).unwrap_err();
        assert_eq!(
            err,
            TextError::Parse {
                line: 2,
                message: "invalid number 'six'".to_string()
            }
        );

        let err = parse_glyph_dump("a 0 0\n", SegmentationConfig::default()).unwrap_err();
        assert!(matches!(err, TextError::Parse { line: 1, .. }));

        let err = parse_glyph_dump("a 0 0 inf 10 12 6\n", SegmentationConfig::default()).unwrap_err();
        assert!(matches!(err, TextError::Parse { line: 1, .. }));
    }
}

//! Loading glyph dumps from disk.

mod test_utils;

use pdf_x_text::core::*;
use std::io::Write;
use tempfile::NamedTempFile;
use test_utils::*;

#[test]
fn test_load_fixture() -> TextResult<()> {
    let page = load_glyph_dump(
        fixtures_dir().join("hello_world.glyphs"),
        SegmentationConfig::default(),
    )?;

    assert_eq!(page.lines().len(), 2);
    assert_eq!(page.text(), "Hello World,\nagain here.\n");

    let first = page.line(0)?;
    assert_eq!(first.words()[1].kind(), WordKind::InferredSpace);
    assert_eq!(first.words()[3].kind(), WordKind::Punctuation);

    let second = page.line(1)?;
    assert_eq!(second.words()[1].kind(), WordKind::Whitespace);

    assert_eq!(page.bounds(), Some(Rect::new(72.0, 686.0, 75.0, 24.0)));
    Ok(())
}

#[test]
fn test_load_from_temp_file() -> TextResult<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "% tab-separated row")?;
    writeln!(file, "x\t0\t0\t6\t10\t12\t6")?;
    writeln!(file, "\\u{{00E9}} 6 0 6 10 12 6")?;
    file.flush()?;

    let page = load_glyph_dump(file.path(), SegmentationConfig::default())?;
    assert_eq!(page.text(), "x\u{00E9}\n");
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let result = load_glyph_dump(
        fixtures_dir().join("does_not_exist.glyphs"),
        SegmentationConfig::default(),
    );
    assert!(matches!(result, Err(TextError::Io(_))));
}

#[test]
fn test_config_reaches_every_line() -> TextResult<()> {
    let config = SegmentationConfig::default().with_split_punctuation(false);
    let page = load_glyph_dump(fixtures_dir().join("hello_world.glyphs"), config)?;
    let last = page.line(1)?;
    assert_eq!(last.words().last().map(WordText::text), Some("here.".to_string()));
    Ok(())
}

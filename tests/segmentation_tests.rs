//! Word segmentation over whole lines.

mod test_utils;

use pdf_x_text::core::*;
use test_utils::*;

#[test]
fn test_explicit_space_splits_words() {
    let line = line_of("Hello World");

    assert_eq!(line.len(), 3);
    assert_eq!(word_texts(&line), vec!["Hello", " ", "World"]);
    assert_eq!(line.words()[0].len(), 5);
    assert_eq!(line.words()[1].len(), 1);
    assert_eq!(line.words()[2].len(), 5);
    assert_eq!(line.words()[1].kind(), WordKind::Whitespace);
    assert!(line.words()[1].is_whitespace());
    assert!(!line.words()[0].is_whitespace());
}

#[test]
fn test_gap_infers_space() {
    let mut glyphs = glyph_run("Hello", 0.0, 0);
    // Threshold is 6 / 3 = 2, leave a gap of 8
    glyphs.extend(glyph_run("World", run_end(0.0, 5) + 8.0, 0));
    let line = LineBuilder::from_glyphs(glyphs).finish();

    assert_eq!(word_texts(&line), vec!["Hello", " ", "World"]);
    let space = &line.words()[1];
    assert_eq!(space.kind(), WordKind::InferredSpace);
    assert_eq!(space.len(), 1);
    assert_eq!(space.bounds(), Some(Rect::new(30.0, 0.0, 8.0, HEIGHT)));
    assert_eq!(line.words()[2].glyphs()[0].unicode, 'W');
}

#[test]
fn test_gapped_glyph_is_reoffered_not_dropped() {
    let mut glyphs = glyph_run("Hello", 0.0, 0);
    glyphs.push(glyph_at('x', 100.0, 0));
    glyphs.push(glyph_at('y', 200.0, 0));
    let line = LineBuilder::from_glyphs(glyphs).finish();

    let glyph_count: usize = line
        .words()
        .iter()
        .filter(|w| w.kind() != WordKind::InferredSpace)
        .map(WordText::len)
        .sum();
    assert_eq!(glyph_count, 7);
    assert_eq!(word_texts(&line), vec!["Hello", " ", "x", " ", "y"]);
}

#[test]
fn test_punctuation_after_gap_gets_no_inferred_space() {
    let mut glyphs = glyph_run("Hello", 0.0, 0);
    glyphs.push(glyph_at('!', 100.0, 0));
    let line = LineBuilder::from_glyphs(glyphs).finish();
    assert_eq!(word_texts(&line), vec!["Hello", "!"]);
}

#[test]
fn test_small_gap_stays_in_word() {
    let mut glyphs = glyph_run("ker", 0.0, 0);
    glyphs.extend(glyph_run("ning", run_end(0.0, 3) + 1.5, 0));
    let line = LineBuilder::from_glyphs(glyphs).finish();
    assert_eq!(word_texts(&line), vec!["kerning"]);
}

#[test]
fn test_custom_space_fraction() {
    let mut glyphs = glyph_run("ker", 0.0, 0);
    glyphs.extend(glyph_run("ning", run_end(0.0, 3) + 1.5, 0));
    let config = SegmentationConfig::default().with_space_fraction(6.0);
    let mut line = LineBuilder::with_config(config);
    line.extend(glyphs);
    assert_eq!(builder_texts(&line), vec!["ker", " ", "ning"]);
}

#[test]
fn test_min_space_gap_floor() {
    let mut glyphs = glyph_run("ab", 0.0, 0);
    glyphs.extend(glyph_run("cd", run_end(0.0, 2) + 4.0, 0));
    let config = SegmentationConfig::default().with_min_space_gap(5.0);
    let mut line = LineBuilder::with_config(config);
    line.extend(glyphs);
    assert_eq!(builder_texts(&line), vec!["abcd"]);
}

#[test]
fn test_punctuation_words_are_flagged_whitespace() {
    let line = line_of("Hi, there.");
    assert_eq!(word_texts(&line), vec!["Hi", ",", " ", "there", "."]);
    let comma = &line.words()[1];
    assert_eq!(comma.kind(), WordKind::Punctuation);
    assert!(comma.is_whitespace());
}

#[test]
fn test_whitespace_words_never_grow() {
    let line = line_of("a  b\t\tc");
    for word in line.words().iter().filter(|w| w.is_whitespace()) {
        assert_eq!(word.len(), 1);
        assert!(word.glyphs().iter().all(detect_white_space));
    }
    assert_eq!(line.len(), 7);
}

#[test]
fn test_last_word_stays_visible_without_end_of_line() {
    let mut line = LineBuilder::new();
    line.extend(glyph_run("trailing", 0.0, 0));
    assert_eq!(line.open_word(), OpenWord::At(0));
    assert_eq!(builder_texts(&line), vec!["trailing"]);
    assert_eq!(word_texts(&line.finish()), vec!["trailing"]);
}

#[test]
fn test_one_at_a_time_matches_batch() {
    let mut glyphs = glyph_run("Alpha, beta", 0.0, 0);
    glyphs.extend(glyph_run("gamma", 200.0, 0));

    let batch = LineBuilder::from_glyphs(glyphs.clone());

    let mut single = LineBuilder::new();
    for glyph in glyphs {
        single.append(glyph);
    }

    assert_eq!(single, batch);
}

#[test]
fn test_word_order_follows_reading_order() {
    let line = line_of("one two three");
    let starts: Vec<f64> = line
        .words()
        .iter()
        .filter_map(|w| w.bounds())
        .map(|b| b.x)
        .collect();
    assert!(starts.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_degenerate_glyph_is_inert_in_bounds() {
    let glyphs = vec![
        GlyphSprite::with_box('a', 100.0, 100.0, 6.0, 10.0),
        GlyphSprite::new('b', Rect::new(0.0, 0.0, 0.0, 0.0), 10.0, 6.0),
    ];
    let line = LineBuilder::from_glyphs(glyphs).finish();
    let expected = Some(Rect::new(100.0, 100.0, 6.0, 10.0));

    assert_eq!(line.len(), 1);
    assert_eq!(line.words()[0].len(), 2);
    assert_eq!(line.words()[0].bounds(), expected);
    assert_eq!(line.bounds(), expected);
}

#[test]
fn test_word_of_only_degenerate_glyphs_has_no_bounds() {
    let mut glyphs = glyph_run("ab", 0.0, 0);
    glyphs.push(glyph_at(' ', run_end(0.0, 2), 0));
    glyphs.push(GlyphSprite::new('c', Rect::new(500.0, 500.0, 0.0, 0.0), 10.0, 6.0));
    let line = LineBuilder::from_glyphs(glyphs).finish();

    assert_eq!(line.len(), 3);
    assert_eq!(line.words()[2].bounds(), None);
    assert_eq!(line.bounds(), Some(Rect::new(0.0, 0.0, 18.0, HEIGHT)));
}

#[test]
fn test_page_builder_lines() {
    let page = page_of(&["first line", "second"]);
    assert_eq!(page.lines().len(), 2);
    assert_eq!(page.text(), "first line\nsecond\n");
}

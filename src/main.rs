use pdf_x_text::core::load_glyph_dump;
use pdf_x_text::{PageText, SegmentationConfig, TextSelect, WordKind};
use std::env;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Glyph Dump Text Inspector");
        eprintln!("Usage: {} <glyph-dump> [options]", args[0]);
        eprintln!("\nOptions:");
        eprintln!("  --words               Show the words of every line");
        eprintln!("  --bounds              Show line bounds and outlines");
        eprintln!("  --select-all          Print the text a select-all would copy");
        eprintln!("  --search <term>       Highlight and list matches of a term");
        eprintln!("  --space-fraction <n>  Inferred-space threshold divisor (default 3)");
        eprintln!("  --keep-punctuation    Do not split punctuation into its own words");
        eprintln!("\nSet RUST_LOG=pdf_x_text=trace to follow segmentation decisions.");
        process::exit(1);
    }

    let dump_path = &args[1];

    if !Path::new(dump_path).exists() {
        eprintln!("Error: File not found: {}", dump_path);
        process::exit(1);
    }

    let show_words = args.iter().any(|x| x == "--words");
    let show_bounds = args.iter().any(|x| x == "--bounds");
    let select_all = args.iter().any(|x| x == "--select-all");
    let keep_punctuation = args.iter().any(|x| x == "--keep-punctuation");
    let search_term = option_value(&args, "--search");

    let mut config = SegmentationConfig::default().with_split_punctuation(!keep_punctuation);
    if let Some(value) = option_value(&args, "--space-fraction") {
        match value.parse::<f64>() {
            Ok(fraction) => config = config.with_space_fraction(fraction),
            Err(_) => {
                eprintln!("Error: --space-fraction requires a number, got '{}'", value);
                process::exit(1);
            }
        }
    }

    let mut page = match load_glyph_dump(dump_path, config) {
        Ok(page) => page,
        Err(e) => {
            eprintln!("Error loading glyph dump: {}", e);
            process::exit(1);
        }
    };

    println!("{} lines", page.lines().len());
    if let Some(bounds) = page.bounds() {
        println!("Page text bounds: {}", bounds);
    }
    println!();

    if show_words {
        print_words(&page);
    }

    if show_bounds {
        print_bounds(&page);
    }

    if let Some(term) = search_term {
        print_search(&mut page, term);
    }

    if select_all {
        page.select_all();
        print!("{}", page.selected_text());
    } else if !show_words && !show_bounds {
        print!("{}", page.text());
    }
}

/// Value following a `--flag` argument.
fn option_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    let pos = args.iter().position(|arg| arg == flag)?;
    match args.get(pos + 1) {
        Some(value) => Some(value.as_str()),
        None => {
            eprintln!("Error: {} requires a value", flag);
            process::exit(1);
        }
    }
}

fn print_words(page: &PageText) {
    for (line_index, line) in page.lines().iter().enumerate() {
        println!("Line {} ({} words)", line_index, line.len());
        for (word_index, word) in line.words().iter().enumerate() {
            let kind = match word.kind() {
                WordKind::Text => "text",
                WordKind::Whitespace => "space",
                WordKind::Punctuation => "punct",
                WordKind::InferredSpace => "gap",
            };
            println!(
                "  [{:3}] {:5} {:?} ({} glyphs)",
                word_index,
                kind,
                word.text(),
                word.len()
            );
        }
    }
    println!();
}

fn print_bounds(page: &PageText) {
    for (line_index, line) in page.lines().iter().enumerate() {
        match line.bounds() {
            Some(bounds) => println!("Line {}: {}  {}", line_index, bounds, line.outline()),
            None => println!("Line {}: (no bounds)", line_index),
        }
    }
    println!();
}

fn print_search(page: &mut PageText, term: &str) {
    let matches = page.highlight_matches(term);
    println!("{} matches for '{}'", matches, term);
    for (line_index, line) in page.lines().iter().enumerate() {
        if line.state().has_highlight_descendant() {
            println!("  line {}: {}", line_index, line.text());
        }
    }
    println!();
}

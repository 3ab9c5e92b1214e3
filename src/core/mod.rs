pub mod classify;
pub mod config;
pub mod dump;
pub mod error;
pub mod geometry;
pub mod glyph;
pub mod line;
pub mod page_text;
pub mod selection;
pub mod word;

pub use classify::{detect_punctuation, detect_white_space, is_punctuation};
pub use config::SegmentationConfig;
pub use dump::{load_glyph_dump, parse_glyph_dump};
pub use error::{TextError, TextResult};
pub use geometry::{Outline, PathElement, Rect, union_all, union_bounds};
pub use glyph::GlyphSprite;
pub use line::{LineBuilder, LineText, OpenWord};
pub use page_text::{PageText, PageTextBuilder};
pub use selection::{Mark, NodeState, TextSelect};
pub use word::{WordBuilder, WordKind, WordText};

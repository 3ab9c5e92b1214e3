//! Segmentation settings.

/// Tuning knobs for word segmentation.
///
/// The defaults reproduce the standard segmentation; the `with_*` builders
/// exist for documents whose fonts set glyphs unusually tight or loose.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentationConfig {
    /// An inferred space is inserted when the horizontal gap after a word
    /// exceeds the word's average glyph advance divided by this fraction.
    ///
    /// - Typical word space: 0.25-0.33em, so the default of `3.0` sits just
    ///   above tight kerning
    /// - Lower values: fewer inferred spaces
    /// - Higher values: more inferred spaces
    pub space_fraction: f64,

    /// Absolute floor on an inferred-space gap in page units.
    pub min_space_gap: f64,

    /// Whether punctuation glyphs become their own boundary words.
    pub split_punctuation: bool,

    /// How many times one glyph may be re-offered to the line after an
    /// inferred space is closed.
    pub max_reentry: usize,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            space_fraction: 3.0,
            min_space_gap: 0.0,
            split_punctuation: true,
            max_reentry: 2,
        }
    }
}

impl SegmentationConfig {
    /// Configuration with a custom space fraction.
    ///
    /// Non-positive or non-finite values fall back to the default.
    pub fn with_space_fraction(mut self, fraction: f64) -> Self {
        self.space_fraction = if fraction.is_finite() && fraction > 0.0 {
            fraction
        } else {
            Self::default().space_fraction
        };
        self
    }

    pub fn with_min_space_gap(mut self, gap: f64) -> Self {
        self.min_space_gap = gap.max(0.0);
        self
    }

    pub fn with_split_punctuation(mut self, split: bool) -> Self {
        self.split_punctuation = split;
        self
    }

    pub fn with_max_reentry(mut self, max: usize) -> Self {
        self.max_reentry = max.max(1);
        self
    }
}

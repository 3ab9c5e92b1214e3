use thiserror::Error;

/// Error type for the fallible edges of text structuring.
///
/// Segmentation, bounds and selection are total; only index addressing
/// from the UI side and loading glyph dumps can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TextError {
    /// Line index outside the page
    #[error("Line index {index} out of range for page with {len} lines")]
    LineOutOfRange { index: usize, len: usize },

    /// Word index outside the line
    #[error("Word index {index} out of range for line {line} with {len} words")]
    WordOutOfRange { line: usize, index: usize, len: usize },

    /// Malformed row in a glyph dump
    #[error("Parse error on row {line}: {message}")]
    Parse { line: usize, message: String },

    /// Reading a glyph dump failed
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for TextError {
    fn from(err: std::io::Error) -> Self {
        TextError::Io(err.to_string())
    }
}

/// Result type alias for text operations
pub type TextResult<T> = Result<T, TextError>;

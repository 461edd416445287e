//! Error types

/// BDF loading error
///
/// Every variant except [`BdfError::Io`] is a format error: the input is not
/// a font this parser can load. All of them abort the whole load.
#[derive(Debug, thiserror::Error)]
pub enum BdfError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a valid BDF file (expected STARTFONT 2.1)")]
    InvalidSignature,

    #[error("line {line}: missing required property {key}")]
    MissingProperty { key: String, line: usize },

    #[error("line {line}: invalid value for {key}: {value:?}")]
    InvalidProperty { key: String, value: String, line: usize },

    #[error("malformed FONT name: {0:?}")]
    InvalidFontName(String),

    #[error("unknown slant code {0:?}")]
    UnknownSlant(String),

    #[error("unknown spacing code {0:?}")]
    UnknownSpacing(String),

    #[error("line {line}: glyph {glyph:?} has no BITMAP section")]
    MissingBitmap { glyph: String, line: usize },

    #[error("glyph {glyph:?}: bitmap contains non-hex data")]
    InvalidHex { glyph: String },

    #[error(
        "glyph {glyph:?}: {actual} hex digits do not fit a {width}x{height} bitmap (expected {expected})"
    )]
    BitmapSize {
        glyph: String,
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

impl BdfError {
    /// True for errors caused by the font data rather than the reader
    pub fn is_format_error(&self) -> bool {
        !matches!(self, BdfError::Io(_))
    }

    /// Attach a glyph name to bitmap errors raised without one
    pub(crate) fn for_glyph(self, name: &str) -> Self {
        match self {
            BdfError::InvalidHex { .. } => BdfError::InvalidHex { glyph: name.to_string() },
            BdfError::BitmapSize { width, height, expected, actual, .. } => BdfError::BitmapSize {
                glyph: name.to_string(),
                width,
                height,
                expected,
                actual,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, BdfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_is_not_format_error() {
        let err = BdfError::from(std::io::Error::other("boom"));
        assert!(!err.is_format_error());
        assert!(BdfError::InvalidSignature.is_format_error());
    }

    #[test]
    fn test_for_glyph_names_bitmap_errors() {
        let err = BdfError::InvalidHex { glyph: String::new() }.for_glyph("A");
        assert!(matches!(err, BdfError::InvalidHex { ref glyph } if glyph == "A"));
        assert_eq!(err.to_string(), "glyph \"A\": bitmap contains non-hex data");
    }
}

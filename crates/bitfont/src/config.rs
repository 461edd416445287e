//! Parser Configuration

use crate::table::DEFAULT_TABLE_SIZE;

/// Marker that flags generated comments carrying no useful description
pub const DEFAULT_COMMENT_NOISE_MARKER: &str = "LogicalFontDescription";

/// Options controlling how a BDF file is loaded
#[derive(Debug, Clone)]
pub struct ParseConfig {
    /// Number of slots in the resulting glyph table
    pub table_size: usize,

    /// `COMMENT`/`COPYRIGHT` lines containing this text are discarded
    pub comment_noise_marker: String,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            table_size: DEFAULT_TABLE_SIZE,
            comment_noise_marker: DEFAULT_COMMENT_NOISE_MARKER.to_string(),
        }
    }
}

impl ParseConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the glyph table capacity
    pub fn with_table_size(mut self, table_size: usize) -> Self {
        self.table_size = table_size;
        self
    }

    /// Set the comment noise marker
    pub fn with_comment_noise_marker(mut self, marker: impl Into<String>) -> Self {
        self.comment_noise_marker = marker.into();
        self
    }
}

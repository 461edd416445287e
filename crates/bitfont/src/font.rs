//! BDF font loading
//!
//! [`BdfFont`] is the entry point: it validates the header, then reads
//! character records until the input runs out, filing each glyph into a
//! [`GlyphTable`] by its encoding.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::ParseConfig;
use crate::glyph::GlyphEntry;
use crate::header::{read_header, FontInfo};
use crate::lines::LineReader;
use crate::record::read_record;
use crate::table::{GlyphTable, Insertion};
use crate::Result;

/// A loaded BDF font
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BdfFont {
    info: FontInfo,
    table: GlyphTable,
    /// Records read, including dropped ones
    records: usize,
    /// Glyphs dropped for a negative or out-of-range encoding
    dropped: usize,
    /// Glyphs that replaced an earlier glyph with the same encoding
    replaced: usize,
}

impl BdfFont {
    /// Load a font with the default configuration
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::from_reader_with(reader, &ParseConfig::default())
    }

    /// Load a font
    ///
    /// Any format error aborts the load; no partially filled table is
    /// returned.
    pub fn from_reader_with<R: BufRead>(reader: R, config: &ParseConfig) -> Result<Self> {
        let mut lines = LineReader::new(reader);
        let info = read_header(&mut lines, config)?;

        let mut font = Self {
            info,
            table: GlyphTable::new(config.table_size),
            records: 0,
            dropped: 0,
            replaced: 0,
        };

        while let Some(glyph) = read_record(&mut lines)? {
            font.records += 1;
            font.file(glyph);
        }

        tracing::info!(
            "Loaded BDF font {}: {} glyphs from {} records ({} dropped, {} replaced)",
            font.info.name.family(),
            font.table.len(),
            font.records,
            font.dropped,
            font.replaced
        );
        Ok(font)
    }

    /// Load a font from memory
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_reader(data)
    }

    /// Load a font file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, &ParseConfig::default())
    }

    /// Load a font file with a configuration
    pub fn open_with(path: impl AsRef<Path>, config: &ParseConfig) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Opening BDF font: {}", path.display());
        let file = File::open(path)?;
        Self::from_reader_with(BufReader::new(file), config)
    }

    fn file(&mut self, glyph: GlyphEntry) {
        let (name, encoding) = (glyph.name.clone(), glyph.encoding);
        match self.table.insert(glyph) {
            Insertion::Inserted => {}
            Insertion::Replaced => {
                self.replaced += 1;
                tracing::warn!("glyph {:?} replaces earlier glyph at encoding {}", name, encoding);
            }
            Insertion::OutOfRange => {
                self.dropped += 1;
                if encoding >= 0 {
                    tracing::warn!(
                        "glyph {:?} encoding {} outside table of {} slots, dropped",
                        name,
                        encoding,
                        self.table.capacity()
                    );
                }
            }
        }
    }

    /// Header information
    pub fn info(&self) -> &FontInfo {
        &self.info
    }

    /// The glyph table
    pub fn table(&self) -> &GlyphTable {
        &self.table
    }

    /// Take the glyph table
    pub fn into_table(self) -> GlyphTable {
        self.table
    }

    /// Glyph at a character code
    pub fn glyph(&self, code: i32) -> Option<&GlyphEntry> {
        self.table.get(code)
    }

    /// Character records read
    pub fn records(&self) -> usize {
        self.records
    }

    /// Records not stored because of their encoding
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Records that overwrote an earlier glyph
    pub fn replaced(&self) -> usize {
        self.replaced
    }
}

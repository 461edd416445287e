//! Glyph Table
//!
//! Fixed number of slots indexed directly by character code. Glyphs whose
//! code is negative or past the last slot are dropped on insert; they are
//! not clipped or wrapped into range.

use crate::glyph::GlyphEntry;

/// Slot count used by 8-bit text consumers
pub const DEFAULT_TABLE_SIZE: usize = 256;

/// Outcome of [`GlyphTable::insert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// Slot was empty
    Inserted,
    /// Slot held an earlier glyph which was replaced
    Replaced,
    /// Code outside the table, glyph dropped
    OutOfRange,
}

/// Fixed-capacity table of glyphs keyed by encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphTable {
    slots: Vec<Option<GlyphEntry>>,
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_SIZE)
    }
}

impl GlyphTable {
    /// Create an empty table with `capacity` slots
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of populated slots
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Store `glyph` at the slot named by its encoding, last write wins
    pub fn insert(&mut self, glyph: GlyphEntry) -> Insertion {
        let Some(slot) = self.slot_index(glyph.encoding) else {
            return Insertion::OutOfRange;
        };
        match self.slots[slot].replace(glyph) {
            Some(_) => Insertion::Replaced,
            None => Insertion::Inserted,
        }
    }

    /// Glyph for a character code
    pub fn get(&self, code: i32) -> Option<&GlyphEntry> {
        self.slot_index(code).and_then(|i| self.slots[i].as_ref())
    }

    /// Remove and return the glyph at `code`
    pub fn remove(&mut self, code: i32) -> Option<GlyphEntry> {
        self.slot_index(code).and_then(|i| self.slots[i].take())
    }

    /// Populated slots in code order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &GlyphEntry)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|g| (i, g)))
    }

    fn slot_index(&self, code: i32) -> Option<usize> {
        usize::try_from(code).ok().filter(|&i| i < self.slots.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::Bitmap;
    use crate::glyph::{Advance, GlyphMetrics};

    fn glyph(name: &str, encoding: i32) -> GlyphEntry {
        GlyphEntry::new(name, encoding, Advance::default(), GlyphMetrics::default(), Bitmap::new(0, 0))
            .unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let mut table = GlyphTable::default();
        assert_eq!(table.capacity(), 256);
        assert!(table.is_empty());
        assert_eq!(table.insert(glyph("A", 65)), Insertion::Inserted);
        assert_eq!(table.get(65).unwrap().name, "A");
        assert_eq!(table.len(), 1);
        assert!(table.get(66).is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let mut table = GlyphTable::default();
        table.insert(glyph("first", 65));
        assert_eq!(table.insert(glyph("second", 65)), Insertion::Replaced);
        assert_eq!(table.get(65).unwrap().name, "second");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_out_of_range_dropped() {
        let mut table = GlyphTable::new(4);
        assert_eq!(table.insert(glyph("neg", -1)), Insertion::OutOfRange);
        assert_eq!(table.insert(glyph("big", 4)), Insertion::OutOfRange);
        assert_eq!(table.insert(glyph("last", 3)), Insertion::Inserted);
        assert_eq!(table.len(), 1);
        assert!(table.get(-1).is_none());
        assert!(table.get(4).is_none());
    }

    #[test]
    fn test_iter_in_code_order() {
        let mut table = GlyphTable::default();
        table.insert(glyph("b", 98));
        table.insert(glyph("a", 97));
        let codes: Vec<usize> = table.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, vec![97, 98]);
        assert_eq!(table.remove(97).unwrap().name, "a");
        assert_eq!(table.len(), 1);
    }
}

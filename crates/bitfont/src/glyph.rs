//! Resolved glyph entries and their metrics

use serde::Serialize;

use crate::bitmap::Bitmap;

/// Pen advance after drawing a glyph (`DWIDTH`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Advance {
    pub x: i32,
    pub y: i32,
}

/// Box in device space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct BoundingBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BoundingBox {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

impl From<BoundingBox> for (i32, i32, i32, i32) {
    fn from(b: BoundingBox) -> Self {
        (b.left, b.top, b.right, b.bottom)
    }
}

/// Declared glyph geometry from `BBX`
///
/// `descent` is the font-space offset of the bitmap's bottom edge from the
/// baseline, positive upward (the fourth `BBX` value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlyphMetrics {
    pub width: u32,
    pub height: u32,
    pub left: i32,
    pub descent: i32,
}

impl GlyphMetrics {
    /// Placement box with the vertical axis flipped to device space
    ///
    /// `None` when an edge does not fit in `i32`.
    pub fn dest_box(&self) -> Option<BoundingBox> {
        let w = i32::try_from(self.width).ok()?;
        let h = i32::try_from(self.height).ok()?;
        let top = self.descent.checked_add(h)?.checked_neg()?;
        let right = self.left.checked_add(w)?;
        let bottom = self.descent.checked_neg()?;
        Some(BoundingBox::new(self.left, top, right, bottom))
    }

    /// Bounds of the raw bitmap
    pub fn source_box(&self) -> BoundingBox {
        BoundingBox::new(0, 0, self.width as i32, self.height as i32)
    }
}

/// One resolved character from a BDF file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphEntry {
    /// Name given after `STARTCHAR`
    pub name: String,
    /// Character code; negative means unencoded
    pub encoding: i32,
    /// Second `ENCODING` value, only present with `ENCODING -1 <n>`
    pub alt_encoding: Option<i32>,
    /// Pen advance
    pub advance: Advance,
    dest_box: BoundingBox,
    source_box: BoundingBox,
    bitmap: Bitmap,
}

impl GlyphEntry {
    /// Build an entry; `bitmap` must be `metrics.width` x `metrics.height`
    ///
    /// Returns `None` when the bitmap size disagrees with the metrics or the
    /// placement box overflows.
    pub fn new(
        name: impl Into<String>,
        encoding: i32,
        advance: Advance,
        metrics: GlyphMetrics,
        bitmap: Bitmap,
    ) -> Option<Self> {
        if bitmap.size() != (metrics.width, metrics.height) {
            return None;
        }
        Some(Self {
            name: name.into(),
            encoding,
            alt_encoding: None,
            advance,
            dest_box: metrics.dest_box()?,
            source_box: metrics.source_box(),
            bitmap,
        })
    }

    /// Placement box relative to the pen position
    pub fn dest_box(&self) -> BoundingBox {
        self.dest_box
    }

    /// Always `(0, 0, width, height)`
    pub fn source_box(&self) -> BoundingBox {
        self.source_box
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }

    /// True if the glyph maps to a table slot code (non-negative encoding)
    pub fn is_encoded(&self) -> bool {
        self.encoding >= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(width: u32, height: u32, left: i32, descent: i32) -> GlyphMetrics {
        GlyphMetrics { width, height, left, descent }
    }

    #[test]
    fn test_dest_box_flips_axis() {
        let m = metrics(8, 9, 0, 2);
        assert_eq!(m.dest_box(), Some(BoundingBox::new(0, -11, 8, -2)));
        assert_eq!(m.source_box(), BoundingBox::new(0, 0, 8, 9));
    }

    #[test]
    fn test_dest_box_with_bearing_and_negative_descent() {
        let m = metrics(5, 7, 1, -2);
        let b = m.dest_box().unwrap();
        assert_eq!(<(i32, i32, i32, i32)>::from(b), (1, -5, 6, 2));
        assert_eq!(b.width(), 5);
        assert_eq!(b.height(), 7);
    }

    #[test]
    fn test_descent_shifts_by_same_amount() {
        let low = metrics(4, 6, 0, 0).dest_box().unwrap();
        let high = metrics(4, 6, 0, 3).dest_box().unwrap();
        assert_eq!(low.top - high.top, 3);
        assert_eq!(low.bottom - high.bottom, 3);
    }

    #[test]
    fn test_dest_box_overflow() {
        assert_eq!(metrics(1, 1, 0, i32::MAX).dest_box(), None);
        assert_eq!(metrics(1, 1, 0, i32::MIN).dest_box(), None);
        assert_eq!(metrics(i32::MAX as u32, 0, 1, 0).dest_box(), None);
        assert_eq!(metrics(u32::MAX, 1, 0, 0).dest_box(), None);
        let b = metrics(1, 1, 0, i32::MAX - 1).dest_box().unwrap();
        assert_eq!((b.top, b.bottom), (-i32::MAX, 1 - i32::MAX));

        let m = metrics(1, 1, 0, i32::MAX);
        assert!(GlyphEntry::new("A", 65, Advance::default(), m, Bitmap::new(1, 1)).is_none());
    }

    #[test]
    fn test_new_rejects_mismatched_bitmap() {
        let m = metrics(8, 2, 0, 0);
        assert!(GlyphEntry::new("A", 65, Advance::default(), m, Bitmap::new(8, 3)).is_none());
        let entry = GlyphEntry::new("A", 65, Advance { x: 9, y: 0 }, m, Bitmap::new(8, 2)).unwrap();
        assert_eq!(entry.source_box(), BoundingBox::new(0, 0, 8, 2));
        assert_eq!((entry.width(), entry.height()), (8, 2));
        assert!(entry.is_encoded());
    }
}

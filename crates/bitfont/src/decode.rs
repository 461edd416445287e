//! Hex bitmap decoding
//!
//! A glyph's `BITMAP` section is a run of hex rows, `ceil(width / 8)` bytes
//! each. The rows arrive here already concatenated into one digit string.

use crate::bitmap::{row_bytes, Bitmap};
use crate::{BdfError, Result};

/// Most blank bytes a truncated payload may be padded with, unless the
/// payload itself is larger
const MAX_BLANK_FILL: usize = 4096;

/// Decode a concatenated hex payload into a `width` x `height` bitmap
///
/// Zero-area glyphs (common for spaces) yield a blank bitmap and the payload
/// is not looked at. Otherwise the payload must be hex and must map onto
/// whole rows: the exact size, wider padded rows, or a truncated run of rows
/// (missing rows stay blank). Truncated payloads padded by more than
/// `max(4096, payload bytes)` blank bytes are rejected as a size error.
pub fn decode_bitmap(width: u32, height: u32, hex: &[u8]) -> Result<Bitmap> {
    if width == 0 || height == 0 {
        return Ok(Bitmap::new(width, height));
    }

    let stride = row_bytes(width);
    let rows = height as usize;
    let expected = stride.checked_mul(rows);
    let size_error = || BdfError::BitmapSize {
        glyph: String::new(),
        width,
        height,
        expected: expected.unwrap_or(usize::MAX).saturating_mul(2),
        actual: hex.len(),
    };
    let Some(expected) = expected else {
        return Err(size_error());
    };

    if hex.len() % 2 != 0 {
        return Err(size_error());
    }
    let bytes = hex_to_bytes(hex)?;

    if bytes.len() == expected {
        return Bitmap::from_packed(width, height, bytes).ok_or_else(size_error);
    }

    let data = if bytes.len() > expected && bytes.len() % rows == 0 {
        // Rows padded wider than needed, keep the leftmost bytes
        let src_stride = bytes.len() / rows;
        bytes.chunks(src_stride).flat_map(|src| &src[..stride]).copied().collect()
    } else if bytes.len() < expected
        && bytes.len() % stride == 0
        && expected - bytes.len() <= MAX_BLANK_FILL.max(bytes.len())
    {
        tracing::warn!(
            "bitmap has {} of {} rows, padding with blank rows",
            bytes.len() / stride,
            rows
        );
        let mut data = bytes;
        data.resize(expected, 0);
        data
    } else {
        return Err(size_error());
    };

    Bitmap::from_packed(width, height, data).ok_or_else(size_error)
}

fn hex_to_bytes(hex: &[u8]) -> Result<Vec<u8>> {
    hex.chunks_exact(2)
        .map(|pair| match (hex_value(pair[0]), hex_value(pair[1])) {
            (Some(hi), Some(lo)) => Ok((hi << 4) | lo),
            _ => Err(BdfError::InvalidHex { glyph: String::new() }),
        })
        .collect()
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_payload() {
        let bitmap = decode_bitmap(8, 2, b"FF81").unwrap();
        assert_eq!(bitmap.as_bytes(), &[0xFF, 0x81]);
        assert!(bitmap.get_pixel(0, 1));
        assert!(!bitmap.get_pixel(1, 1));
    }

    #[test]
    fn test_lowercase_hex() {
        let bitmap = decode_bitmap(8, 1, b"a5").unwrap();
        assert_eq!(bitmap.as_bytes(), &[0xA5]);
    }

    #[test]
    fn test_multi_byte_rows() {
        let bitmap = decode_bitmap(12, 2, b"FFF0000F").unwrap();
        assert_eq!(bitmap.stride(), 2);
        assert_eq!(bitmap.count_set(), 12);
        assert!(bitmap.get_pixel(11, 0));
        // Low nibble of the second row is padding
        assert!(bitmap.row(1).unwrap().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_zero_area_ignores_payload() {
        for (w, h) in [(0, 0), (0, 7), (5, 0)] {
            let bitmap = decode_bitmap(w, h, b"not hex at all").unwrap();
            assert_eq!(bitmap.size(), (w, h));
            assert!(bitmap.is_blank());
        }
    }

    #[test]
    fn test_padded_rows() {
        // 4 pixels wide but stored as 16-bit rows
        let bitmap = decode_bitmap(4, 2, b"F000A000").unwrap();
        assert_eq!(bitmap.as_bytes(), &[0xF0, 0xA0]);
    }

    #[test]
    fn test_truncated_rows_are_blank() {
        let bitmap = decode_bitmap(8, 3, b"FFFF").unwrap();
        assert_eq!(bitmap.as_bytes(), &[0xFF, 0xFF, 0x00]);
    }

    #[test]
    fn test_non_hex_is_error() {
        assert!(matches!(
            decode_bitmap(8, 1, b"G1"),
            Err(BdfError::InvalidHex { .. })
        ));
    }

    #[test]
    fn test_odd_length_is_error() {
        assert!(matches!(
            decode_bitmap(8, 1, b"FFF"),
            Err(BdfError::BitmapSize { expected: 2, actual: 3, .. })
        ));
    }

    #[test]
    fn test_partial_row_is_error() {
        // 16-pixel rows, three bytes is one and a half rows
        assert!(matches!(
            decode_bitmap(16, 2, b"FFFFFF"),
            Err(BdfError::BitmapSize { .. })
        ));
    }

    #[test]
    fn test_huge_box_with_short_payload_is_error() {
        assert!(matches!(
            decode_bitmap(1 << 20, 1 << 20, b""),
            Err(BdfError::BitmapSize { actual: 0, .. })
        ));
        // One row given, far more than the blank-fill allowance missing
        assert!(matches!(
            decode_bitmap(8, 100_000, b"FF"),
            Err(BdfError::BitmapSize { .. })
        ));
    }

    #[test]
    fn test_max_dimensions_are_error() {
        assert!(matches!(
            decode_bitmap(u32::MAX, u32::MAX, b"FF"),
            Err(BdfError::BitmapSize { .. })
        ));
    }

    #[test]
    fn test_blank_fill_scales_with_payload() {
        // 5000 of 9000 one-byte rows: 4000 blank bytes is within the allowance
        let hex = "FF".repeat(5000);
        let bitmap = decode_bitmap(8, 9000, hex.as_bytes()).unwrap();
        assert_eq!(bitmap.count_set(), 8 * 5000);
        assert!(decode_bitmap(8, 20_000, hex.as_bytes()).is_err());
    }

    #[test]
    fn test_empty_payload_for_inked_glyph() {
        let bitmap = decode_bitmap(8, 2, b"").unwrap();
        assert!(bitmap.is_blank());
        assert_eq!(bitmap.size(), (8, 2));
    }
}

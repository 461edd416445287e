//! Bitmap - packed 1-bit raster
//!
//! Rows are `ceil(width / 8)` bytes, most significant bit first. Bits past
//! `width` in the last byte of a row are always zero.

use std::fmt;

/// 1-bit-per-pixel image
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Bitmap {
    width: u32,
    height: u32,
    stride: usize,
    data: Vec<u8>,
}

/// Bytes needed for one row of `width` pixels
pub fn row_bytes(width: u32) -> usize {
    (width as usize).div_ceil(8)
}

impl Bitmap {
    /// Create a blank (all zero) bitmap
    pub fn new(width: u32, height: u32) -> Self {
        let stride = row_bytes(width);
        Self {
            width,
            height,
            stride,
            data: vec![0; stride * height as usize],
        }
    }

    /// Wrap packed row data; `None` if the length does not match
    pub fn from_packed(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        let stride = row_bytes(width);
        if stride.checked_mul(height as usize) != Some(data.len()) {
            return None;
        }
        let mut bitmap = Self { width, height, stride, data };
        bitmap.clear_padding();
        Some(bitmap)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// (width, height)
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Bytes per row
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Packed pixel data
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Packed bytes of row `y`
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.stride;
        Some(&self.data[start..start + self.stride])
    }

    /// Pixel value; out-of-bounds reads are unset
    pub fn get_pixel(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let byte = self.data[y as usize * self.stride + (x / 8) as usize];
        byte & (0x80 >> (x % 8)) != 0
    }

    /// Set or clear a pixel; out-of-bounds writes are ignored
    pub fn set_pixel(&mut self, x: u32, y: u32, on: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = y as usize * self.stride + (x / 8) as usize;
        let mask = 0x80 >> (x % 8);
        if on {
            self.data[idx] |= mask;
        } else {
            self.data[idx] &= !mask;
        }
    }

    /// True if no pixel is set
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|&b| b == 0)
    }

    /// Number of set pixels
    pub fn count_set(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    fn clear_padding(&mut self) {
        let used = self.width % 8;
        if used == 0 || self.stride == 0 {
            return;
        }
        let mask = !(0xFFu8 >> used);
        for row in self.data.chunks_mut(self.stride) {
            if let Some(last) = row.last_mut() {
                *last &= mask;
            }
        }
    }
}

impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                f.write_str(if self.get_pixel(x, y) { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

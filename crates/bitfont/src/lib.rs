//! bitfont - BDF Bitmap Font Loader
//!
//! This crate reads X11 Bitmap Distribution Format (BDF 2.1) fonts:
//! - Header validation and global properties (`FONT`, ascent/descent)
//! - XLFD font name decoding (slant and spacing codes)
//! - Per-character records with `BBX`, `DWIDTH` and `ENCODING`
//! - Hex bitmap decoding into packed 1-bit rasters
//! - A fixed-size glyph table indexed by character code
//!
//! # Example
//! ```rust,ignore
//! use bitfont::BdfFont;
//!
//! let font = BdfFont::open("courier.bdf")?;
//! if let Some(glyph) = font.glyph(b'A' as i32) {
//!     println!("{}", glyph.bitmap);
//! }
//! ```

mod error;
mod config;
mod lines;
mod properties;
mod header;
mod record;
mod font;
pub mod bitmap;
pub mod decode;
pub mod glyph;
pub mod table;
pub mod xlfd;

pub use error::{BdfError, Result};
pub use config::ParseConfig;
pub use properties::Properties;
pub use header::FontInfo;
pub use font::BdfFont;
pub use bitmap::Bitmap;
pub use decode::decode_bitmap;
pub use glyph::{Advance, BoundingBox, GlyphEntry, GlyphMetrics};
pub use table::{GlyphTable, Insertion, DEFAULT_TABLE_SIZE};
pub use xlfd::{FontName, Slant, Spacing};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

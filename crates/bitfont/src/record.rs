//! Character records (`STARTCHAR` ... `ENDCHAR`)

use std::io::BufRead;

use crate::decode::decode_bitmap;
use crate::glyph::{Advance, GlyphEntry, GlyphMetrics};
use crate::lines::LineReader;
use crate::properties::Properties;
use crate::{BdfError, Result};

const START_CHAR: &[u8] = b"STARTCHAR";
const BITMAP: &[u8] = b"BITMAP";
const END_CHAR: &[u8] = b"ENDCHAR";

/// A record as read from the file, before resolution
struct RawRecord {
    name: String,
    props: Properties,
    hex: Vec<u8>,
}

/// Read the next character record
///
/// Returns `Ok(None)` when no further `STARTCHAR` exists, which is the normal
/// end of the glyph loop.
pub(crate) fn read_record<R: BufRead>(lines: &mut LineReader<R>) -> Result<Option<GlyphEntry>> {
    match read_raw(lines)? {
        Some(raw) => resolve(raw).map(Some),
        None => Ok(None),
    }
}

fn read_raw<R: BufRead>(lines: &mut LineReader<R>) -> Result<Option<RawRecord>> {
    let Some(start) = lines.skip_to(START_CHAR)? else {
        return Ok(None);
    };
    let name = String::from_utf8_lossy(&start[START_CHAR.len()..]).trim().to_string();

    let mut props = Properties::new(lines.line_number());
    loop {
        let Some(line) = lines.next_line()? else {
            return Err(BdfError::MissingBitmap {
                glyph: name,
                line: lines.line_number(),
            });
        };
        if line.starts_with(BITMAP) {
            break;
        }
        props.insert_line(&line, lines.line_number());
    }

    let mut hex = Vec::new();
    while let Some(line) = lines.next_line()? {
        if line.starts_with(END_CHAR) {
            break;
        }
        hex.extend_from_slice(line.trim_ascii());
    }

    Ok(Some(RawRecord { name, props, hex }))
}

fn resolve(raw: RawRecord) -> Result<GlyphEntry> {
    let RawRecord { name, props, hex } = raw;

    let [width, height, left, descent] = props.ints::<4>("BBX")?;
    let [dx, dy] = props.ints::<2>("DWIDTH")?;
    let (encoding, alt_encoding) = match props.int_list("ENCODING")?.as_slice() {
        [code] => (*code, None),
        [code, alt] => (*code, Some(*alt)),
        _ => return Err(props.invalid_value("ENCODING")),
    };

    let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) else {
        return Err(props.invalid_value("BBX"));
    };
    let metrics = GlyphMetrics { width, height, left, descent };
    if metrics.dest_box().is_none() {
        return Err(props.invalid_value("BBX"));
    }

    let bitmap = decode_bitmap(width, height, &hex).map_err(|e| e.for_glyph(&name))?;
    let advance = Advance { x: dx, y: dy };

    let mut glyph = GlyphEntry::new(name, encoding, advance, metrics, bitmap)
        .ok_or_else(|| props.invalid_value("BBX"))?;
    glyph.alt_encoding = alt_encoding;

    tracing::trace!("glyph {:?} encoding {} {}x{}", glyph.name, encoding, width, height);
    Ok(glyph)
}

//! Font header: signature and global properties

use std::io::BufRead;

use serde::Serialize;

use crate::config::ParseConfig;
use crate::lines::LineReader;
use crate::properties::{split_property, Properties};
use crate::xlfd::FontName;
use crate::{BdfError, Result};

const SIGNATURE: &[u8] = b"STARTFONT 2.1";
const END_PROPERTIES: &[u8] = b"ENDPROPERTIES";

/// Font-wide information from the header block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontInfo {
    /// Decoded `FONT` property
    pub name: FontName,
    /// `FONT_ASCENT`
    pub ascent: i32,
    /// `FONT_DESCENT`
    pub descent: i32,
    /// `COMMENT` and `COPYRIGHT` text, noise lines removed
    pub comments: Vec<String>,
    /// Distinct header keys seen
    pub property_count: usize,
}

impl FontInfo {
    /// Line height (ascent + descent)
    pub fn line_height(&self) -> i32 {
        self.ascent + self.descent
    }
}

/// Read the signature line and the header properties
///
/// Stops at `ENDPROPERTIES`. Running out of input first is tolerated: the
/// header is resolved from whatever was collected.
pub(crate) fn read_header<R: BufRead>(
    lines: &mut LineReader<R>,
    config: &ParseConfig,
) -> Result<FontInfo> {
    match lines.next_line()? {
        Some(line) if line.starts_with(SIGNATURE) => {}
        _ => return Err(BdfError::InvalidSignature),
    }

    let mut props = Properties::new(lines.line_number());
    let mut comments = Vec::new();
    let noise = config.comment_noise_marker.as_bytes();

    loop {
        let Some(line) = lines.next_line()? else {
            tracing::warn!("input ended inside the font header");
            break;
        };
        if line.starts_with(END_PROPERTIES) {
            break;
        }

        let (key, value) = split_property(&line);
        if (key == b"COMMENT" || key == b"COPYRIGHT") && !contains(&line, noise) {
            comments.push(String::from_utf8_lossy(value).into_owned());
        }
        props.insert_line(&line, lines.line_number());
    }

    let font = props.require_str("FONT")?;
    let name = FontName::parse(font.trim())?;
    let ascent = props.int("FONT_ASCENT")?;
    let descent = props.int("FONT_DESCENT")?;

    tracing::debug!(
        "BDF header: {} (ascent {}, descent {}, {} properties)",
        name.display_name(),
        ascent,
        descent,
        props.len()
    );

    Ok(FontInfo {
        name,
        ascent,
        descent,
        comments,
        property_count: props.len(),
    })
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|w| w == needle)
}

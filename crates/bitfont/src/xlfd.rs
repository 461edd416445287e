//! XLFD font names
//!
//! The `FONT` property uses the X Logical Font Description form:
//! `-foundry-family-weight-slant-setwidth-style-pixels-points-resx-resy-spacing-avgwidth-registry-encoding`.
//! Slant and spacing are short codes decoded here.

use std::fmt;

use serde::Serialize;

use crate::{BdfError, Result};

const FOUNDRY: usize = 1;
const FAMILY: usize = 2;
const WEIGHT: usize = 3;
const SLANT: usize = 4;
const PIXEL_SIZE: usize = 7;
const SPACING: usize = 11;

/// Font slant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Slant {
    Roman,
    Italic,
    Oblique,
    ReverseItalic,
    ReverseOblique,
    Other,
}

impl Slant {
    /// Decode an XLFD slant code (case-insensitive)
    pub fn from_code(code: &str) -> Result<Self> {
        match code.to_ascii_uppercase().as_str() {
            "R" => Ok(Slant::Roman),
            "I" => Ok(Slant::Italic),
            "O" => Ok(Slant::Oblique),
            "RI" => Ok(Slant::ReverseItalic),
            "RO" => Ok(Slant::ReverseOblique),
            "OT" => Ok(Slant::Other),
            _ => Err(BdfError::UnknownSlant(code.to_string())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Slant::Roman => "Roman",
            Slant::Italic => "Italic",
            Slant::Oblique => "Oblique",
            Slant::ReverseItalic => "Reverse Italic",
            Slant::ReverseOblique => "Reverse Oblique",
            Slant::Other => "Other",
        }
    }
}

impl fmt::Display for Slant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Character spacing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Spacing {
    Proportional,
    Monospaced,
    Cell,
}

impl Spacing {
    /// Decode an XLFD spacing code (case-insensitive)
    pub fn from_code(code: &str) -> Result<Self> {
        match code.to_ascii_uppercase().as_str() {
            "P" => Ok(Spacing::Proportional),
            "M" => Ok(Spacing::Monospaced),
            "C" => Ok(Spacing::Cell),
            _ => Err(BdfError::UnknownSpacing(code.to_string())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Spacing::Proportional => "Proportional",
            Spacing::Monospaced => "Monospaced",
            Spacing::Cell => "Cell",
        }
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parsed `FONT` property
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontName {
    /// Raw name as written in the file
    pub raw: String,
    /// Hyphen-separated fields; field 0 is whatever precedes the first `-`
    pub fields: Vec<String>,
    pub slant: Slant,
    pub spacing: Spacing,
}

impl FontName {
    /// Parse an XLFD name
    pub fn parse(raw: &str) -> Result<Self> {
        let fields: Vec<String> = raw.split('-').map(str::to_string).collect();
        if fields.len() <= SPACING {
            return Err(BdfError::InvalidFontName(raw.to_string()));
        }
        let slant = Slant::from_code(&fields[SLANT])?;
        let spacing = Spacing::from_code(&fields[SPACING])?;
        Ok(Self {
            raw: raw.to_string(),
            fields,
            slant,
            spacing,
        })
    }

    pub fn foundry(&self) -> &str {
        &self.fields[FOUNDRY]
    }

    pub fn family(&self) -> &str {
        &self.fields[FAMILY]
    }

    pub fn weight(&self) -> &str {
        &self.fields[WEIGHT]
    }

    /// Pixel size field, if numeric
    pub fn pixel_size(&self) -> Option<u32> {
        self.fields[PIXEL_SIZE].parse().ok()
    }

    /// Descriptive name: fields joined by `;` with slant and spacing spelled out
    pub fn display_name(&self) -> String {
        self.fields
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, field)| match i {
                SLANT => self.slant.label(),
                SPACING => self.spacing.label(),
                _ => field.as_str(),
            })
            .collect::<Vec<_>>()
            .join(";")
    }
}

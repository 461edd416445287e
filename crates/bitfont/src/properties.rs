//! Key/value property lines
//!
//! Header and glyph blocks are sequences of `KEY value` lines. Each block gets
//! its own [`Properties`] map which is dropped once the block is resolved.

use std::collections::HashMap;

use crate::{BdfError, Result};

/// Split a line at the first space into `(key, value)`
///
/// A line without a space is a bare key with an empty value.
pub fn split_property(line: &[u8]) -> (&[u8], &[u8]) {
    match line.iter().position(|&b| b == b' ') {
        Some(i) => (&line[..i], &line[i + 1..]),
        None => (line, &[][..]),
    }
}

#[derive(Debug, Clone)]
struct Entry {
    value: Vec<u8>,
    line: usize,
}

/// Properties collected from one header or glyph block
#[derive(Debug, Clone, Default)]
pub struct Properties {
    entries: HashMap<Vec<u8>, Entry>,
    /// Line the block started on, reported for missing keys
    start_line: usize,
}

impl Properties {
    /// Create an empty map for a block starting at `start_line`
    pub fn new(start_line: usize) -> Self {
        Self {
            entries: HashMap::new(),
            start_line,
        }
    }

    /// Tokenize `line` and store it; later duplicates overwrite earlier ones
    pub fn insert_line(&mut self, line: &[u8], line_number: usize) {
        let (key, value) = split_property(line);
        self.entries.insert(
            key.to_vec(),
            Entry {
                value: value.to_vec(),
                line: line_number,
            },
        );
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value as text, required
    pub fn require_str(&self, key: &str) -> Result<String> {
        let entry = self.entry(key)?;
        Ok(String::from_utf8_lossy(&entry.value).into_owned())
    }

    /// Whitespace-separated integers, required
    pub fn int_list(&self, key: &str) -> Result<Vec<i32>> {
        let entry = self.entry(key)?;
        let text = String::from_utf8_lossy(&entry.value);
        text.split_whitespace()
            .map(|tok| tok.parse::<i32>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| invalid(key, entry))
    }

    /// Exactly `N` integers, required
    pub fn ints<const N: usize>(&self, key: &str) -> Result<[i32; N]> {
        let values = self.int_list(key)?;
        <[i32; N]>::try_from(values).map_err(|_| self.invalid_value(key))
    }

    /// A single integer, required
    pub fn int(&self, key: &str) -> Result<i32> {
        let [value] = self.ints::<1>(key)?;
        Ok(value)
    }

    /// Reject a value that parsed but is out of range for `key`
    pub(crate) fn invalid_value(&self, key: &str) -> BdfError {
        match self.entries.get(key.as_bytes()) {
            Some(entry) => invalid(key, entry),
            None => self.missing(key),
        }
    }

    fn entry(&self, key: &str) -> Result<&Entry> {
        self.entries.get(key.as_bytes()).ok_or_else(|| self.missing(key))
    }

    fn missing(&self, key: &str) -> BdfError {
        BdfError::MissingProperty {
            key: key.to_string(),
            line: self.start_line,
        }
    }
}

fn invalid(key: &str, entry: &Entry) -> BdfError {
    BdfError::InvalidProperty {
        key: key.to_string(),
        value: String::from_utf8_lossy(&entry.value).into_owned(),
        line: entry.line,
    }
}

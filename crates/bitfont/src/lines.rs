//! Line reader for BDF text
//!
//! BDF is line oriented and read strictly forward. Lines are handed out
//! without their terminator (`\n` or `\r\n`).

use std::io::BufRead;

use crate::Result;

/// Forward-only line reader with line tracking
pub struct LineReader<R> {
    inner: R,
    /// Number of lines consumed so far (1-based number of the last line)
    line: usize,
}

impl<R: BufRead> LineReader<R> {
    /// Create a new reader
    pub fn new(inner: R) -> Self {
        Self { inner, line: 0 }
    }

    /// Number of the most recently read line
    pub fn line_number(&self) -> usize {
        self.line
    }

    /// Read the next line, or `None` at end of input
    pub fn next_line(&mut self) -> Result<Option<Vec<u8>>> {
        let mut buf = Vec::new();
        if self.inner.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;

        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        Ok(Some(buf))
    }

    /// Skip lines until one starts with `keyword`, returning it
    pub fn skip_to(&mut self, keyword: &[u8]) -> Result<Option<Vec<u8>>> {
        while let Some(line) = self.next_line()? {
            if line.starts_with(keyword) {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_terminators() {
        let mut reader = LineReader::new(&b"one\ntwo\r\nthree"[..]);
        assert_eq!(reader.next_line().unwrap().as_deref(), Some(&b"one"[..]));
        assert_eq!(reader.next_line().unwrap().as_deref(), Some(&b"two"[..]));
        assert_eq!(reader.next_line().unwrap().as_deref(), Some(&b"three"[..]));
        assert_eq!(reader.next_line().unwrap(), None);
        assert_eq!(reader.line_number(), 3);
    }

    #[test]
    fn test_empty_lines_are_not_eof() {
        let mut reader = LineReader::new(&b"\n\nx\n"[..]);
        assert_eq!(reader.next_line().unwrap().as_deref(), Some(&b""[..]));
        assert_eq!(reader.next_line().unwrap().as_deref(), Some(&b""[..]));
        assert_eq!(reader.next_line().unwrap().as_deref(), Some(&b"x"[..]));
        assert!(reader.next_line().unwrap().is_none());
    }

    #[test]
    fn test_skip_to() {
        let mut reader = LineReader::new(&b"junk\nSTARTCHAR A\nENCODING 65\n"[..]);
        let line = reader.skip_to(b"STARTCHAR").unwrap().unwrap();
        assert_eq!(line, b"STARTCHAR A");
        assert_eq!(reader.line_number(), 2);
        assert!(reader.skip_to(b"STARTCHAR").unwrap().is_none());
    }
}

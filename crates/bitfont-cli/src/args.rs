//! Command line arguments

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

pub const USAGE: &str = "usage: bdfinfo <font.bdf> [--json] [--table-size <n>] [--glyph <code>]...";

/// Parsed command line
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub path: PathBuf,
    pub json: bool,
    pub table_size: Option<usize>,
    pub glyphs: Vec<i32>,
}

impl Args {
    /// Parse arguments (without the program name)
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut path = None;
        let mut parsed = Args::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => parsed.json = true,
                "--table-size" => {
                    let value = args.next().context("--table-size needs a value")?;
                    parsed.table_size =
                        Some(value.parse().with_context(|| format!("invalid table size {value:?}"))?);
                }
                "--glyph" => {
                    let value = args.next().context("--glyph needs a character code")?;
                    parsed.glyphs.push(parse_code(&value)?);
                }
                flag if flag.starts_with("--") => bail!("unknown option {flag}\n{USAGE}"),
                _ if path.is_some() => bail!("more than one font given\n{USAGE}"),
                other => path = Some(PathBuf::from(other)),
            }
        }

        parsed.path = path.with_context(|| format!("no font file given\n{USAGE}"))?;
        Ok(parsed)
    }
}

/// Character code as decimal, `0x` hex, or a single character
fn parse_code(value: &str) -> Result<i32> {
    if let Some(hex) = value.strip_prefix("0x") {
        return i32::from_str_radix(hex, 16).with_context(|| format!("invalid code {value:?}"));
    }
    if let Ok(code) = value.parse::<i32>() {
        return Ok(code);
    }
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c as i32),
        _ => bail!("invalid code {value:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args> {
        Args::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_all_options() {
        let args = parse(&["font.bdf", "--json", "--glyph", "65", "--glyph", "0x42", "--glyph", "c", "--table-size", "512"])
            .unwrap();
        assert_eq!(args.path, PathBuf::from("font.bdf"));
        assert!(args.json);
        assert_eq!(args.glyphs, vec![65, 0x42, 'c' as i32]);
        assert_eq!(args.table_size, Some(512));
    }

    #[test]
    fn test_requires_path() {
        assert!(parse(&["--json"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_flag() {
        assert!(parse(&["font.bdf", "--verbose"]).is_err());
    }

    #[test]
    fn test_rejects_bad_code() {
        assert!(parse(&["font.bdf", "--glyph", "AB"]).is_err());
        assert!(parse(&["font.bdf", "--glyph"]).is_err());
    }
}

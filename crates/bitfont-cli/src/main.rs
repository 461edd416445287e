//! bdfinfo - inspect BDF bitmap fonts

mod args;

use anyhow::{Context, Result};
use bitfont::{Advance, BdfFont, BoundingBox, FontInfo, GlyphEntry, ParseConfig};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use args::Args;

/// JSON view of a loaded font
#[derive(Serialize)]
struct FontSummary<'a> {
    info: &'a FontInfo,
    display_name: String,
    records: usize,
    dropped: usize,
    replaced: usize,
    glyphs: Vec<GlyphSummary<'a>>,
}

#[derive(Serialize)]
struct GlyphSummary<'a> {
    code: usize,
    name: &'a str,
    advance: Advance,
    dest_box: BoundingBox,
    source_box: BoundingBox,
}

impl<'a> GlyphSummary<'a> {
    fn new(code: usize, glyph: &'a GlyphEntry) -> Self {
        Self {
            code,
            name: &glyph.name,
            advance: glyph.advance,
            dest_box: glyph.dest_box(),
            source_box: glyph.source_box(),
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse(std::env::args().skip(1))?;
    tracing::debug!("bdfinfo {} loading {}", bitfont::VERSION, args.path.display());

    let mut config = ParseConfig::default();
    if let Some(size) = args.table_size {
        config = config.with_table_size(size);
    }

    let font = BdfFont::open_with(&args.path, &config)
        .with_context(|| format!("failed to load {}", args.path.display()))?;

    if args.json {
        print_json(&font)?;
    } else {
        print_summary(&font);
    }

    for &code in &args.glyphs {
        match font.glyph(code) {
            Some(glyph) => print_glyph(code, glyph),
            None => println!("\nglyph {code}: not present"),
        }
    }

    Ok(())
}

fn print_json(font: &BdfFont) -> Result<()> {
    let summary = FontSummary {
        info: font.info(),
        display_name: font.info().name.display_name(),
        records: font.records(),
        dropped: font.dropped(),
        replaced: font.replaced(),
        glyphs: font
            .table()
            .iter()
            .map(|(code, glyph)| GlyphSummary::new(code, glyph))
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn print_summary(font: &BdfFont) {
    let info = font.info();
    println!("Font:     {}", info.name.display_name());
    println!("Slant:    {}", info.name.slant);
    println!("Spacing:  {}", info.name.spacing);
    println!("Ascent:   {}", info.ascent);
    println!("Descent:  {}", info.descent);
    println!(
        "Glyphs:   {} of {} slots ({} records, {} dropped, {} replaced)",
        font.table().len(),
        font.table().capacity(),
        font.records(),
        font.dropped(),
        font.replaced()
    );
    for comment in &info.comments {
        println!("Comment:  {comment}");
    }
}

fn print_glyph(code: i32, glyph: &GlyphEntry) {
    let b = glyph.dest_box();
    println!();
    println!("glyph {code} {:?}", glyph.name);
    println!("  advance  ({}, {})", glyph.advance.x, glyph.advance.y);
    println!("  dest     ({}, {}, {}, {})", b.left, b.top, b.right, b.bottom);
    println!("  size     {}x{}", glyph.width(), glyph.height());
    print!("{}", glyph.bitmap());
}

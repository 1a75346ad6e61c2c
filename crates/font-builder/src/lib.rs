//! # Font Builder
//!
//! Compile a 1-bpp raw PBM glyph sheet and an optional character map into a
//! GodMode9 FRF font container.
//!
//! ## Example
//!
//! ```no_run
//! use font_builder::{FontCompiler, parse_char_map};
//!
//! let pbm = std::fs::read("font_6x10.pbm").unwrap();
//! let map = parse_char_map(&std::fs::read_to_string("font_6x10.txt").unwrap()).unwrap();
//! let font = FontCompiler::new(6, 10).with_char_map(map).compile(&pbm).unwrap();
//! std::fs::write("font_6x10.frf", font.data).unwrap();
//! ```

mod charmap;
mod error;
pub mod frf;
mod glyph;
mod raster;

pub use charmap::parse_char_map;
pub use error::{Error, Result};
pub use frf::build_font;
pub use glyph::{
    ExtractStats, GlyphEntry, GlyphTable, MAX_HEIGHT, MAX_WIDTH, TileSize, extract_glyphs,
};
pub use raster::{PBM_MAGIC, Raster, extract_bits};

/// Output of a font compile.
#[derive(Debug, Clone)]
pub struct CompiledFont {
    pub data: Vec<u8>,
    pub glyphs: usize,
    pub stats: ExtractStats,
}

/// Font compile settings.
#[derive(Debug, Clone)]
pub struct FontCompiler {
    width: u8,
    height: u8,
    char_map: Option<Vec<u16>>,
}

impl FontCompiler {
    /// Creates a compiler for `width` x `height` tiles, mapping tiles to
    /// codepoints in order.
    pub fn new(width: u8, height: u8) -> Self {
        Self { width, height, char_map: None }
    }

    /// Pairs tiles with `map` instead of their index.
    pub fn with_char_map(mut self, map: Vec<u16>) -> Self {
        self.char_map = Some(map);
        self
    }

    pub fn with_char_map_opt(self, map: Option<Vec<u16>>) -> Self {
        match map {
            Some(map) => self.with_char_map(map),
            None => self,
        }
    }

    /// Validates the tile size before any input is looked at.
    pub fn tile_size(&self) -> Result<TileSize> {
        TileSize::new(self.width, self.height)
    }

    /// Compiles a raw PBM file.
    pub fn compile(&self, pbm: &[u8]) -> Result<CompiledFont> {
        let size = self.tile_size()?;
        let raster = Raster::parse_pbm(pbm)?;
        let (table, stats) = extract_glyphs(&raster, size, self.char_map.as_deref())?;
        let data = build_font(&table)?;
        Ok(CompiledFont { data, glyphs: table.len(), stats })
    }
}

/// Compiles a raw PBM file with an optional character map (simple API).
pub fn compile_font(pbm: &[u8], width: u8, height: u8, char_map: Option<Vec<u16>>) -> Result<Vec<u8>> {
    FontCompiler::new(width, height)
        .with_char_map_opt(char_map)
        .compile(pbm)
        .map(|font| font.data)
}

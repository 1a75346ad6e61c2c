//! Glyph tile extraction.
//!
//! Tiles are cut from the raster in row-major grid order and paired with
//! codepoints in the same order. When a codepoint repeats, the later tile
//! replaces the earlier one. The result is sorted by codepoint.

use std::{
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
};

use log::{info, warn};

use crate::{Error, Raster, Result};

/// Widest supported glyph tile, in pixels (one byte per row).
pub const MAX_WIDTH: u8 = 8;

/// Tallest supported glyph tile, in pixels.
pub const MAX_HEIGHT: u8 = 10;

/// Validated glyph tile dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSize {
    width: u8,
    height: u8,
}

impl TileSize {
    pub fn new(width: u8, height: u8) -> Result<Self> {
        if width > MAX_WIDTH {
            return Err(Error::WidthTooLarge(width));
        }
        if height > MAX_HEIGHT {
            return Err(Error::HeightTooLarge(height));
        }
        if width == 0 || height == 0 {
            return Err(Error::ZeroDimension { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(self) -> u8 {
        self.width
    }

    pub fn height(self) -> u8 {
        self.height
    }
}

/// One glyph: a codepoint and `height` row bytes, left-aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphEntry {
    pub codepoint: u16,
    pub bitmap: Vec<u8>,
}

/// Deduplicated glyphs sorted by ascending codepoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphTable {
    size: TileSize,
    glyphs: Vec<GlyphEntry>,
}

impl GlyphTable {
    pub fn size(&self) -> TileSize {
        self.size
    }

    pub fn glyphs(&self) -> &[GlyphEntry] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn get(&self, codepoint: u16) -> Option<&GlyphEntry> {
        self.glyphs
            .binary_search_by_key(&codepoint, |g| g.codepoint)
            .ok()
            .map(|i| &self.glyphs[i])
    }
}

/// Counters from a single extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Tiles that fit the raster grid.
    pub tiles_in_image: usize,
    /// Tiles paired with a codepoint.
    pub tiles_used: usize,
    /// Tiles dropped because a later tile claimed the same codepoint.
    pub duplicates_removed: usize,
}

impl Display for ExtractStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} glyphs from {} of {} tiles ({} duplicates removed)",
            self.tiles_used - self.duplicates_removed,
            self.tiles_used,
            self.tiles_in_image,
            self.duplicates_removed
        )
    }
}

/// Cuts `size` tiles from `raster` and pairs them with codepoints.
///
/// With no `char_map`, tile `i` maps to codepoint `i`. A map longer than the
/// tile grid is rejected; a shorter one limits how many tiles are used.
pub fn extract_glyphs(
    raster: &Raster<'_>,
    size: TileSize,
    char_map: Option<&[u16]>,
) -> Result<(GlyphTable, ExtractStats)> {
    let columns = raster.width / u32::from(size.width);
    let rows = raster.height / u32::from(size.height);
    let tiles_in_image = columns as usize * rows as usize;

    let codepoints: Vec<u16> = match char_map {
        Some(map) if map.len() > tiles_in_image => {
            return Err(Error::MapTooLarge { map_len: map.len(), tiles: tiles_in_image });
        }
        Some(map) => {
            if map.len() < tiles_in_image {
                info!(
                    "Font map has fewer items than possible in image, only using first {}",
                    map.len()
                );
            }
            map.to_vec()
        }
        None => {
            warn!("No font map given, mapping tiles directly to codepoints");
            (0..tiles_in_image)
                .map(|i| u16::try_from(i).map_err(|_| Error::TooManyGlyphs(tiles_in_image)))
                .collect::<Result<_>>()?
        }
    };

    let mut by_codepoint = BTreeMap::new();
    for (tile, &codepoint) in codepoints.iter().enumerate() {
        let bitmap = read_tile(raster, size, columns, tile);
        by_codepoint.insert(codepoint, bitmap);
    }

    let stats = ExtractStats {
        tiles_in_image,
        tiles_used: codepoints.len(),
        duplicates_removed: codepoints.len() - by_codepoint.len(),
    };
    if stats.duplicates_removed > 0 {
        info!("{} duplicate mappings were removed", stats.duplicates_removed);
    }
    if by_codepoint.len() > usize::from(u16::MAX) {
        return Err(Error::TooManyGlyphs(by_codepoint.len()));
    }

    let glyphs = by_codepoint
        .into_iter()
        .map(|(codepoint, bitmap)| GlyphEntry { codepoint, bitmap })
        .collect();
    Ok((GlyphTable { size, glyphs }, stats))
}

/// Reads the row bytes of grid tile `tile`.
fn read_tile(raster: &Raster<'_>, size: TileSize, columns: u32, tile: usize) -> Vec<u8> {
    let tile = tile as u32;
    let x = (tile % columns) * u32::from(size.width);
    let top = (tile / columns) * u32::from(size.height);
    (0..u32::from(size.height))
        .map(|row| raster.read_row_bits(x, top + row, size.width))
        .collect()
}

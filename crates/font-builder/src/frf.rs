//! FRF font container layout.
//!
//! ```text
//! "RIFF" size:u32LE
//!   "META" len:u32LE(=4)  width:u8 height:u8 count:u16LE
//!   "CDAT" len:u32LE      rowBytes[count*height]            pad->4
//!   "CMAP" len:u32LE      codepoint:u16LE[count] (sorted)   pad->4
//! ```

use gm9_riff::{Chunk, ContainerWriter, Tag};

use crate::{Error, GlyphTable, Result};

/// Font metadata chunk.
pub const META: Tag = Tag::new(b"META");
/// Glyph row data chunk.
pub const CDAT: Tag = Tag::new(b"CDAT");
/// Codepoint map chunk.
pub const CMAP: Tag = Tag::new(b"CMAP");

/// Size of the `META` payload.
pub const META_LEN: usize = 4;

/// Serializes a glyph table as an FRF container.
pub fn build_font(table: &GlyphTable) -> Result<Vec<u8>> {
    let count = u16::try_from(table.len()).map_err(|_| Error::TooManyGlyphs(table.len()))?;
    let size = table.size();

    let mut meta = Vec::with_capacity(META_LEN);
    meta.push(size.width());
    meta.push(size.height());
    meta.extend_from_slice(&count.to_le_bytes());

    let cdat: Vec<u8> = table.glyphs().iter().flat_map(|g| g.bitmap.iter().copied()).collect();
    let cmap: Vec<u8> = table.glyphs().iter().flat_map(|g| g.codepoint.to_le_bytes()).collect();

    Ok(ContainerWriter::riff()
        .with_chunk(Chunk::new(META, meta)?)
        .with_chunk(Chunk::new(CDAT, cdat)?)
        .with_chunk(Chunk::new(CMAP, cmap)?)
        .finish()?)
}

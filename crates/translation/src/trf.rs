//! TRF translation container layout.
//!
//! ```text
//! "RIFF" size:u32LE
//!   "META" len:u32LE(=40)  version:u32LE nstrings:u32LE language:byte[32]
//!   "SDAT" len:u32LE       stringBytes (UTF-8 + NUL per entry)  pad->4
//!   "SMAP" len:u32LE       offset:u16LE[nstrings]               pad->4
//! ```

use gm9_riff::{Chunk, ContainerWriter, Tag};

use crate::{Result, StringTable, Translation, encode_language, string_table::LANGUAGE_FIELD_LEN};

/// Translation metadata chunk.
pub const META: Tag = Tag::new(b"META");
/// String data chunk.
pub const SDAT: Tag = Tag::new(b"SDAT");
/// String offset map chunk.
pub const SMAP: Tag = Tag::new(b"SMAP");

/// Size of the `META` payload.
pub const META_LEN: usize = 8 + LANGUAGE_FIELD_LEN;

/// Serializes a translation as a TRF container.
pub fn build_translation(translation: &Translation) -> Result<Vec<u8>> {
    let table = StringTable::build(&translation.entries())?;
    build_from_table(translation.version(), translation.language(), &table)
}

/// Serializes a prepared string table as a TRF container.
pub fn build_from_table(version: u32, language: &str, table: &StringTable) -> Result<Vec<u8>> {
    // Entries are at least one byte and start below 2^16, so at most 2^16 of them.
    let count = table.len() as u32;

    let mut meta = Vec::with_capacity(META_LEN);
    meta.extend_from_slice(&version.to_le_bytes());
    meta.extend_from_slice(&count.to_le_bytes());
    meta.extend_from_slice(&encode_language(language));

    Ok(ContainerWriter::riff()
        .with_chunk(Chunk::new(META, meta)?)
        .with_chunk(Chunk::new(SDAT, table.data())?)
        .with_chunk(Chunk::new(SMAP, table.offset_bytes())?)
        .finish()?)
}

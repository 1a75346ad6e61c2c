//! String blob and 16-bit offset table.

use log::info;

use crate::{Error, Result};

/// Width of the fixed language-name field.
pub const LANGUAGE_FIELD_LEN: usize = 32;

/// One encoded string: UTF-8 bytes plus a single NUL terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringEntry {
    pub label: String,
    pub bytes: Vec<u8>,
}

impl StringEntry {
    pub fn new(label: impl Into<String>, text: &str) -> Self {
        let mut bytes = Vec::with_capacity(text.len() + 1);
        bytes.extend_from_slice(text.as_bytes());
        bytes.push(0);
        Self { label: label.into(), bytes }
    }
}

/// Concatenated string data and the start offset of each entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTable {
    data: Vec<u8>,
    offsets: Vec<u16>,
}

impl StringTable {
    /// Lays out `entries` back to back.
    ///
    /// Every start offset must fit in 16 bits; the first entry that would
    /// start past `u16::MAX` is rejected.
    pub fn build(entries: &[StringEntry]) -> Result<Self> {
        let mut table = Self {
            data: Vec::with_capacity(entries.iter().map(|e| e.bytes.len()).sum()),
            offsets: Vec::with_capacity(entries.len()),
        };

        for entry in entries {
            let offset = table.data.len();
            let offset16 = u16::try_from(offset)
                .map_err(|_| Error::TableOverflow { label: entry.label.clone(), offset })?;
            table.offsets.push(offset16);
            table.data.extend_from_slice(&entry.bytes);
        }

        Ok(table)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn offsets(&self) -> &[u16] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Offset table as little-endian `u16`s.
    pub fn offset_bytes(&self) -> Vec<u8> {
        self.offsets.iter().flat_map(|o| o.to_le_bytes()).collect()
    }
}

/// Encodes a language name into the fixed-width field.
///
/// At most `LANGUAGE_FIELD_LEN - 1` bytes are kept so the field always ends in
/// NUL. Longer names are cut at the last whole UTF-8 character that fits.
pub fn encode_language(name: &str) -> [u8; LANGUAGE_FIELD_LEN] {
    let mut end = name.len().min(LANGUAGE_FIELD_LEN - 1);
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    if end < name.len() {
        info!("Language name '{name}' truncated to '{}'", &name[..end]);
    }

    let mut field = [0; LANGUAGE_FIELD_LEN];
    field[..end].copy_from_slice(&name.as_bytes()[..end]);
    field
}

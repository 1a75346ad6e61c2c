//! Chunk framing: `tag + length + payload + padding`.

use log::debug;

use crate::{Result, RiffError, Tag};

/// Chunk payloads are padded to a multiple of this many bytes.
pub const ALIGNMENT: usize = 4;

/// Size of a chunk header (tag + length).
pub const CHUNK_HEADER_LEN: usize = 8;

/// Round `len` up to the next multiple of [`ALIGNMENT`].
///
/// Returns `None` if the result does not fit a `u32` length field.
pub fn padded_len(len: usize) -> Option<u32> {
    len.checked_next_multiple_of(ALIGNMENT)
        .and_then(|padded| u32::try_from(padded).ok())
}

/// A finalized chunk.
///
/// The payload is stored unpadded; the padded length is computed once at
/// construction, so a `Chunk` that exists always has a valid length field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    tag: Tag,
    payload: Vec<u8>,
    len: u32,
}

impl Chunk {
    /// Frame `payload` under `tag`.
    pub fn new(tag: Tag, payload: impl Into<Vec<u8>>) -> Result<Self> {
        let payload = payload.into();
        let len = padded_len(payload.len())
            .ok_or(RiffError::PayloadTooLarge { tag, len: payload.len() })?;
        debug!("chunk {tag}: {} payload bytes, length field {len}", payload.len());
        Ok(Self { tag, payload, len })
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// The unpadded payload.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// The value stored in the length field (payload plus padding).
    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of zero bytes appended after the payload.
    pub fn padding(&self) -> usize {
        self.len as usize - self.payload.len()
    }

    /// Total bytes this chunk occupies in a container, header included.
    pub fn encoded_len(&self) -> usize {
        CHUNK_HEADER_LEN + self.len as usize
    }

    /// Append the framed chunk to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.reserve(self.encoded_len());
        out.extend_from_slice(&self.tag.to_bytes());
        out.extend_from_slice(&self.len.to_le_bytes());
        out.extend_from_slice(&self.payload);
        out.resize(out.len() + self.padding(), 0);
    }

    /// The framed chunk as a standalone byte vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.write_to(&mut out);
        out
    }
}

/// Frame `payload` under `tag` (free-function form of [`Chunk::new`]).
pub fn write_chunk(tag: Tag, payload: impl Into<Vec<u8>>) -> Result<Chunk> {
    Chunk::new(tag, payload)
}

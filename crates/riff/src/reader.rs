//! Borrowing container walker.
//!
//! Walks a container the way the firmware loader does: check the magic and
//! declared size, then step over `8 + length` bytes per chunk until the
//! declared end is reached.

use crate::{
    Result, RiffError, Tag,
    chunk::{ALIGNMENT, CHUNK_HEADER_LEN},
};

/// A chunk borrowed from a parsed container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkRef<'a> {
    pub tag: Tag,
    /// Byte offset of the chunk header within the container.
    pub offset: usize,
    /// Payload including padding.
    pub data: &'a [u8],
}

impl ChunkRef<'_> {
    /// Value of the chunk's length field.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A validated view over a serialized container.
#[derive(Debug, Clone)]
pub struct ContainerRef<'a> {
    tag: Tag,
    size: u32,
    chunks: Vec<ChunkRef<'a>>,
}

impl<'a> ContainerRef<'a> {
    /// Parses a `RIFF` container.
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        Self::parse_with_tag(data, Tag::RIFF)
    }

    /// Parses a container whose outer tag must equal `expected`.
    ///
    /// Bytes past the declared size are ignored.
    pub fn parse_with_tag(data: &'a [u8], expected: Tag) -> Result<Self> {
        let header = data
            .get(..CHUNK_HEADER_LEN)
            .ok_or(RiffError::Truncated { needed: CHUNK_HEADER_LEN, available: data.len() })?;

        let tag = Tag::from_slice(header).unwrap_or(expected);
        if tag != expected {
            return Err(RiffError::BadMagic { expected, found: tag });
        }

        let size = read_u32(&header[4..]);
        let end = CHUNK_HEADER_LEN + size as usize;
        if end > data.len() {
            return Err(RiffError::Truncated { needed: end, available: data.len() });
        }
        if size as usize % ALIGNMENT != 0 {
            return Err(RiffError::Misaligned { tag, offset: 0, len: size });
        }

        let mut chunks = Vec::new();
        let mut offset = CHUNK_HEADER_LEN;
        while offset < end {
            let chunk_tag = Tag::from_slice(&data[offset..end]).unwrap_or(Tag::new(b"????"));
            if offset + CHUNK_HEADER_LEN > end {
                return Err(RiffError::ChunkOverrun { tag: chunk_tag, offset });
            }

            let len = read_u32(&data[offset + 4..]);
            if len as usize % ALIGNMENT != 0 {
                return Err(RiffError::Misaligned { tag: chunk_tag, offset, len });
            }

            let start = offset + CHUNK_HEADER_LEN;
            let stop = start + len as usize;
            if stop > end {
                return Err(RiffError::ChunkOverrun { tag: chunk_tag, offset });
            }

            chunks.push(ChunkRef { tag: chunk_tag, offset, data: &data[start..stop] });
            offset = stop;
        }

        Ok(Self { tag, size, chunks })
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Value of the outer size field.
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn chunks(&self) -> &[ChunkRef<'a>] {
        &self.chunks
    }

    /// First chunk carrying `tag`.
    pub fn find(&self, tag: Tag) -> Option<&ChunkRef<'a>> {
        self.chunks.iter().find(|c| c.tag == tag)
    }
}

fn read_u32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

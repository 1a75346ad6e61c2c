//! Outer container assembly.

use log::debug;

use crate::{Chunk, Result, RiffError, Tag, chunk::CHUNK_HEADER_LEN};

/// Collects finalized chunks and serializes them under an outer tag.
///
/// The size field is backfilled after every chunk has been written, so it is
/// never computed from a partially built chunk list.
#[derive(Debug, Clone)]
pub struct ContainerWriter {
    tag: Tag,
    chunks: Vec<Chunk>,
}

impl ContainerWriter {
    pub fn new(tag: Tag) -> Self {
        Self { tag, chunks: Vec::new() }
    }

    /// Creates a writer for a `RIFF` container.
    pub fn riff() -> Self {
        Self::new(Tag::RIFF)
    }

    /// Appends a chunk.
    pub fn push(&mut self, chunk: Chunk) -> &mut Self {
        self.chunks.push(chunk);
        self
    }

    /// Appends a chunk (builder form).
    pub fn with_chunk(mut self, chunk: Chunk) -> Self {
        self.chunks.push(chunk);
        self
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Value of the size field: every chunk's header and padded payload.
    pub fn size(&self) -> usize {
        self.chunks.iter().map(Chunk::encoded_len).sum()
    }

    /// Serializes the container.
    pub fn finish(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(CHUNK_HEADER_LEN + self.size());
        out.extend_from_slice(&self.tag.to_bytes());
        out.extend_from_slice(&[0; 4]);

        for chunk in &self.chunks {
            chunk.write_to(&mut out);
        }

        let size = out.len() - CHUNK_HEADER_LEN;
        let size_field =
            u32::try_from(size).map_err(|_| RiffError::ContainerTooLarge { len: out.len() })?;
        out[4..8].copy_from_slice(&size_field.to_le_bytes());

        debug!("container {}: {} chunks, size field {size_field}", self.tag, self.chunks.len());
        Ok(out)
    }
}

/// Serializes `chunks` in order under `tag`.
pub fn build_container(tag: Tag, chunks: impl IntoIterator<Item = Chunk>) -> Result<Vec<u8>> {
    let mut writer = ContainerWriter::new(tag);
    for chunk in chunks {
        writer.push(chunk);
    }
    writer.finish()
}

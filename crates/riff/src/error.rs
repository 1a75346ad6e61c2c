//! Error types for container framing and parsing.

use std::result;

use crate::Tag;

/// Errors raised while building or walking a chunked container.
#[derive(Debug, thiserror::Error)]
pub enum RiffError {
    #[error("chunk '{tag}' payload of {len} bytes does not fit a 32-bit length field")]
    PayloadTooLarge { tag: Tag, len: usize },

    #[error("container of {len} bytes does not fit a 32-bit size field")]
    ContainerTooLarge { len: usize },

    #[error("expected container tag '{expected}', found '{found}'")]
    BadMagic { expected: Tag, found: Tag },

    #[error("container is truncated: need {needed} bytes, have {available}")]
    Truncated { needed: usize, available: usize },

    #[error("chunk '{tag}' at offset {offset} has length {len}, which is not 4-byte aligned")]
    Misaligned { tag: Tag, offset: usize, len: u32 },

    #[error("chunk '{tag}' at offset {offset} runs past the declared container size")]
    ChunkOverrun { tag: Tag, offset: usize },
}

pub type Result<T> = result::Result<T, RiffError>;

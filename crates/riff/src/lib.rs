//! # GM9 RIFF
//!
//! Chunked container framing shared by the GodMode9 font (`.frf`) and
//! translation (`.trf`) formats.
//!
//! A container is an outer `RIFF` tag, a little-endian `u32` size, and a
//! sequence of chunks. Each chunk is a 4-byte ASCII tag, a little-endian `u32`
//! length, the payload, and zero padding up to the next 4-byte boundary. The
//! length field stores the *padded* size; readers are not told how much of it
//! is padding.
//!
//! ```text
//! "RIFF" size:u32LE
//!   tag:4 len:u32LE payload pad->4
//!   ...
//! ```
//!
//! ## Example
//!
//! ```
//! use gm9_riff::{Chunk, Tag, build_container};
//!
//! let meta = Chunk::new(Tag::new(b"META"), vec![1, 2, 3]).unwrap();
//! let data = build_container(Tag::RIFF, [meta]).unwrap();
//! assert_eq!(data.len(), 8 + 8 + 4);
//! ```

mod chunk;
mod container;
mod error;
mod reader;
mod tag;

pub use chunk::{ALIGNMENT, CHUNK_HEADER_LEN, Chunk, padded_len, write_chunk};
pub use container::{ContainerWriter, build_container};
pub use error::{Result, RiffError};
pub use reader::{ChunkRef, ContainerRef};
pub use tag::Tag;

//! Error types for font compilation.

use std::result;

use gm9_riff::RiffError;

/// Errors that can occur while compiling a glyph sheet.
///
/// Every variant except [`Error::Riff`] is a validation failure raised before
/// any output bytes are produced.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("font width too large: {0} (maximum is {max})", max = crate::MAX_WIDTH)]
    WidthTooLarge(u8),

    #[error("font height too large: {0} (maximum is {max})", max = crate::MAX_HEIGHT)]
    HeightTooLarge(u8),

    #[error("font width and height must be at least 1 (got {width}x{height})")]
    ZeroDimension { width: u8, height: u8 },

    #[error("not a valid bitmap file: {0}")]
    NotPbm(&'static str),

    #[error("not a valid bitmap file: invalid dimensions line '{0}'")]
    InvalidDimensions(String),

    #[error("map has more items than possible in image ({map_len} items in map, {tiles} tiles in image)")]
    MapTooLarge { map_len: usize, tiles: usize },

    #[error("invalid codepoint '{0}' in character map")]
    InvalidCodepoint(String),

    #[error("codepoint U+{0:X} in character map does not fit 16 bits")]
    CodepointOutOfRange(u32),

    #[error("font has {0} glyphs, more than a 16-bit count allows")]
    TooManyGlyphs(usize),

    #[error("failed to build container: {0}")]
    Riff(#[from] RiffError),
}

pub type Result<T> = result::Result<T, Error>;

//! Character map files: whitespace-separated hexadecimal codepoints, one per
//! glyph tile in raster order.

use crate::{Error, Result};

/// Parses a character map.
///
/// Tokens may carry an optional `0x` prefix. Codepoints must fit 16 bits.
pub fn parse_char_map(text: &str) -> Result<Vec<u16>> {
    text.split_whitespace().map(parse_codepoint).collect()
}

fn parse_codepoint(token: &str) -> Result<u16> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    let value = u32::from_str_radix(digits, 16)
        .map_err(|_| Error::InvalidCodepoint(token.to_owned()))?;
    u16::try_from(value).map_err(|_| Error::CodepointOutOfRange(value))
}

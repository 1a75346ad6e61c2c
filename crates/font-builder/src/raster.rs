//! 1-bit-per-pixel raw PBM (`P4`) rasters.

use std::str;

use log::warn;

use crate::{Error, Result};

/// Raw PBM magic line.
pub const PBM_MAGIC: &[u8] = b"P4";

/// A parsed 1-bpp raster borrowing its pixel data.
///
/// Rows are stored MSB-first, each padded to a whole number of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Raster<'a> {
    pub width: u32,
    pub height: u32,
    pub data: &'a [u8],
}

impl<'a> Raster<'a> {
    /// Parses a raw PBM file.
    ///
    /// The first line must be `P4`. Comment lines (`#`) and blank lines
    /// before the `width height` line are skipped; pixel data starts right
    /// after that line.
    pub fn parse_pbm(data: &'a [u8]) -> Result<Self> {
        let mut rest = data;

        let magic = next_line(&mut rest).ok_or(Error::NotPbm("file is empty"))?;
        if magic.trim_ascii() != PBM_MAGIC {
            return Err(Error::NotPbm("missing P4 marker"));
        }

        let dims = loop {
            let line = next_line(&mut rest)
                .ok_or(Error::NotPbm("missing dimensions line"))?
                .trim_ascii();
            if !line.is_empty() && !line.starts_with(b"#") {
                break line;
            }
        };
        let (width, height) = parse_dimensions(dims)?;

        let raster = Self { width, height, data: rest };
        if raster.data.len() < raster.expected_len() {
            warn!(
                "Bitmap data is short: {} bytes, expected {}; missing pixels read as blank",
                raster.data.len(),
                raster.expected_len()
            );
        }
        Ok(raster)
    }

    /// Bytes per scanline.
    pub fn stride(&self) -> usize {
        self.width.div_ceil(8) as usize
    }

    /// Bytes of pixel data the header promises.
    pub fn expected_len(&self) -> usize {
        self.stride() * self.height as usize
    }

    /// Reads `width` pixels of scanline `y` starting at pixel column `x`,
    /// left-aligned into one byte.
    pub fn read_row_bits(&self, x: u32, y: u32, width: u8) -> u8 {
        let bit_offset = y as usize * self.stride() * 8 + x as usize;
        extract_bits(self.data, bit_offset, width)
    }
}

/// Reads `width` (at most 8) consecutive bits starting at `bit_offset`,
/// MSB-first, and returns them left-aligned with the low bits cleared.
///
/// The window spans at most two adjacent bytes. Bytes past the end of
/// `buffer` read as zero, so offsets at or beyond the end yield `0`.
pub fn extract_bits(buffer: &[u8], bit_offset: usize, width: u8) -> u8 {
    let width = width.min(8);
    if width == 0 {
        return 0;
    }

    let index = bit_offset / 8;
    let shift = bit_offset % 8;
    let hi = buffer.get(index).copied().unwrap_or(0);
    let lo = index
        .checked_add(1)
        .and_then(|i| buffer.get(i))
        .copied()
        .unwrap_or(0);

    let window = ((u16::from(hi) << 8) | u16::from(lo)) << shift;
    let mask = 0xFFu8 << (8 - width);
    (window >> 8) as u8 & mask
}

fn next_line<'a>(rest: &mut &'a [u8]) -> Option<&'a [u8]> {
    if rest.is_empty() {
        return None;
    }
    match rest.iter().position(|&b| b == b'\n') {
        Some(pos) => {
            let line = &rest[..pos];
            *rest = &rest[pos + 1..];
            Some(line)
        }
        None => {
            let line = *rest;
            *rest = &[];
            Some(line)
        }
    }
}

fn parse_dimensions(line: &[u8]) -> Result<(u32, u32)> {
    let invalid = || Error::InvalidDimensions(String::from_utf8_lossy(line).into_owned());
    let text = str::from_utf8(line).map_err(|_| invalid())?;
    let mut parts = text.split_ascii_whitespace();
    let (Some(w), Some(h), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    let width = w.parse().map_err(|_| invalid())?;
    let height = h.parse().map_err(|_| invalid())?;
    Ok((width, height))
}

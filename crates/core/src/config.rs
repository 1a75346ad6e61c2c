//! Configuration constants for asset builds.

/// FRF font file extension.
pub const FONT_EXTENSION: &str = "frf";

/// TRF translation file extension.
pub const TRANSLATION_EXTENSION: &str = "trf";

/// Extension of the character map looked up next to a glyph sheet.
pub const MAP_EXTENSION: &str = "txt";

/// Default glob for translation sources in batch builds.
pub const TRANSLATION_PATTERN: &str = "*.json";

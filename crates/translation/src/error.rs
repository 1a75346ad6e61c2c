//! Error types for translation compilation.

use std::result;

use gm9_riff::RiffError;

/// Errors that can occur while compiling a translation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse translation JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing language name ({0})")]
    MissingLanguage(&'static str),

    #[error("language name ({0}) must be a string")]
    LanguageNotText(&'static str),

    #[error("missing version number ({0})")]
    MissingVersion(&'static str),

    #[error("version number ({key}) must be an unsigned 32-bit integer, got {value}")]
    InvalidVersion { key: &'static str, value: String },

    #[error("translation version {found} does not match expected version {expected}")]
    VersionMismatch { expected: u32, found: u32 },

    #[error("value of '{0}' must be a string")]
    ValueNotText(String),

    #[error("string '{label}' starts at offset {offset}, beyond the 16-bit string map limit")]
    TableOverflow { label: String, offset: usize },

    #[error("failed to build container: {0}")]
    Riff(#[from] RiffError),
}

pub type Result<T> = result::Result<T, Error>;

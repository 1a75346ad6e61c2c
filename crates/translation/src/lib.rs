//! # GM9 Translation
//!
//! Compile translation JSON into TRF string containers and the firmware's
//! fallback string header.
//!
//! The JSON is an object of `label -> text`. Two reserved keys carry metadata:
//! [`LANGUAGE_KEY`] (display name) and [`VERSION_KEY`] (format version). All
//! other entries are encoded in document order.
//!
//! ## Example
//!
//! ```
//! use gm9_translation::{TranslationOptions, compile_translation};
//!
//! let json = r#"{"GM9_LANGUAGE": "English", "GM9_TRANS_VER": 3, "HELLO": "Hi"}"#;
//! let trf = compile_translation(json, &TranslationOptions::new()).unwrap();
//! assert_eq!(trf.data.len(), 80);
//! ```

use std::fmt::{self, Display, Formatter};

use log::info;

mod dictionary;
mod error;
mod header;
mod string_table;
pub mod trf;

pub use dictionary::{LANGUAGE_KEY, Translation, VERSION_KEY};
pub use error::{Error, Result};
pub use header::{escape_c, render_header};
pub use string_table::{LANGUAGE_FIELD_LEN, StringEntry, StringTable, encode_language};
pub use trf::{build_from_table, build_translation};

/// Translation compile settings.
#[derive(Debug, Clone, Default)]
pub struct TranslationOptions {
    expected_version: Option<u32>,
}

impl TranslationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects dictionaries whose version differs from `version`.
    pub fn with_expected_version(mut self, version: u32) -> Self {
        self.expected_version = Some(version);
        self
    }

    pub fn with_expected_version_opt(mut self, version: Option<u32>) -> Self {
        self.expected_version = version;
        self
    }

    pub fn expected_version(&self) -> Option<u32> {
        self.expected_version
    }

    /// Checks `translation` against these options.
    pub fn validate(&self, translation: &Translation) -> Result<()> {
        match self.expected_version {
            Some(expected) if expected != translation.version() => {
                Err(Error::VersionMismatch { expected, found: translation.version() })
            }
            _ => Ok(()),
        }
    }
}

/// Output of a translation compile.
#[derive(Debug, Clone)]
pub struct CompiledTranslation {
    pub data: Vec<u8>,
    pub stats: TranslationStats,
}

/// Summary of a compiled translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationStats {
    pub language: String,
    pub version: u32,
    pub strings: usize,
    /// Bytes of string data before padding.
    pub data_len: usize,
}

impl Display for TranslationStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (version {}): {} strings, {} bytes of string data",
            self.language, self.version, self.strings, self.data_len
        )
    }
}

/// Compiles a parsed translation.
pub fn compile(translation: &Translation, options: &TranslationOptions) -> Result<CompiledTranslation> {
    options.validate(translation)?;

    let table = StringTable::build(&translation.entries())?;
    let data = build_from_table(translation.version(), translation.language(), &table)?;
    let stats = TranslationStats {
        language: translation.language().to_owned(),
        version: translation.version(),
        strings: table.len(),
        data_len: table.data().len(),
    };
    info!("Compiled translation {stats}");

    Ok(CompiledTranslation { data, stats })
}

/// Compiles translation JSON.
pub fn compile_translation(json: &str, options: &TranslationOptions) -> Result<CompiledTranslation> {
    compile(&Translation::from_json(json)?, options)
}

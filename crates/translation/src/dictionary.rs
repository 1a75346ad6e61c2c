//! Translation dictionaries.

use indexmap::IndexMap;
use serde_json::Value;

use crate::{Error, Result, StringEntry};

/// Reserved key holding the language display name.
pub const LANGUAGE_KEY: &str = "GM9_LANGUAGE";

/// Reserved key holding the translation format version.
pub const VERSION_KEY: &str = "GM9_TRANS_VER";

/// A translation: reserved metadata plus labelled strings in source order.
///
/// String order is significant: the firmware looks strings up by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    language: String,
    version: u32,
    strings: IndexMap<String, String>,
}

impl Translation {
    pub fn new(language: impl Into<String>, version: u32, strings: IndexMap<String, String>) -> Self {
        Self { language: language.into(), version, strings }
    }

    /// Parses a translation JSON object, keeping key order.
    pub fn from_json(text: &str) -> Result<Self> {
        let map: IndexMap<String, Value> = serde_json::from_str(text)?;
        Self::from_map(map)
    }

    /// Splits the reserved keys off an ordered JSON object.
    pub fn from_map(mut map: IndexMap<String, Value>) -> Result<Self> {
        let language = match map.shift_remove(LANGUAGE_KEY) {
            Some(Value::String(name)) => name,
            Some(_) => return Err(Error::LanguageNotText(LANGUAGE_KEY)),
            None => return Err(Error::MissingLanguage(LANGUAGE_KEY)),
        };

        let version = match map.shift_remove(VERSION_KEY) {
            Some(value) => value
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| Error::InvalidVersion { key: VERSION_KEY, value: value.to_string() })?,
            None => return Err(Error::MissingVersion(VERSION_KEY)),
        };

        let strings = map
            .into_iter()
            .map(|(label, value)| match value {
                Value::String(text) => Ok((label, text)),
                _ => Err(Error::ValueNotText(label)),
            })
            .collect::<Result<_>>()?;

        Ok(Self { language, version, strings })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Labelled strings in source order.
    pub fn strings(&self) -> &IndexMap<String, String> {
        &self.strings
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Encodes every string, in order.
    pub fn entries(&self) -> Vec<StringEntry> {
        self.strings.iter().map(|(label, text)| StringEntry::new(label, text)).collect()
    }
}

//! Human-readable container summaries.

use std::fmt::{self, Display, Formatter};

use anyhow::Result;
use font_builder::frf;
use gm9_riff::{ContainerRef, Tag};
use gm9_translation::{LANGUAGE_FIELD_LEN, trf};

/// What the `META` chunk says about a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetKind {
    Font { width: u8, height: u8, glyphs: u16 },
    Translation { version: u32, strings: u32, language: String },
    Unknown,
}

/// Summary of a parsed container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerReport {
    pub size: u32,
    pub chunks: Vec<(Tag, usize)>,
    pub kind: AssetKind,
}

impl ContainerReport {
    /// Walks `data` and decodes its metadata chunk when recognized.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let container = ContainerRef::parse(data)?;
        let chunks = container.chunks().iter().map(|c| (c.tag, c.len())).collect();
        let kind = classify(&container);
        Ok(Self { size: container.size(), chunks, kind })
    }
}

fn classify(container: &ContainerRef<'_>) -> AssetKind {
    let Some(meta) = container.find(frf::META) else {
        return AssetKind::Unknown;
    };

    if container.find(frf::CDAT).is_some() && meta.len() == frf::META_LEN {
        let d = meta.data;
        return AssetKind::Font {
            width: d[0],
            height: d[1],
            glyphs: u16::from_le_bytes([d[2], d[3]]),
        };
    }

    if container.find(trf::SDAT).is_some() && meta.len() == trf::META_LEN {
        let d = meta.data;
        let name = &d[8..8 + LANGUAGE_FIELD_LEN];
        let end = name.iter().position(|&b| b == 0).unwrap_or(name.len());
        return AssetKind::Translation {
            version: u32::from_le_bytes([d[0], d[1], d[2], d[3]]),
            strings: u32::from_le_bytes([d[4], d[5], d[6], d[7]]),
            language: String::from_utf8_lossy(&name[..end]).into_owned(),
        };
    }

    AssetKind::Unknown
}

impl Display for ContainerReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.kind {
            AssetKind::Font { width, height, glyphs } => {
                writeln!(f, "font: {width}x{height}, {glyphs} glyphs")?
            }
            AssetKind::Translation { version, strings, language } => {
                writeln!(f, "translation: {language} (version {version}), {strings} strings")?
            }
            AssetKind::Unknown => writeln!(f, "unknown container")?,
        }
        writeln!(f, "RIFF size {}", self.size)?;
        for (tag, len) in &self.chunks {
            writeln!(f, "  {tag} {len:>8}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use gm9_translation::{TranslationOptions, compile_translation};

    use super::*;

    #[test]
    fn test_translation_report() {
        let json = r#"{"GM9_LANGUAGE": "Français", "GM9_TRANS_VER": 5, "A": "a", "B": "b"}"#;
        let trf = compile_translation(json, &TranslationOptions::new()).unwrap();
        let report = ContainerReport::from_bytes(&trf.data).unwrap();

        assert_eq!(
            report.kind,
            AssetKind::Translation { version: 5, strings: 2, language: "Français".into() }
        );
        assert_eq!(report.size, 72);
        assert_eq!(
            report.to_string(),
            "translation: Français (version 5), 2 strings\n\
             RIFF size 72\n  META       40\n  SDAT        4\n  SMAP        4\n"
        );
    }

    #[test]
    fn test_font_report() {
        let pbm = b"P4\n16 1\n\xF0\x0F";
        let font = font_builder::compile_font(pbm, 8, 1, None).unwrap();
        let report = ContainerReport::from_bytes(&font).unwrap();
        assert_eq!(report.kind, AssetKind::Font { width: 8, height: 1, glyphs: 2 });
        assert_eq!(report.chunks.len(), 3);
    }

    #[test]
    fn test_not_a_container() {
        assert!(ContainerReport::from_bytes(b"P4\n8 1\n").is_err());
    }
}

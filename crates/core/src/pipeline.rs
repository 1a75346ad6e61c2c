//! Build steps: source assets on disk in, containers on disk out.
//!
//! Every step validates its inputs and assembles the complete output in
//! memory before the output path is touched.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use font_builder::{CompiledFont, FontCompiler, parse_char_map};
use gm9_translation::{Translation, TranslationOptions, TranslationStats, compile, render_header};
use log::info;

use crate::{
    config::{MAP_EXTENSION, TRANSLATION_EXTENSION},
    inspect::ContainerReport,
    io::{AssetFile, glob_assets, output_path},
    parallel::{BatchResult, run_parallel},
};

/// Inputs for one font build.
#[derive(Debug, Clone)]
pub struct FontJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: u8,
    pub height: u8,
    /// Explicit character map; when `None`, a `.txt` next to `input` is used if present.
    pub map: Option<PathBuf>,
}

impl FontJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, width: u8, height: u8) -> Self {
        Self { input: input.into(), output: output.into(), width, height, map: None }
    }

    pub fn with_map(mut self, map: impl Into<PathBuf>) -> Self {
        self.map = Some(map.into());
        self
    }

    pub fn with_map_opt(mut self, map: Option<PathBuf>) -> Self {
        self.map = map;
        self
    }
}

/// Character map path looked up next to a glyph sheet.
pub fn default_map_path(input: &Path) -> PathBuf {
    input.with_extension(MAP_EXTENSION)
}

/// Build an FRF font from a PBM glyph sheet.
pub fn build_font(job: &FontJob) -> Result<CompiledFont> {
    let compiler = FontCompiler::new(job.width, job.height);
    compiler.tile_size()?;

    let pbm = AssetFile::new(&job.input).read()?;

    let map_path = job.map.clone().or_else(|| {
        let candidate = default_map_path(&job.input);
        candidate.is_file().then(|| {
            info!("Using {} for font mappings", candidate.display());
            candidate
        })
    });
    let char_map = map_path
        .map(|path| {
            let text = AssetFile::new(&path).read_text()?;
            parse_char_map(&text).with_context(|| format!("Invalid font map {}", path.display()))
        })
        .transpose()?;

    let font = compiler
        .with_char_map_opt(char_map)
        .compile(&pbm)
        .with_context(|| format!("Failed to build font from {}", job.input.display()))?;

    AssetFile::new(&job.output).write(&font.data)?;
    info!("{} created with {} tiles", job.output.display(), font.glyphs);
    Ok(font)
}

/// Load and validate a translation source.
pub fn load_translation(source: &Path) -> Result<Translation> {
    let text = AssetFile::new(source).read_text()?;
    Translation::from_json(&text)
        .with_context(|| format!("Invalid translation {}", source.display()))
}

/// Build a TRF translation from a JSON source.
pub fn build_translation(
    source: &Path,
    dest: &Path,
    options: &TranslationOptions,
) -> Result<TranslationStats> {
    let translation = load_translation(source)?;
    let compiled = compile(&translation, options)
        .with_context(|| format!("Failed to build translation from {}", source.display()))?;

    AssetFile::new(dest).write(&compiled.data)?;
    info!("{} created with {} strings", dest.display(), compiled.stats.strings);
    Ok(compiled.stats)
}

/// Build every translation matching `pattern` in `source_dir` into `out_dir`.
pub fn build_translations(
    source_dir: &Path,
    pattern: &str,
    out_dir: &Path,
    options: &TranslationOptions,
) -> Result<BatchResult> {
    let sources = glob_assets(source_dir, pattern)?;
    info!("Building {} translations from {}", sources.len(), source_dir.display());

    Ok(run_parallel("Translations", &sources, |source| {
        let dest = output_path(source, out_dir, TRANSLATION_EXTENSION);
        build_translation(source, &dest, options).map(|_| ())
    }))
}

/// Write the fallback string header for a translation source.
pub fn build_header(source: &Path, inl: &Path) -> Result<()> {
    let translation = load_translation(source)?;
    AssetFile::new(inl).write(render_header(&translation))?;
    info!("{} created with {} strings", inl.display(), translation.len());
    Ok(())
}

/// Summarize an existing container file.
pub fn inspect(path: &Path) -> Result<ContainerReport> {
    let data = AssetFile::new(path).read()?;
    ContainerReport::from_bytes(&data)
        .with_context(|| format!("Invalid container {}", path.display()))
}

//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use gm9_core::{
    FontJob, TranslationOptions, build_font, build_header, build_translation, build_translations,
    config::TRANSLATION_PATTERN, inspect,
};

#[derive(Parser)]
#[command(name = "gm9-assets", version)]
#[command(about = "Build GodMode9 font (FRF) and translation (TRF) assets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an FRF font from a PBM image
    Font {
        /// PBM image to convert from
        input: PathBuf,
        /// FRF file to write
        output: PathBuf,
        /// Character width (maximum 8)
        width: u8,
        /// Character height (maximum 10)
        height: u8,
        /// Character map (whitespace separated hexadecimal codepoints).
        /// Defaults to a .txt file next to INPUT when present.
        #[arg(short, long, value_name = "MAP")]
        map: Option<PathBuf>,
    },
    /// Create a TRF translation from a translation JSON
    Translation {
        /// JSON to convert from
        source: PathBuf,
        /// TRF file to write
        dest: PathBuf,
        /// Reject translations whose version differs
        #[arg(long, value_name = "VERSION")]
        expect_version: Option<u32>,
    },
    /// Create TRF translations for every JSON in a directory
    Translations {
        /// Directory holding translation JSON files
        source_dir: PathBuf,
        /// Directory to write TRF files into
        #[arg(short, long)]
        out_dir: PathBuf,
        /// Glob selecting sources inside SOURCE_DIR
        #[arg(long, default_value = TRANSLATION_PATTERN)]
        pattern: String,
        /// Reject translations whose version differs
        #[arg(long, value_name = "VERSION")]
        expect_version: Option<u32>,
    },
    /// Create the fallback string header (language.inl) from a translation JSON
    Header {
        /// JSON to convert from
        source: PathBuf,
        /// Header file to write
        inl: PathBuf,
    },
    /// Show the chunks of an FRF or TRF file
    Inspect {
        /// Container file to read
        file: PathBuf,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Font { input, output, width, height, map } => {
                let job = FontJob::new(input, output, width, height).with_map_opt(map);
                let font = build_font(&job)?;
                info!("{}", font.stats);
            }
            Commands::Translation { source, dest, expect_version } => {
                let options = TranslationOptions::new().with_expected_version_opt(expect_version);
                build_translation(&source, &dest, &options)?;
            }
            Commands::Translations { source_dir, out_dir, pattern, expect_version } => {
                let options = TranslationOptions::new().with_expected_version_opt(expect_version);
                build_translations(&source_dir, &pattern, &out_dir, &options)?
                    .ok_or_bail("Translations")?;
            }
            Commands::Header { source, inl } => {
                build_header(&source, &inl)?;
            }
            Commands::Inspect { file } => {
                print!("{}", inspect(&file)?);
            }
        }
        Ok(())
    }
}

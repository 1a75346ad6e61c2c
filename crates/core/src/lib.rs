//! GM9 Core - build pipeline for GodMode9 font and translation assets.

pub mod config;
pub mod inspect;
pub mod io;
pub mod parallel;
pub mod pipeline;

pub use font_builder::{CompiledFont, FontCompiler};
pub use gm9_translation::{TranslationOptions, TranslationStats};

pub use inspect::{AssetKind, ContainerReport};
pub use parallel::BatchResult;
pub use pipeline::{
    FontJob, build_font, build_header, build_translation, build_translations, default_map_path,
    inspect, load_translation,
};

//! Shared asset I/O utilities.

use std::{
    fs::{create_dir_all, read, read_to_string, write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::glob;

/// An asset file handle for I/O operations.
#[derive(Debug, Clone)]
pub struct AssetFile {
    path: PathBuf,
}

impl AssetFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read raw bytes from the file.
    pub fn read(&self) -> Result<Vec<u8>> {
        read(&self.path).with_context(|| format!("Failed to read {}", self.path.display()))
    }

    /// Read UTF-8 text from the file.
    pub fn read_text(&self) -> Result<String> {
        read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))
    }

    /// Write data to the file, creating its parent directory first.
    ///
    /// Callers pass fully built output; nothing is written on earlier failure.
    pub fn write(&self, data: impl AsRef<[u8]>) -> Result<()> {
        self.ensure_parent_dir()?;
        write(&self.path, data)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }

    /// Create parent directory if it doesn't exist.
    pub fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        Ok(())
    }
}

impl AsRef<Path> for AssetFile {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

/// Find files matching a glob pattern in a directory, sorted by path.
pub fn glob_assets(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let pattern = dir.join(pattern);
    let pattern_str = pattern.to_str().context("Invalid pattern path")?;
    let mut paths: Vec<PathBuf> = glob(pattern_str)
        .with_context(|| format!("Failed to glob pattern: {pattern_str}"))?
        .filter_map(Result::ok)
        .collect();
    paths.sort();
    Ok(paths)
}

/// Replace `path`'s directory with `dir` and its extension with `extension`.
pub fn output_path(path: &Path, dir: &Path, extension: &str) -> PathBuf {
    let mut name = path.file_stem().unwrap_or(path.as_os_str()).to_os_string();
    name.push(".");
    name.push(extension);
    dir.join(name)
}

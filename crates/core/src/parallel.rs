//! Parallel file processing utilities.

use std::path::Path;

use anyhow::{Context, Result, bail};
use log::{error, info};
use rayon::prelude::*;

/// Result of a parallel batch operation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchResult {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchResult {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }

    pub fn ok_or_bail(&self, operation: &str) -> Result<()> {
        if self.failed > 0 {
            bail!("{operation} failed: {} succeeded, {} failed", self.succeeded, self.failed);
        }
        Ok(())
    }
}

/// Process items in parallel with consistent error reporting.
///
/// Each item is independent; a failure is logged and counted without
/// stopping the others.
pub fn process_parallel_iter<T, R, F>(
    label: &str,
    items: impl IntoIterator<Item = T>,
    op: F,
) -> BatchResult
where
    T: Send,
    R: Send,
    F: Fn(T) -> Result<R> + Sync,
{
    let items: Vec<T> = items.into_iter().collect();
    let results: Vec<_> = items.into_par_iter().map(&op).collect();

    let mut result = BatchResult::default();
    for r in &results {
        if let Err(e) = r {
            error!("{e:#}");
            result.failed += 1;
        } else {
            result.succeeded += 1;
        }
    }

    info!("{label}: {} succeeded, {} failed", result.succeeded, result.failed);
    result
}

/// Run an operation on multiple files in parallel with consistent error reporting.
pub fn run_parallel<T, F>(label: &str, items: &[T], op: F) -> BatchResult
where
    T: AsRef<Path> + Sync,
    F: Fn(&Path) -> Result<()> + Sync,
{
    process_parallel_iter(label, items.iter(), |item| {
        let path = item.as_ref();
        op(path).with_context(|| format!("Failed to process {}", path.display()))
    })
}

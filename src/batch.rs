//! Classify whole directories against an expected label and report accuracy.
//!
//! A failure on one file is recorded against that file and never stops the rest.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::score::Label;
use crate::Classification;

#[derive(Debug)]
pub struct ItemReport {
    pub path: PathBuf,
    pub outcome: Result<Classification>,
}

impl ItemReport {
    /// True when the item classified successfully with the expected label.
    pub fn matches(&self, expected: Label) -> bool {
        matches!(&self.outcome, Ok(c) if c.label == expected)
    }
}

#[derive(Debug)]
pub struct DirectoryReport {
    pub dir: PathBuf,
    pub expected: Label,
    /// In file name order.
    pub items: Vec<ItemReport>,
}

impl DirectoryReport {
    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn correct(&self) -> usize {
        self.items.iter().filter(|i| i.matches(self.expected)).count()
    }

    pub fn failed(&self) -> usize {
        self.items.iter().filter(|i| i.outcome.is_err()).count()
    }

    /// `correct / total`, or `None` for an empty directory.
    pub fn accuracy(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(self.correct() as f64 / total as f64),
        }
    }
}

/// Everything directly inside `dir` that is not a directory, sorted by path.
///
/// Entries that cannot be inspected are still listed, so they fail later as
/// single items instead of taking the whole directory down.
///
/// # Errors
///
/// [`Error::ReadDir`] if the directory itself cannot be listed.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|source| Error::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "unreadable entry");
                continue;
            }
        };

        let path = entry.path();

        // follows symlinks; anything that cannot be stat'ed counts as a file
        if path.is_dir() {
            continue;
        }

        files.push(path);
    }

    files.sort();

    Ok(files)
}

/// Size the global worker pool used by [`classify_all`].
///
/// # Errors
///
/// [`Error::ThreadPool`] if the pool was already set up, including implicitly by
/// an earlier batch.
pub fn configure_threads(num_threads: usize) -> Result<()> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    Ok(())
}

/// Classify every path in parallel, keeping input order.
pub fn classify_all(paths: Vec<PathBuf>) -> Vec<ItemReport> {
    paths
        .into_par_iter()
        .map(|path| {
            let outcome = crate::classify_path(&path);

            if let Err(ref e) = outcome {
                tracing::warn!(path = %path.display(), error = %e, "failed");
            }

            ItemReport { path, outcome }
        })
        .collect()
}

/// Classify every file in `dir`, expecting all of them to be `expected`.
///
/// # Errors
///
/// Only when the directory itself cannot be listed. Per-file failures end up in
/// the report.
pub fn run_directory(dir: &Path, expected: Label) -> Result<DirectoryReport> {
    let files = list_files(dir)?;

    tracing::debug!(dir = %dir.display(), files = files.len(), %expected, "batch");

    Ok(DirectoryReport {
        dir: dir.to_path_buf(),
        expected,
        items: classify_all(files),
    })
}

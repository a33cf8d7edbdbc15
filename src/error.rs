use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a single classification.
///
/// Images without any detectable edges are not errors, they simply score `0`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("usage: {0}")]
    Usage(String),

    #[error("no such file: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to configure thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("cannot measure color dominance of an empty buffer")]
    EmptyInput,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

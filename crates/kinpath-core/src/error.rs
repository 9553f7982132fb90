//! Error types for dataset loading.

use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DatasetError>;

/// Hard failures while loading a family dataset.
///
/// Individual bad entries are not errors: they are logged and skipped.
/// These variants cover the cases where there is nothing to salvage.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dataset root must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

impl DatasetError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

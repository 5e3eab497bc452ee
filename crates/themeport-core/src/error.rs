use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, converting, or writing theme documents.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("read {} failed: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write {} failed: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid json in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected structure in {}: {message}", path.display())]
    Structure { path: PathBuf, message: String },
}

impl ThemeError {
    pub fn structure(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Structure {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T, E = ThemeError> = std::result::Result<T, E>;

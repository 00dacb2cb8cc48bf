use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BuildError>;

/// Failures that abort an index build. Query-time misses are never errors.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("document not found: {document}")]
    DocumentNotFound {
        document: String,
        #[source]
        source: io::Error,
    },

    #[error("noise word list unavailable: {}", path.display())]
    NoiseListUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("document list unavailable: {}", path.display())]
    DocumentListUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("index already built")]
    AlreadyBuilt,
}

impl BuildError {
    pub fn document_not_found<S: Into<String>>(document: S, source: io::Error) -> Self {
        BuildError::DocumentNotFound { document: document.into(), source }
    }
}

//! Error types for writing generated sources

use std::path::{Path, PathBuf};

/// Errors raised while writing generated files
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// File could not be written
    #[error("failed to write file {path}: {source}")]
    Io {
        /// File concerned
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Output stream could not be written
    #[error("failed to write {file} to output stream: {source}")]
    Stream {
        /// Generated file name
        file: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl EmitError {
    /// Create I/O error for `path`
    pub fn io_error(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

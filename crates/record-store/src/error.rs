use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading sale records from storage.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The storage file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The storage file is not well-formed CSV (bad header, unequal rows, bad UTF-8).
    #[error("Malformed record data: {0}")]
    Malformed(#[from] csv::Error),
}

/// Result type for record loading operations.
pub type Result<T> = std::result::Result<T, LoadError>;

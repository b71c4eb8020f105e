//! Library error type.

use std::path::PathBuf;

/// Errors from loading catalog, series and markdown files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

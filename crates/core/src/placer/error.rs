//! Error types for the placer module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while preparing the destination.
#[derive(Debug, Error)]
pub enum PlacerError {
    /// Failed to create destination directory.
    #[error("Failed to create directory: {path}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Destination exists but is not a directory.
    #[error("Destination is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

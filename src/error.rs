//! Error types for modfiles
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for modfiles operations
pub type ModFilesResult<T> = Result<T, ModFilesError>;

/// Main error type for modfiles operations
#[derive(Error, Debug)]
pub enum ModFilesError {
    /// Configuration file could not be parsed
    #[error("invalid configuration in {}: {message}", .file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// Directory walk failed
    #[error("failed to walk {}: {message}", .path.display())]
    Walk { path: PathBuf, message: String },

    /// Root directory given to `generate` does not exist
    #[error("directory not found: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },

    /// Build file could not be read or written
    #[error("failed to update build file {}: {source}", .path.display())]
    BuildFile {
        path: PathBuf,
        #[source]
        source: crate::domain::ports::FsError,
    },

    /// `.bazelignore` could not be loaded
    #[error(transparent)]
    BazelIgnore(#[from] crate::domain::value_objects::BazelIgnoreError),

    /// Archive packaging failed
    #[error(transparent)]
    Archive(#[from] crate::infrastructure::archive::ArchiveError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

//! Module archive packaging
//!
//! Builds the `<module>@<version>/...` zip a Go module proxy serves. The
//! version is read from Bazel's volatile status file so stamped builds get
//! a real version and unstamped builds a fixed placeholder.

mod status_file;
mod strip_prefix;
mod writer;

use std::path::PathBuf;

use thiserror::Error;

pub use status_file::{
    module_version, parse_status, parse_status_file, StatusMap, UNVERSIONED, VOLATILE_VERSION_KEY,
};
pub use strip_prefix::strip_path_prefix;
pub use writer::{write_module_archive, ArchiveEntry, ArchiveRequest};

/// Errors raised while packaging a module archive.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("failed to read status file {}: {source}", .path.display())]
    StatusFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write archive {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to add {entry} to archive: {source}")]
    Zip {
        entry: String,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("archive entry {entry} escapes the module directory")]
    EntryEscapes { entry: String },

    #[error("{} maps to an empty archive path", .source_path.display())]
    EmptyEntry { source_path: PathBuf },
}

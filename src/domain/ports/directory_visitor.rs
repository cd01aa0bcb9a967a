//! DirectoryVisitor port - the traversal driver's only callback
//!
//! The walker owns directory discovery and build-file directive lookup; the
//! consumer only sees one finished visit record at a time.
//!
//! # Ordering
//!
//! Drivers must call `on_directory_visited` at most once per directory, and
//! only after every descendant directory has been visited (post-order).

use std::path::PathBuf;

use crate::domain::value_objects::DirPath;
use crate::error::ModFilesResult;

/// Directory-local configuration read before the directory is visited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Build file found in the directory, if any
    pub build_file: Option<PathBuf>,
    /// `module_files_exclude` patterns, in file order
    pub exclude_directives: Vec<String>,
}

/// Everything the driver knows about one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryVisit {
    /// Absolute (or walk-root-joined) directory path
    pub path: PathBuf,
    /// Path relative to the walk root
    pub rel: DirPath,
    /// Regular files and symlinks to non-directories, sorted
    pub files: Vec<String>,
    /// Immediate subdirectory names that were walked, sorted
    pub subdirs: Vec<String>,
    pub config: DirectoryConfig,
}

/// Receives post-order directory visits.
pub trait DirectoryVisitor {
    fn on_directory_visited(&mut self, visit: &DirectoryVisit) -> ModFilesResult<()>;
}

impl<F> DirectoryVisitor for F
where
    F: FnMut(&DirectoryVisit) -> ModFilesResult<()>,
{
    fn on_directory_visited(&mut self, visit: &DirectoryVisit) -> ModFilesResult<()> {
        self(visit)
    }
}

//! Post-order directory walker
//!
//! Drives a [`DirectoryVisitor`] over a source tree. `walkdir` yields entries
//! in pre-order so that skipped directories are pruned before they are
//! entered; the walker keeps a stack of open directories and reports each one
//! once the walk has moved past its last descendant.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::domain::ports::{DirectoryVisit, DirectoryVisitor, FileSystem};
use crate::domain::value_objects::{BazelIgnore, DirPath};
use crate::error::{ModFilesError, ModFilesResult};
use crate::infrastructure::build_file::{read_directory_config, DEFAULT_BUILD_FILE_NAMES};

/// Walk settings.
#[derive(Debug)]
pub struct WalkOptions {
    /// Build file names, in lookup order
    pub build_file_names: Vec<String>,
    /// Directories to leave out entirely
    pub bazel_ignore: BazelIgnore,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            build_file_names: DEFAULT_BUILD_FILE_NAMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            bazel_ignore: BazelIgnore::empty(),
        }
    }
}

/// A directory whose descendants are still being walked.
#[derive(Debug)]
struct OpenDir {
    path: PathBuf,
    depth: usize,
    files: Vec<String>,
    subdirs: Vec<String>,
}

impl OpenDir {
    fn new(path: &Path, depth: usize) -> Self {
        Self {
            path: path.to_path_buf(),
            depth,
            files: Vec::new(),
            subdirs: Vec::new(),
        }
    }
}

/// Visit every directory under `root` (root included) in post-order.
///
/// Siblings come in byte-wise name order. Hidden directories, Bazel
/// convenience symlinks (`bazel-*`) and `.bazelignore`d paths are skipped
/// together with everything below them. Symlinks are never followed; a
/// symlink is listed as a file unless it points at a directory.
pub fn walk_post_order<V>(
    root: &Path,
    fs: &dyn FileSystem,
    options: &WalkOptions,
    visitor: &mut V,
) -> ModFilesResult<()>
where
    V: DirectoryVisitor + ?Sized,
{
    if !root.is_dir() {
        return Err(ModFilesError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut open: Vec<OpenDir> = Vec::new();
    let mut visited = 0usize;

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| !is_skipped(entry, root, &options.bazel_ignore));

    for entry in walker {
        let entry = entry.map_err(|e| ModFilesError::Walk {
            path: e.path().unwrap_or(root).to_path_buf(),
            message: e.to_string(),
        })?;
        let depth = entry.depth();

        while open.last().is_some_and(|dir| dir.depth >= depth) {
            if let Some(done) = open.pop() {
                finish(done, root, fs, options, visitor)?;
                visited += 1;
            }
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().is_dir() {
            if let Some(parent) = open.last_mut() {
                parent.subdirs.push(name);
            }
            open.push(OpenDir::new(entry.path(), depth));
            continue;
        }

        if !is_listed_file(&entry) {
            tracing::trace!(path = %entry.path().display(), "skipping non-file entry");
            continue;
        }
        if let Some(parent) = open.last_mut() {
            parent.files.push(name);
        }
    }

    while let Some(done) = open.pop() {
        finish(done, root, fs, options, visitor)?;
        visited += 1;
    }

    tracing::info!(root = %root.display(), directories = visited, "walk complete");
    Ok(())
}

/// Read the directory's build file and hand the finished listing over.
fn finish<V>(
    dir: OpenDir,
    root: &Path,
    fs: &dyn FileSystem,
    options: &WalkOptions,
    visitor: &mut V,
) -> ModFilesResult<()>
where
    V: DirectoryVisitor + ?Sized,
{
    let rel = DirPath::from_relative(dir.path.strip_prefix(root).unwrap_or(&dir.path));
    let config = read_directory_config(fs, &dir.path, &dir.files, &options.build_file_names)
        .map_err(|e| ModFilesError::Walk {
            path: dir.path.clone(),
            message: e.to_string(),
        })?;

    let visit = DirectoryVisit {
        path: dir.path,
        rel,
        files: dir.files,
        subdirs: dir.subdirs,
        config,
    };
    tracing::debug!(dir = %visit.rel, files = visit.files.len(), "visiting directory");
    visitor.on_directory_visited(&visit)
}

/// Regular files, and symlinks that do not resolve to a directory.
fn is_listed_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    if !file_type.is_symlink() {
        return false;
    }
    // A dangling link is still listed; only links to directories are not.
    !std::fs::metadata(entry.path()).is_ok_and(|meta| meta.is_dir())
}

fn is_skipped(entry: &DirEntry, root: &Path, bazel_ignore: &BazelIgnore) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }

    let name = entry.file_name().to_string_lossy();
    if name.starts_with('.') || name.starts_with("bazel-") {
        tracing::trace!(path = %entry.path().display(), "skipping directory");
        return true;
    }

    let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
    if bazel_ignore.is_ignored(rel) {
        tracing::debug!(path = %rel.display(), "skipping .bazelignore'd directory");
        return true;
    }
    false
}

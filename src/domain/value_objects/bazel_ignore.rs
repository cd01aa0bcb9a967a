//! `.bazelignore` value object
//!
//! Directories listed in the repository's `.bazelignore` are invisible to
//! Bazel, so the walker never descends into them. Each line names a
//! directory relative to the repository root; matching is delegated to the
//! `ignore` crate's gitignore matcher with every entry anchored at the root.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up at the repository root
pub const BAZELIGNORE_FILE: &str = ".bazelignore";

/// Maximum file size for `.bazelignore` (64KB)
const MAX_FILE_SIZE: u64 = 65536;

/// Directories excluded from the walk by `.bazelignore`.
#[derive(Debug)]
pub struct BazelIgnore {
    matcher: Gitignore,
    entry_count: usize,
}

impl Default for BazelIgnore {
    fn default() -> Self {
        Self::empty()
    }
}

impl BazelIgnore {
    /// A matcher that ignores nothing.
    pub fn empty() -> Self {
        Self {
            matcher: Gitignore::empty(),
            entry_count: 0,
        }
    }

    /// Load `<root>/.bazelignore`.
    ///
    /// Returns `Ok(empty)` if the file doesn't exist.
    pub fn load(root: &Path) -> Result<Self, BazelIgnoreError> {
        let ignore_path = root.join(BAZELIGNORE_FILE);

        if !ignore_path.exists() {
            return Ok(Self::empty());
        }

        let metadata = fs::metadata(&ignore_path)?;
        if metadata.len() > MAX_FILE_SIZE {
            return Err(BazelIgnoreError::FileTooLarge {
                path: ignore_path,
                size: metadata.len(),
                limit: MAX_FILE_SIZE,
            });
        }

        let content = fs::read_to_string(&ignore_path)?;
        Self::from_content(root, &ignore_path, &content)
    }

    /// Parse entries from string content.
    pub fn from_content(
        root: &Path,
        source_path: &Path,
        content: &str,
    ) -> Result<Self, BazelIgnoreError> {
        let mut builder = GitignoreBuilder::new(root);
        let mut entry_count = 0;

        for (line_num, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let entry = trimmed.trim_start_matches("./").trim_matches('/');
            if entry.is_empty() {
                continue;
            }

            // Anchor at the root: `.bazelignore` entries are never basename matches.
            let anchored = format!("/{}", entry);
            builder
                .add_line(Some(source_path.to_path_buf()), &anchored)
                .map_err(|e| BazelIgnoreError::InvalidEntry {
                    path: source_path.to_path_buf(),
                    line: line_num + 1,
                    entry: trimmed.to_string(),
                    message: e.to_string(),
                })?;
            entry_count += 1;
        }

        let matcher = builder
            .build()
            .map_err(|e| BazelIgnoreError::BuildFailed(e.to_string()))?;

        Ok(Self {
            matcher,
            entry_count,
        })
    }

    /// Whether a directory (relative to the root) is ignored, either directly
    /// or because one of its parents is.
    pub fn is_ignored(&self, rel_dir: &Path) -> bool {
        if self.entry_count == 0 || rel_dir.as_os_str().is_empty() {
            return false;
        }
        self.matcher
            .matched_path_or_any_parents(rel_dir, true)
            .is_ignore()
    }

    pub fn len(&self) -> usize {
        self.entry_count
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }
}

/// Errors that can occur when loading `.bazelignore`.
#[derive(Debug, Error)]
pub enum BazelIgnoreError {
    #[error(".bazelignore exceeds {}KB limit ({size} bytes): {}", .limit / 1024, .path.display())]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("invalid .bazelignore entry at {}:{line}: '{entry}' - {message}", .path.display())]
    InvalidEntry {
        path: PathBuf,
        line: usize,
        entry: String,
        message: String,
    },

    #[error("failed to build .bazelignore matcher: {0}")]
    BuildFailed(String),

    #[error("IO error reading .bazelignore: {0}")]
    Io(#[from] std::io::Error),
}

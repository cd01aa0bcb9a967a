//! Zip writer for module archives

use std::fs::File;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use super::strip_prefix::strip_path_prefix;
use super::ArchiveError;
use crate::infrastructure::fs::persist;

/// Manifest entry name inside the module directory
const GO_MOD_ENTRY: &str = "go.mod";

/// Inputs for one module archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveRequest {
    /// Zip file to create
    pub output: PathBuf,
    /// Module identifier, e.g. `example.com/test`
    pub module_path: String,
    pub version: String,
    /// Manifest stored as `<module>@<version>/go.mod`
    pub go_mod: PathBuf,
    /// Sources, stored in this order after the manifest
    pub srcs: Vec<PathBuf>,
    /// Leading text removed from each source path before it becomes an
    /// entry name
    pub strip_prefix: String,
}

/// One file in the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub source: PathBuf,
}

impl ArchiveRequest {
    /// Top-level directory of every entry: `<module>@<version>`.
    pub fn module_dir(&self) -> String {
        format!("{}@{}", self.module_path, self.version)
    }

    /// Entries in archive order: the manifest, then the sources.
    pub fn entries(&self) -> Result<Vec<ArchiveEntry>, ArchiveError> {
        let module_dir = self.module_dir();
        let mut entries = Vec::with_capacity(self.srcs.len() + 1);
        entries.push(ArchiveEntry {
            name: format!("{}/{}", module_dir, GO_MOD_ENTRY),
            source: self.go_mod.clone(),
        });

        for src in &self.srcs {
            let src_str = src.to_string_lossy();
            let rel = strip_path_prefix(&src_str, &self.strip_prefix);
            let rel = clean_relative(rel).ok_or_else(|| ArchiveError::EntryEscapes {
                entry: rel.to_string(),
            })?;
            if rel.is_empty() {
                return Err(ArchiveError::EmptyEntry {
                    source_path: src.clone(),
                });
            }
            entries.push(ArchiveEntry {
                name: format!("{}/{}", module_dir, rel),
                source: src.clone(),
            });
        }
        Ok(entries)
    }
}

/// Lexically normalize a relative entry path to `/` separators.
///
/// Returns `None` when `..` climbs above the starting point.
fn clean_relative(rel: &str) -> Option<String> {
    let mut segments: Vec<&str> = Vec::new();
    for segment in rel.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            other => segments.push(other),
        }
    }
    Some(segments.join("/"))
}

/// Write the archive described by `request`.
///
/// Entries are deflated and carry the zip epoch as their timestamp, so the
/// same inputs always give the same bytes. The zip is assembled in a temp
/// file next to `output` and only renamed into place once complete.
pub fn write_module_archive(request: &ArchiveRequest) -> Result<Vec<ArchiveEntry>, ArchiveError> {
    let entries = request.entries()?;
    let output = request.output.as_path();
    let write_err = |source: std::io::Error| ArchiveError::WriteOutput {
        path: output.to_path_buf(),
        source,
    };

    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(write_err)?;
    let tmp = NamedTempFile::new_in(parent).map_err(write_err)?;

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644);

    let mut zip = ZipWriter::new(tmp);
    for entry in &entries {
        let mut file = File::open(&entry.source).map_err(|source| ArchiveError::ReadInput {
            path: entry.source.clone(),
            source,
        })?;
        zip.start_file(entry.name.as_str(), options)
            .map_err(|source| ArchiveError::Zip {
                entry: entry.name.clone(),
                source,
            })?;
        std::io::copy(&mut file, &mut zip).map_err(|source| ArchiveError::ReadInput {
            path: entry.source.clone(),
            source,
        })?;
        tracing::debug!(entry = %entry.name, source = %entry.source.display(), "added");
    }

    let tmp = zip.finish().map_err(|source| ArchiveError::Zip {
        entry: request.module_dir(),
        source,
    })?;
    persist(tmp, output).map_err(write_err)?;

    tracing::info!(
        output = %output.display(),
        module = %request.module_dir(),
        entries = entries.len(),
        "wrote module archive"
    );
    Ok(entries)
}

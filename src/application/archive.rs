//! Archive Use Case
//!
//! Packages a module directory as a proxy-ready zip, versioned from the
//! volatile status file.

use std::path::PathBuf;

use crate::error::ModFilesResult;
use crate::infrastructure::archive::{
    module_version, parse_status_file, write_module_archive, ArchiveEntry, ArchiveRequest,
};

/// Options for the archive command
#[derive(Debug, Clone, Default)]
pub struct ArchiveOptions {
    pub output: PathBuf,
    pub module_path: String,
    pub go_mod: PathBuf,
    pub srcs: Vec<PathBuf>,
    pub strip_prefix: String,
    pub volatile_status_file: PathBuf,
}

/// Result of an archive run
#[derive(Debug, Clone)]
pub struct ArchiveResult {
    pub output: PathBuf,
    pub version: String,
    /// `<module>@<version>`
    pub module_dir: String,
    pub entries: Vec<ArchiveEntry>,
}

/// Read the version, then write the archive.
pub fn package_module(options: &ArchiveOptions) -> ModFilesResult<ArchiveResult> {
    let status = parse_status_file(&options.volatile_status_file)?;
    let version = module_version(&status).to_string();
    tracing::debug!(version = %version, "resolved module version");

    let request = ArchiveRequest {
        output: options.output.clone(),
        module_path: options.module_path.clone(),
        version: version.clone(),
        go_mod: options.go_mod.clone(),
        srcs: options.srcs.clone(),
        strip_prefix: options.strip_prefix.clone(),
    };
    let entries = write_module_archive(&request)?;

    Ok(ArchiveResult {
        output: request.output.clone(),
        module_dir: request.module_dir(),
        version,
        entries,
    })
}

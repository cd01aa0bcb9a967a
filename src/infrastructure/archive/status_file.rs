//! Bazel workspace status files
//!
//! `bazel build --stamp` writes `KEY value` lines to `volatile-status.txt`.

use std::collections::BTreeMap;
use std::path::Path;

use super::ArchiveError;

/// Status key carrying the module version
pub const VOLATILE_VERSION_KEY: &str = "VOLATILE_VERSION";

/// Version used when the status file has no `VOLATILE_VERSION`
pub const UNVERSIONED: &str = "__unversioned__";

/// Parsed status entries.
pub type StatusMap = BTreeMap<String, String>;

/// Read and parse a status file.
pub fn parse_status_file(path: &Path) -> Result<StatusMap, ArchiveError> {
    let content = std::fs::read_to_string(path).map_err(|source| ArchiveError::StatusFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_status(&content))
}

/// Parse status content.
///
/// Lines are trimmed and split at the first space; blank lines and lines
/// without a space are skipped. A repeated key keeps its last value.
pub fn parse_status(content: &str) -> StatusMap {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| line.split_once(' '))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}

/// The module version recorded in `status`.
pub fn module_version(status: &StatusMap) -> &str {
    status
        .get(VOLATILE_VERSION_KEY)
        .map(String::as_str)
        .unwrap_or(UNVERSIONED)
}

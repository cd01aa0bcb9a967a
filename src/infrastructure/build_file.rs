//! Build file adapter
//!
//! Reads `# gazelle:` directives out of a directory's build file and splices
//! generated rules into it. Generated content lives between
//! `# modfiles:begin` and `# modfiles:end`; the lines outside that block
//! belong to the user and are kept as written. A merged file keeps its CRLF
//! or LF line endings, loses leading and trailing blank lines, and ends in a
//! single newline.

use std::path::{Path, PathBuf};

use crate::domain::ports::{DirectoryConfig, FileSystem, FsResult};

/// Build file names, in lookup order
pub const DEFAULT_BUILD_FILE_NAMES: &[&str] = &["BUILD.bazel", "BUILD"];

/// Directive adding an exclusion pattern for the directory's own files
pub const EXCLUDE_DIRECTIVE: &str = "module_files_exclude";

/// First line of the generated block
pub const BLOCK_BEGIN: &str = "# modfiles:begin";

/// Last line of the generated block
pub const BLOCK_END: &str = "# modfiles:end";

/// A `# gazelle:<key> <value>` comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub key: String,
    pub value: String,
}

/// Every gazelle directive in `content`, in file order.
pub fn parse_directives(content: &str) -> Vec<Directive> {
    content
        .lines()
        .filter_map(|line| {
            let rest = line.trim().strip_prefix('#')?.trim_start();
            let rest = rest.strip_prefix("gazelle:")?;
            let (key, value) = match rest.split_once(char::is_whitespace) {
                Some((key, value)) => (key, value.trim()),
                None => (rest.trim(), ""),
            };
            if key.is_empty() {
                return None;
            }
            Some(Directive {
                key: key.to_string(),
                value: value.to_string(),
            })
        })
        .collect()
}

/// `module_files_exclude` patterns in `content`; empty values are skipped.
pub fn exclude_directives(content: &str) -> Vec<String> {
    parse_directives(content)
        .into_iter()
        .filter(|d| d.key == EXCLUDE_DIRECTIVE && !d.value.is_empty())
        .map(|d| d.value)
        .collect()
}

/// The first of `names` present in `files`.
pub fn find_build_file<'a, N, F>(names: &'a [N], files: &[F]) -> Option<&'a str>
where
    N: AsRef<str>,
    F: AsRef<str>,
{
    names
        .iter()
        .map(AsRef::as_ref)
        .find(|name| files.iter().any(|f| f.as_ref() == *name))
}

/// Build the directory-local configuration for `dir`.
pub fn read_directory_config<N: AsRef<str>>(
    fs: &dyn FileSystem,
    dir: &Path,
    files: &[String],
    build_file_names: &[N],
) -> FsResult<DirectoryConfig> {
    let Some(name) = find_build_file(build_file_names, files) else {
        return Ok(DirectoryConfig::default());
    };

    let path = dir.join(name);
    let content = fs.read(&path)?;
    Ok(DirectoryConfig {
        exclude_directives: exclude_directives(&content),
        build_file: Some(path),
    })
}

/// Path a directory's generated rules are written to.
pub fn build_file_path<N: AsRef<str>>(
    dir: &Path,
    config: &DirectoryConfig,
    build_file_names: &[N],
) -> PathBuf {
    match &config.build_file {
        Some(path) => path.clone(),
        None => dir.join(
            build_file_names
                .first()
                .map(AsRef::as_ref)
                .unwrap_or(DEFAULT_BUILD_FILE_NAMES[0]),
        ),
    }
}

/// Replace, insert or drop the generated block in `existing`.
///
/// With `generated = None` an existing block is removed and a file without
/// one comes back unchanged. A new block goes after the leading comments and
/// `load` statements so that any `load` it carries still precedes the first
/// rule. A begin marker without an end marker owns the rest of the file.
pub fn merge_managed_block(existing: &str, generated: Option<&str>) -> String {
    let newline = if existing.contains("\r\n") { "\r\n" } else { "\n" };
    let lines: Vec<&str> = existing.lines().collect();
    let block: Option<Vec<&str>> = generated.map(|text| {
        let mut block = vec![BLOCK_BEGIN];
        block.extend(text.lines());
        block.push(BLOCK_END);
        block
    });

    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + 16);
    match find_block(&lines) {
        Some((start, end)) => {
            out.extend(&lines[..start]);
            match block {
                Some(block) => out.extend(block),
                None => {
                    // Drop the seam's doubled blank line left by the removal.
                    let before_blank = out.last().is_some_and(|l| l.trim().is_empty());
                    let after_blank = lines.get(end).is_some_and(|l| l.trim().is_empty());
                    if before_blank && after_blank {
                        out.pop();
                    }
                }
            }
            out.extend(&lines[end..]);
        }
        None => {
            let Some(block) = block else {
                return existing.to_string();
            };
            let at = preamble_end(&lines);
            out.extend(&lines[..at]);
            if !out.is_empty() {
                out.push("");
            }
            out.extend(block);
            if at < lines.len() {
                if !lines[at].trim().is_empty() {
                    out.push("");
                }
                out.extend(&lines[at..]);
            }
        }
    }

    while out.first().is_some_and(|l| l.trim().is_empty()) {
        out.remove(0);
    }
    while out.last().is_some_and(|l| l.trim().is_empty()) {
        out.pop();
    }
    if out.is_empty() {
        return String::new();
    }
    let mut merged = out.join(newline);
    merged.push_str(newline);
    merged
}

/// Line range `[start, end)` of the generated block.
fn find_block(lines: &[&str]) -> Option<(usize, usize)> {
    let start = lines.iter().position(|l| l.trim() == BLOCK_BEGIN)?;
    let end = lines[start..]
        .iter()
        .position(|l| l.trim() == BLOCK_END)
        .map(|offset| start + offset + 1)
        .unwrap_or(lines.len());
    Some((start, end))
}

/// Index just past the last comment or `load` line before the first
/// statement.
fn preamble_end(lines: &[&str]) -> usize {
    let mut end = 0;
    let mut in_load = false;
    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if in_load {
            if trimmed.contains(')') {
                in_load = false;
            }
            end = i + 1;
        } else if trimmed.is_empty() {
            continue;
        } else if trimmed.starts_with('#') {
            end = i + 1;
        } else if trimmed.starts_with("load(") {
            in_load = !trimmed.contains(')');
            end = i + 1;
        } else {
            break;
        }
    }
    end
}

//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ModFilesError, ModFilesResult};

use super::types::Config;
use super::ConfigWarning;

/// Project config file name, looked up in the generate root
pub const PROJECT_CONFIG_FILE: &str = "modfiles.toml";

/// Overrides `[generate] target_name`
pub const ENV_TARGET_NAME: &str = "MODFILES_TARGET_NAME";

/// Comma-separated patterns appended to `[exclude] baseline`
pub const ENV_EXCLUDE: &str = "MODFILES_EXCLUDE";

/// Overrides `[go_mod] enabled`
pub const ENV_GO_MOD: &str = "MODFILES_GO_MOD";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ModFilesResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ModFilesError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the config file for `root` and load it.
///
/// An explicit path must exist. Without one, `<root>/modfiles.toml` is used
/// when present, else the built-in defaults. Environment overrides are
/// applied last.
pub fn load_for_root(
    root: &Path,
    explicit: Option<&Path>,
) -> ModFilesResult<(Config, Vec<ConfigWarning>)> {
    let path: Option<PathBuf> = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Some(root.join(PROJECT_CONFIG_FILE)).filter(|p| p.is_file()),
    };

    let (config, warnings) = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (MODFILES_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from `lookup`, which maps a variable name to its value.
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // MODFILES_TARGET_NAME
    if let Some(name) = lookup(ENV_TARGET_NAME).filter(|v| !v.trim().is_empty()) {
        config.generate.target_name = name.trim().to_string();
    }

    // MODFILES_EXCLUDE (comma-separated)
    if let Some(patterns) = lookup(ENV_EXCLUDE) {
        config.exclude.baseline.extend(
            patterns
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
        );
    }

    // MODFILES_GO_MOD
    if let Some(value) = lookup(ENV_GO_MOD) {
        match parse_bool(&value) {
            Some(enabled) => config.go_mod.enabled = enabled,
            None => tracing::warn!(
                value = %value,
                "ignoring invalid {} value (expected true/false/1/0)",
                ENV_GO_MOD
            ),
        }
    }

    config
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "generate",
        "target_name",
        "visibility",
        "build_file_names",
        "exclude",
        "baseline",
        "go_mod",
        "enabled",
        "load",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

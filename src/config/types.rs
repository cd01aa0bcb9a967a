//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::services::{
    RuleOptions, DEFAULT_BASELINE, DEFAULT_GO_MOD_LOAD, DEFAULT_TARGET_NAME, DEFAULT_VISIBILITY,
};
use crate::error::ModFilesResult;
use crate::infrastructure::build_file::DEFAULT_BUILD_FILE_NAMES;

use super::loader;
use super::ConfigWarning;

/// `[generate]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Name of the generated unit target in every package
    #[serde(default = "default_target_name")]
    pub target_name: String,

    #[serde(default = "default_visibility")]
    pub visibility: Vec<String>,

    /// Build file names, in lookup order; new files use the first one
    #[serde(default = "default_build_file_names")]
    pub build_file_names: Vec<String>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            target_name: default_target_name(),
            visibility: default_visibility(),
            build_file_names: default_build_file_names(),
        }
    }
}

fn default_target_name() -> String {
    DEFAULT_TARGET_NAME.to_string()
}

fn default_visibility() -> Vec<String> {
    vec![DEFAULT_VISIBILITY.to_string()]
}

fn default_build_file_names() -> Vec<String> {
    DEFAULT_BUILD_FILE_NAMES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// `[exclude]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludeConfig {
    /// Patterns applied in every directory before its own directives
    #[serde(default = "default_baseline")]
    pub baseline: Vec<String>,
}

impl Default for ExcludeConfig {
    fn default() -> Self {
        Self {
            baseline: default_baseline(),
        }
    }
}

fn default_baseline() -> Vec<String> {
    DEFAULT_BASELINE.iter().map(|s| s.to_string()).collect()
}

/// `[go_mod]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoModConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// `.bzl` file the `go_mod` rule is loaded from
    #[serde(default = "default_go_mod_load")]
    pub load: String,
}

impl Default for GoModConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            load: default_go_mod_load(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_go_mod_load() -> String {
    DEFAULT_GO_MOD_LOAD.to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generate: GenerateConfig,

    #[serde(default)]
    pub exclude: ExcludeConfig,

    #[serde(default)]
    pub go_mod: GoModConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ModFilesResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ModFilesResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `explicit`, else `<root>/modfiles.toml`, else defaults; then
    /// apply environment overrides.
    pub fn load_for_root(
        root: &Path,
        explicit: Option<&Path>,
    ) -> ModFilesResult<(Self, Vec<ConfigWarning>)> {
        loader::load_for_root(root, explicit)
    }

    /// Apply environment variable overrides (MODFILES_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Options for the rule builder.
    pub fn rule_options(&self) -> RuleOptions {
        RuleOptions {
            visibility: self.generate.visibility.clone(),
            go_mod_load: self
                .go_mod
                .enabled
                .then(|| self.go_mod.load.clone()),
        }
    }
}

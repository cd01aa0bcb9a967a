//! Generate options

use crate::config::Config;
use crate::domain::services::{RuleOptions, DEFAULT_BASELINE, DEFAULT_TARGET_NAME};
use crate::infrastructure::build_file::DEFAULT_BUILD_FILE_NAMES;

/// Options for the generate command
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Target name of every unit
    pub target_name: String,
    /// Exclusion patterns applied before each directory's own directives
    pub baseline: Vec<String>,
    /// Build file names, in lookup order
    pub build_file_names: Vec<String>,
    pub rules: RuleOptions,
    /// Compute changes and diffs without writing
    pub dry_run: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            target_name: DEFAULT_TARGET_NAME.to_string(),
            baseline: DEFAULT_BASELINE.iter().map(|s| s.to_string()).collect(),
            build_file_names: DEFAULT_BUILD_FILE_NAMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            rules: RuleOptions::default(),
            dry_run: false,
        }
    }
}

impl GenerateOptions {
    /// Options from a resolved configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            target_name: config.generate.target_name.clone(),
            baseline: config.exclude.baseline.clone(),
            build_file_names: config.generate.build_file_names.clone(),
            rules: config.rule_options(),
            dry_run: false,
        }
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Disable the `go_mod` rule
    pub fn without_go_mod(mut self) -> Self {
        self.rules.go_mod_load = None;
        self
    }
}

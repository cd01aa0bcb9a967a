//! Configuration module for modfiles
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (MODFILES_*)
//! 3. Project config (`<root>/modfiles.toml`, or `--config <FILE>`)
//! 4. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    apply_overrides, ENV_EXCLUDE, ENV_GO_MOD, ENV_TARGET_NAME, PROJECT_CONFIG_FILE,
};
pub use types::{Config, ExcludeConfig, GenerateConfig, GoModConfig};

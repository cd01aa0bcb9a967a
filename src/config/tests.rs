//! Tests for the config module

use super::loader::{apply_overrides, load_for_root};
use super::types::*;
use crate::error::ModFilesError;
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.generate.target_name, "_pkg_");
    assert_eq!(config.generate.visibility, vec!["//:__subpackages__"]);
    assert_eq!(config.generate.build_file_names, vec!["BUILD.bazel", "BUILD"]);
    assert_eq!(config.exclude.baseline, vec![".*"]);
    assert!(config.go_mod.enabled);
    assert_eq!(config.go_mod.load, "@//rules:go_mod.bzl");
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[generate]
target_name = "srcs"
visibility = ["//visibility:public"]

[exclude]
baseline = [".*", "*_test.go"]

[go_mod]
enabled = false
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.generate.target_name, "srcs");
    assert_eq!(config.generate.visibility, vec!["//visibility:public"]);
    // Unset keys keep their defaults.
    assert_eq!(config.generate.build_file_names, vec!["BUILD.bazel", "BUILD"]);
    assert_eq!(config.exclude.baseline, vec![".*", "*_test.go"]);
    assert!(!config.go_mod.enabled);
    assert_eq!(config.go_mod.load, "@//rules:go_mod.bzl");
}

#[test]
fn test_config_empty_file_is_default() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_rule_options_follow_go_mod_switch() {
    let mut config = Config::default();
    assert_eq!(
        config.rule_options().go_mod_load.as_deref(),
        Some("@//rules:go_mod.bzl")
    );

    config.go_mod.enabled = false;
    assert_eq!(config.rule_options().go_mod_load, None);
    assert_eq!(config.rule_options().visibility, vec!["//:__subpackages__"]);
}

#[test]
fn test_load_with_warnings_reports_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("modfiles.toml");
    fs::write(&path, "[generate]\ntarget_nam = \"x\"\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.generate.target_name, "_pkg_");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "target_nam");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("target_name"));
}

#[test]
fn test_load_invalid_toml_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("modfiles.toml");
    fs::write(&path, "[generate]\ntarget_name = [1, 2\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, ModFilesError::InvalidConfig { .. }));
}

#[test]
fn test_load_for_root_reads_project_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("modfiles.toml"),
        "[generate]\ntarget_name = \"from_file\"\n",
    )
    .unwrap();

    let (config, warnings) = load_for_root(dir.path(), None).unwrap();
    assert!(warnings.is_empty());
    // MODFILES_TARGET_NAME is not set by the test harness.
    if std::env::var(super::ENV_TARGET_NAME).is_err() {
        assert_eq!(config.generate.target_name, "from_file");
    }
}

#[test]
fn test_load_for_root_without_file_is_default() {
    let dir = tempdir().unwrap();
    let (config, warnings) = load_for_root(dir.path(), None).unwrap();
    assert!(warnings.is_empty());
    assert_eq!(config.generate.build_file_names, vec!["BUILD.bazel", "BUILD"]);
}

#[test]
fn test_load_for_root_missing_explicit_file_is_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(load_for_root(dir.path(), Some(&missing)).is_err());
}

#[test]
fn test_env_override_target_name() {
    let config = apply_overrides(Config::default(), env(&[("MODFILES_TARGET_NAME", " srcs ")]));
    assert_eq!(config.generate.target_name, "srcs");

    let config = apply_overrides(Config::default(), env(&[("MODFILES_TARGET_NAME", "  ")]));
    assert_eq!(config.generate.target_name, "_pkg_");
}

#[test]
fn test_env_override_exclude_appends() {
    let config = apply_overrides(
        Config::default(),
        env(&[("MODFILES_EXCLUDE", "*.txt, testdata_*,,")]),
    );
    assert_eq!(config.exclude.baseline, vec![".*", "*.txt", "testdata_*"]);
}

#[test]
fn test_env_override_go_mod() {
    let config = apply_overrides(Config::default(), env(&[("MODFILES_GO_MOD", "false")]));
    assert!(!config.go_mod.enabled);

    let config = apply_overrides(Config::default(), env(&[("MODFILES_GO_MOD", "0")]));
    assert!(!config.go_mod.enabled);

    let mut disabled = Config::default();
    disabled.go_mod.enabled = false;
    let config = apply_overrides(disabled, env(&[("MODFILES_GO_MOD", "TRUE")]));
    assert!(config.go_mod.enabled);
}

#[test]
fn test_env_override_invalid_go_mod_is_ignored() {
    let config = apply_overrides(Config::default(), env(&[("MODFILES_GO_MOD", "maybe")]));
    assert!(config.go_mod.enabled);
}

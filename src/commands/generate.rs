//! Generate command handler

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use modfiles::application::{GenerateOptions, GenerateResult, GenerateUseCase};
use modfiles::domain::value_objects::BazelIgnore;
use modfiles::infrastructure::LocalFs;
use modfiles::Config;

/// Flags that override the configuration for one run
#[derive(Debug, Default)]
pub struct GenerateFlags {
    pub dry_run: bool,
    pub no_go_mod: bool,
    pub target_name: Option<String>,
}

pub fn cmd_generate(
    root: &Path,
    config_path: Option<&Path>,
    flags: GenerateFlags,
    json: bool,
) -> Result<()> {
    let (config, warnings) = Config::load_for_root(root, config_path)
        .with_context(|| format!("failed to load configuration for {}", root.display()))?;
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    let mut options = GenerateOptions::from_config(&config).with_dry_run(flags.dry_run);
    if flags.no_go_mod {
        options = options.without_go_mod();
    }
    if let Some(name) = flags.target_name {
        options.target_name = name;
    }

    let bazel_ignore = BazelIgnore::load(root)
        .with_context(|| format!("failed to read .bazelignore in {}", root.display()))?;
    let result = GenerateUseCase::new(LocalFs::new(), options, root)
        .execute(bazel_ignore)
        .with_context(|| format!("failed to generate build files under {}", root.display()))?;

    if json {
        emit_json(root, &result);
    } else {
        print_human(root, &result);
    }
    Ok(())
}

fn emit_json(root: &Path, result: &GenerateResult) {
    for unit in &result.units {
        println!(
            "{}",
            serde_json::json!({
                "event": "unit",
                "command": "generate",
                "dir": unit.dir().as_str(),
                "label": unit.label(),
                "srcs": unit.srcs(),
            })
        );
    }
    for change in result.changed() {
        println!(
            "{}",
            serde_json::json!({
                "event": "build_file",
                "command": "generate",
                "path": relative(root, &change.path).display().to_string(),
                "action": change.action,
                "additions": change.diff.additions,
                "deletions": change.diff.deletions,
            })
        );
    }
    println!(
        "{}",
        serde_json::json!({
            "event": "complete",
            "command": "generate",
            "units": result.units.len(),
            "changed": result.changed_count(),
            "unchanged": result.unchanged_count(),
            "dry_run": result.dry_run,
        })
    );
}

fn print_human(root: &Path, result: &GenerateResult) {
    for change in result.changed() {
        if result.dry_run {
            print!("{}", change.diff.unified);
        } else {
            println!(
                "{:<14} {} ({})",
                change.action.to_string(),
                relative(root, &change.path).display(),
                change.diff.summary()
            );
        }
    }

    let verb = if result.dry_run { "would update" } else { "updated" };
    println!(
        "{} units, {} {} build files, {} unchanged",
        result.units.len(),
        verb,
        result.changed_count(),
        result.unchanged_count()
    );
}

fn relative(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}

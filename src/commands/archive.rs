//! Archive command handler

use anyhow::{Context, Result};

use modfiles::application::{package_module, ArchiveOptions};

pub fn cmd_archive(options: ArchiveOptions, json: bool) -> Result<()> {
    let result = package_module(&options)
        .with_context(|| format!("failed to write module archive {}", options.output.display()))?;

    if json {
        let entries: Vec<&str> = result.entries.iter().map(|e| e.name.as_str()).collect();
        println!(
            "{}",
            serde_json::json!({
                "event": "complete",
                "command": "archive",
                "output": result.output.display().to_string(),
                "module": result.module_dir,
                "version": result.version,
                "entries": entries,
            })
        );
    } else {
        println!(
            "Wrote {} ({}, {} files)",
            result.output.display(),
            result.module_dir,
            result.entries.len()
        );
    }
    Ok(())
}

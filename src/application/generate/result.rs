//! Generate result types

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::PackageUnit;
use crate::domain::services::FileDiff;

/// What happened to one build file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildFileAction {
    /// New build file holding only the generated block
    Created,
    /// Generated block inserted or replaced
    Updated,
    /// Generated block dropped because the directory no longer has a unit
    Removed,
    /// Already up to date
    Unchanged,
}

impl std::fmt::Display for BuildFileAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildFileAction::Created => write!(f, "created"),
            BuildFileAction::Updated => write!(f, "updated"),
            BuildFileAction::Removed => write!(f, "removed block"),
            BuildFileAction::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// A build file the run touched (or would touch, in a dry run)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildFileChange {
    pub path: PathBuf,
    pub action: BuildFileAction,
    pub diff: FileDiff,
}

/// Result of a generate run
#[derive(Debug, Clone, Default)]
pub struct GenerateResult {
    /// Units in emission order
    pub units: Vec<PackageUnit>,
    /// One entry per build file with a generated block before or after the run
    pub changes: Vec<BuildFileChange>,
    pub dry_run: bool,
}

impl GenerateResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build files whose content changed (or would change)
    pub fn changed(&self) -> impl Iterator<Item = &BuildFileChange> {
        self.changes
            .iter()
            .filter(|c| c.action != BuildFileAction::Unchanged)
    }

    pub fn changed_count(&self) -> usize {
        self.changed().count()
    }

    pub fn unchanged_count(&self) -> usize {
        self.changes.len() - self.changed_count()
    }

    /// Units not claimed by any ancestor inside the walked tree
    pub fn top_level_units(&self) -> impl Iterator<Item = &PackageUnit> {
        let claimed: std::collections::HashSet<_> = self
            .units
            .iter()
            .flat_map(|u| u.claimed())
            .map(|r| r.dir.clone())
            .collect();
        self.units
            .iter()
            .filter(move |u| !claimed.contains(u.dir()))
    }
}

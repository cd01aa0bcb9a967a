//! Generate use case implementation

use std::path::{Path, PathBuf};

use crate::domain::ports::{DirectoryVisit, DirectoryVisitor, FileSystem, FsError};
use crate::domain::services::{
    diff_file, filter_files, resolve_patterns, rules_for_unit, AggregationEngine,
};
use crate::domain::value_objects::BazelIgnore;
use crate::error::{ModFilesError, ModFilesResult};
use crate::infrastructure::build_file::{build_file_path, merge_managed_block};
use crate::infrastructure::walk::{walk_post_order, WalkOptions};

use super::options::GenerateOptions;
use super::result::{BuildFileAction, BuildFileChange, GenerateResult};

/// Generate use case - one instance per run
///
/// Implements [`DirectoryVisitor`], so it can be fed by the walker or by any
/// other post-order driver.
pub struct GenerateUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
    options: GenerateOptions,
    engine: AggregationEngine,
    root: PathBuf,
    result: GenerateResult,
}

impl<FS> GenerateUseCase<FS>
where
    FS: FileSystem,
{
    /// Create a new generate use case; `root` is used to shorten reported paths.
    pub fn new(fs: FS, options: GenerateOptions, root: impl Into<PathBuf>) -> Self {
        let engine = AggregationEngine::new(options.target_name.clone());
        let result = GenerateResult {
            dry_run: options.dry_run,
            ..GenerateResult::default()
        };
        Self {
            fs,
            options,
            engine,
            root: root.into(),
            result,
        }
    }

    /// Walk `root` and process every directory.
    pub fn execute(mut self, bazel_ignore: BazelIgnore) -> ModFilesResult<GenerateResult>
    where
        FS: Clone,
    {
        let reader = self.fs.clone();
        let walk = WalkOptions {
            build_file_names: self.options.build_file_names.clone(),
            bazel_ignore,
        };
        let root = self.root.clone();
        walk_post_order(&root, &reader, &walk, &mut self)?;
        Ok(self.finish())
    }

    /// End the run and hand back what it did.
    pub fn finish(self) -> GenerateResult {
        if !self.engine.pending().is_empty() {
            tracing::debug!(
                top_level = self.engine.pending().len(),
                "units left unclaimed at the walk root"
            );
        }
        self.result
    }

    fn process(&mut self, visit: &DirectoryVisit) -> ModFilesResult<()> {
        let patterns = resolve_patterns(&self.options.baseline, &visit.config.exclude_directives);
        let existing_build_file = visit.config.build_file.is_some();
        let path = build_file_path(&visit.path, &visit.config, &self.options.build_file_names);

        // A build file created by this run belongs to the directory's files
        // just like one that was already there.
        let mut files = visit.files.clone();
        if !existing_build_file
            && (!filter_files(&files, &patterns).is_empty()
                || self.engine.has_pending_descendants(&visit.rel))
        {
            if let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) {
                if let Err(at) = files.binary_search(&name) {
                    files.insert(at, name);
                }
            }
        }

        let unit = self.engine.visit(&visit.rel, &files, &patterns);
        let generated = unit
            .as_ref()
            .map(|unit| rules_for_unit(unit, &files, &self.options.rules).render());

        let existing = if existing_build_file {
            Some(self.fs.read(&path).map_err(|e| io_error(&path, e))?)
        } else {
            None
        };

        match (existing.as_deref(), generated.as_deref()) {
            (None, None) => {}
            (existing, generated) => {
                let old = existing.unwrap_or("");
                let new = merge_managed_block(old, generated);
                self.record(&path, existing.is_some(), old, &new, generated.is_some())?;
            }
        }

        if let Some(unit) = unit {
            self.result.units.push(unit);
        }
        Ok(())
    }

    fn record(
        &mut self,
        path: &Path,
        existed: bool,
        old: &str,
        new: &str,
        has_unit: bool,
    ) -> ModFilesResult<()> {
        let action = match (old == new, existed, has_unit) {
            (true, _, true) => BuildFileAction::Unchanged,
            // No unit and no block to drop: not our file.
            (true, _, false) => return Ok(()),
            (false, false, _) => BuildFileAction::Created,
            (false, true, true) => BuildFileAction::Updated,
            (false, true, false) => BuildFileAction::Removed,
        };

        let shown = self.display_path(path);
        let diff = diff_file(&shown, old, new);

        if action != BuildFileAction::Unchanged && !self.options.dry_run {
            self.fs.write(path, new).map_err(|e| io_error(path, e))?;
            tracing::info!(path = %shown, action = %action, "wrote build file");
        } else {
            tracing::debug!(path = %shown, action = %action, dry_run = self.options.dry_run, "build file");
        }

        self.result.changes.push(BuildFileChange {
            path: path.to_path_buf(),
            action,
            diff,
        });
        Ok(())
    }

    fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }
}

impl<FS> DirectoryVisitor for GenerateUseCase<FS>
where
    FS: FileSystem,
{
    fn on_directory_visited(&mut self, visit: &DirectoryVisit) -> ModFilesResult<()> {
        self.process(visit)
    }
}

fn io_error(path: &Path, source: FsError) -> ModFilesError {
    ModFilesError::BuildFile {
        path: path.to_path_buf(),
        source,
    }
}

//! Aggregation engine
//!
//! Turns a post-order stream of directory visits into packaging units. Every
//! emitted unit is recorded as *pending* until the first ancestor visit claims
//! it, so a parent absorbs its descendants even when the directories in
//! between produced nothing of their own.
//!
//! # Contract
//!
//! The caller must visit every directory at most once, and every directory
//! after all of its descendants. The engine does not check this; breaking it
//! leaves children unclaimed or lets a distant ancestor claim them instead.

use crate::domain::entities::{Member, PackageUnit, UnitRef};
use crate::domain::services::exclusion::{filter_files, ExcludePatterns};
use crate::domain::value_objects::{DirPath, OrderedSet, Visit};

/// Target name of every generated unit
pub const DEFAULT_TARGET_NAME: &str = "_pkg_";

/// Stateful aggregator for one traversal run.
#[derive(Debug, Clone)]
pub struct AggregationEngine {
    target_name: String,
    pending: OrderedSet<DirPath>,
}

impl Default for AggregationEngine {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_NAME)
    }
}

impl AggregationEngine {
    pub fn new(target_name: impl Into<String>) -> Self {
        Self {
            target_name: target_name.into(),
            pending: OrderedSet::new(),
        }
    }

    /// Directories whose units have not been claimed yet, in emission order.
    pub fn pending(&self) -> &OrderedSet<DirPath> {
        &self.pending
    }

    /// Whether some pending unit lies below `dir`, i.e. a visit of `dir`
    /// would claim at least one child.
    pub fn has_pending_descendants(&self, dir: &DirPath) -> bool {
        self.pending.iter().any(|pending| dir.is_ancestor_of(pending))
    }

    /// Forget all pending units, ready for a new traversal.
    pub fn reset(&mut self) {
        self.pending.clear();
    }

    /// Aggregate one directory.
    ///
    /// Members are the directory's files that survive `patterns`, in input
    /// order, followed by every pending descendant unit in registry order.
    /// Claimed descendants leave the registry for good. Returns `None` when
    /// there is nothing to package, in which case the registry is untouched.
    pub fn visit<S: AsRef<str>>(
        &mut self,
        dir: &DirPath,
        raw_files: &[S],
        patterns: &ExcludePatterns,
    ) -> Option<PackageUnit> {
        debug_assert!(
            !self.pending.contains(dir),
            "directory '{}' visited twice",
            dir
        );

        let mut members: OrderedSet<Member> = filter_files(raw_files, patterns)
            .into_iter()
            .map(Member::File)
            .collect();
        let local_count = members.len();

        let target = self.target_name.as_str();
        self.pending.for_each(|child| {
            if !dir.is_ancestor_of(child) {
                return Visit::Keep;
            }
            tracing::trace!(parent = %dir, child = %child, "claiming unit");
            members.add(Member::Unit(UnitRef::new(child.clone(), target)));
            Visit::Remove
        });

        if members.is_empty() {
            tracing::debug!(dir = %dir, "no unit");
            return None;
        }

        tracing::debug!(
            dir = %dir,
            files = local_count,
            claimed = members.len() - local_count,
            "emitting unit"
        );
        let unit = PackageUnit::new(dir.clone(), target, members.to_vec());
        self.pending.add(dir.clone());
        Some(unit)
    }
}

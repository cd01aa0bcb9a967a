//! Packaging unit entity
//!
//! The immutable result of aggregating one directory: its own files plus the
//! units of descendants it claimed.

use std::fmt;

use serde::Serialize;

use crate::domain::value_objects::DirPath;

/// Reference to another directory's unit, rendered as `//<dir>:<target>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnitRef {
    pub dir: DirPath,
    pub target: String,
}

impl UnitRef {
    pub fn new(dir: DirPath, target: impl Into<String>) -> Self {
        Self {
            dir,
            target: target.into(),
        }
    }

    pub fn label(&self) -> String {
        self.dir.label(&self.target)
    }
}

impl fmt::Display for UnitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// One entry of a unit's `srcs`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Member {
    /// File local to the unit's directory, by name
    File(String),
    /// A descendant unit claimed by this one
    Unit(UnitRef),
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Member::File(name) => f.write_str(name),
            Member::Unit(unit) => write!(f, "{}", unit),
        }
    }
}

impl Serialize for Member {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Emitted aggregation artifact for one directory.
///
/// Only constructed with a non-empty member list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageUnit {
    dir: DirPath,
    target: String,
    members: Vec<Member>,
}

impl PackageUnit {
    pub(crate) fn new(dir: DirPath, target: impl Into<String>, members: Vec<Member>) -> Self {
        debug_assert!(!members.is_empty(), "package units are never empty");
        Self {
            dir,
            target: target.into(),
            members,
        }
    }

    pub fn dir(&self) -> &DirPath {
        &self.dir
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Members rendered the way they appear in the `srcs` attribute.
    pub fn srcs(&self) -> Vec<String> {
        self.members.iter().map(ToString::to_string).collect()
    }

    /// Descendant units absorbed by this one.
    pub fn claimed(&self) -> impl Iterator<Item = &UnitRef> {
        self.members.iter().filter_map(|m| match m {
            Member::Unit(unit) => Some(unit),
            Member::File(_) => None,
        })
    }

    /// Label other packages use to depend on this unit.
    pub fn label(&self) -> String {
        self.dir.label(&self.target)
    }
}

//! Directory path value object
//!
//! A slash-separated path relative to the repository root. The root itself is
//! the empty path, which is how Bazel spells the root package.

use std::fmt;
use std::path::{Component, Path};

use serde::{Serialize, Serializer};

/// Relative directory path using `/` separators on every platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirPath(String);

impl DirPath {
    /// Normalize a slash-separated path.
    ///
    /// Leading `./` and `/`, trailing `/`, and empty segments are dropped, so
    /// `"./foo//bar/"` becomes `"foo/bar"`.
    pub fn new(path: impl AsRef<str>) -> Self {
        let joined = path
            .as_ref()
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .collect::<Vec<_>>()
            .join("/");
        Self(joined)
    }

    /// The repository root (the empty path).
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Build from a filesystem path relative to the walk root.
    pub fn from_relative(path: &Path) -> Self {
        let segments: Vec<String> = path
            .components()
            .filter_map(|component| match component {
                Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        Self(segments.join("/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `self` is a proper ancestor of `other`.
    ///
    /// Containment is decided on whole segments: `foo` contains `foo/bar` but
    /// not `foobar`. A path is never its own ancestor.
    pub fn is_ancestor_of(&self, other: &DirPath) -> bool {
        if self.0 == other.0 {
            return false;
        }
        if self.is_root() {
            return true;
        }
        other
            .0
            .strip_prefix(self.0.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
    }

    /// Append one segment.
    pub fn join(&self, segment: &str) -> Self {
        if self.is_root() {
            Self::new(segment)
        } else {
            Self::new(format!("{}/{}", self.0, segment))
        }
    }

    /// Absolute label of `target` in this package: `//<path>:<target>`.
    pub fn label(&self, target: &str) -> String {
        format!("//{}:{}", self.0, target)
    }
}

impl fmt::Display for DirPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "//")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<&str> for DirPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for DirPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for DirPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for DirPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod bazel_ignore;
mod config_warning;
mod dir_path;
mod ordered_set;

pub use bazel_ignore::{BazelIgnore, BazelIgnoreError, BAZELIGNORE_FILE};
pub use config_warning::ConfigWarning;
pub use dir_path::DirPath;
pub use ordered_set::{OrderedSet, Visit};

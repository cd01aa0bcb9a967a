//! modfiles - module file aggregation for Bazel
//!
//! Walks a source tree bottom-up and gives every directory a `filegroup`
//! holding its own files plus the groups of the subdirectories below it, so
//! a module root ends up with one target covering the whole module. A second
//! tool packages such a module as a `<module>@<version>` zip for a Go module
//! proxy.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{Member, PackageUnit, UnitRef};
pub use domain::ports::{DirectoryVisit, DirectoryVisitor};
pub use domain::services::{filter_files, resolve_patterns, AggregationEngine, ExcludePatterns};
pub use domain::value_objects::{DirPath, OrderedSet, Visit};
pub use error::{ModFilesError, ModFilesResult};

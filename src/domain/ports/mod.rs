//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod directory_visitor;
pub mod file_system;

pub use directory_visitor::{DirectoryConfig, DirectoryVisit, DirectoryVisitor};
pub use file_system::{FileSystem, FsError, FsResult};

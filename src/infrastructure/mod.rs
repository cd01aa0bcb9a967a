//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory)
//! - `walk` - Post-order directory walker
//! - `build_file` - Directive parsing and generated block splicing
//! - `archive/` - Module archive packaging

pub mod archive;
pub mod build_file;
pub mod fs;
pub mod walk;

pub use fs::{LocalFs, MemoryFs};
pub use walk::{walk_post_order, WalkOptions};

//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod local;
mod memory;

pub use local::{atomic_write, persist, LocalFs};
pub use memory::MemoryFs;

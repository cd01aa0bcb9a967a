//! Domain Layer
//!
//! Aggregation rules for module files, free of file system access.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (DirPath, OrderedSet, BazelIgnore)
//! - `entities/` - Package units and the build rules rendered from them
//! - `services/` - Exclusion resolution, the aggregation engine, rule building
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No traversal** - The engine is fed directory visits; it never walks
//! 2. **Single owner** - Every directory's files end up in exactly one unit
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

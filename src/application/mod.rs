//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `GenerateUseCase` - Walk, aggregate, and update build files
//! - `package_module` - Build a module archive from a stamped build

pub mod archive;
pub mod generate;

pub use archive::{package_module, ArchiveOptions, ArchiveResult};
pub use generate::{
    BuildFileAction, BuildFileChange, GenerateOptions, GenerateResult, GenerateUseCase,
};

//! Generate Use Case
//!
//! Walks a source tree, aggregates module files into units and keeps each
//! directory's build file in sync with its unit.

mod options;
mod result;
mod use_case;


pub use options::GenerateOptions;
pub use result::{BuildFileAction, BuildFileChange, GenerateResult};
pub use use_case::GenerateUseCase;

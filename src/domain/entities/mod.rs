//! Domain Entities
//!
//! - `PackageUnit` - One directory's aggregated files and claimed units
//! - `BuildRule` - A rule call rendered into a build file

mod build_rule;
mod package_unit;

pub use build_rule::{AttrValue, BuildRule, LoadStatement};
pub use package_unit::{Member, PackageUnit, UnitRef};

//! Domain Services
//!
//! Pure logic operating on directory visits and package units.

pub mod aggregator;
pub mod differ;
pub mod exclusion;
pub mod rule_builder;

pub use aggregator::{AggregationEngine, DEFAULT_TARGET_NAME};
pub use differ::{diff_file, FileDiff};
pub use exclusion::{filter_files, resolve_patterns, ExcludePatterns, DEFAULT_BASELINE};
pub use rule_builder::{
    go_mod_rule, rules_for_unit, unit_rule, GeneratedRules, RuleOptions, DEFAULT_GO_MOD_LOAD,
    DEFAULT_VISIBILITY,
};

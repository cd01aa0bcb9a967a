//! Rule construction
//!
//! Maps packaging units onto the rules written into build files.

use crate::domain::entities::{BuildRule, LoadStatement, PackageUnit};

/// Rule kind used for every packaging unit
pub const UNIT_RULE_KIND: &str = "filegroup";

/// Visibility granted to generated units: every package in the repository
pub const DEFAULT_VISIBILITY: &str = "//:__subpackages__";

/// Rule kind of the go module archive target
pub const GO_MOD_RULE_KIND: &str = "go_mod";

/// Name of the go module archive target
pub const GO_MOD_TARGET_NAME: &str = "go_mod_zip";

/// Manifest file that marks a directory as a go module root
pub const GO_MOD_MANIFEST: &str = "go.mod";

/// Default `.bzl` file providing the `go_mod` rule
pub const DEFAULT_GO_MOD_LOAD: &str = "@//rules:go_mod.bzl";

/// Rules generated for one directory, plus the loads they need.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedRules {
    pub loads: Vec<LoadStatement>,
    pub rules: Vec<BuildRule>,
}

impl GeneratedRules {
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Render loads first, then rules separated by blank lines.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for load in &self.loads {
            out.push_str(&load.render());
        }
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 || !self.loads.is_empty() {
                out.push('\n');
            }
            out.push_str(&rule.render());
        }
        out
    }
}

/// `filegroup` exposing a unit's members.
pub fn unit_rule(unit: &PackageUnit, visibility: &[String]) -> BuildRule {
    BuildRule::new(UNIT_RULE_KIND, unit.target())
        .with_attr("srcs", unit.srcs())
        .with_attr("visibility", visibility.to_vec())
}

/// `go_mod` archive target packaging the directory's unit.
pub fn go_mod_rule(unit: &PackageUnit) -> BuildRule {
    BuildRule::new(GO_MOD_RULE_KIND, GO_MOD_TARGET_NAME)
        .with_attr("go_mod", format!(":{}", GO_MOD_MANIFEST))
        .with_attr("srcs", vec![format!(":{}", unit.target())])
        .with_attr("module_path", unit.dir().as_str())
}

/// Options for [`rules_for_unit`].
#[derive(Debug, Clone)]
pub struct RuleOptions {
    pub visibility: Vec<String>,
    /// `Some(load)` enables the `go_mod` rule for directories with a manifest.
    pub go_mod_load: Option<String>,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            visibility: vec![DEFAULT_VISIBILITY.to_string()],
            go_mod_load: Some(DEFAULT_GO_MOD_LOAD.to_string()),
        }
    }
}

/// All rules a directory gets for `unit`.
///
/// `raw_files` is the unfiltered listing: a `go.mod` that was excluded from
/// the unit still marks the directory as a module root.
pub fn rules_for_unit<S: AsRef<str>>(
    unit: &PackageUnit,
    raw_files: &[S],
    options: &RuleOptions,
) -> GeneratedRules {
    let mut generated = GeneratedRules {
        loads: Vec::new(),
        rules: vec![unit_rule(unit, &options.visibility)],
    };

    let has_manifest = raw_files.iter().any(|f| f.as_ref() == GO_MOD_MANIFEST);
    if let (true, Some(load)) = (has_manifest, options.go_mod_load.as_ref()) {
        generated
            .loads
            .push(LoadStatement::new(load.as_str(), &[GO_MOD_RULE_KIND]));
        generated.rules.push(go_mod_rule(unit));
    }

    generated
}

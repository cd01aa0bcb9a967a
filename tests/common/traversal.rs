//! Traversal simulator
//!
//! Feeds an explicit visit order straight into `AggregationEngine`. The
//! engine trusts its caller to visit in post-order; the simulator lets tests
//! pin down both the correct results and what happens when that contract is
//! broken.

use modfiles::{AggregationEngine, DirPath, ExcludePatterns, PackageUnit};

/// Visit `order` with no exclusions and collect the emitted units.
pub fn simulate(order: &[(&str, &[&str])]) -> Vec<PackageUnit> {
    simulate_with(&mut AggregationEngine::default(), order, &ExcludePatterns::default())
}

pub fn simulate_with(
    engine: &mut AggregationEngine,
    order: &[(&str, &[&str])],
    patterns: &ExcludePatterns,
) -> Vec<PackageUnit> {
    order
        .iter()
        .filter_map(|(dir, files)| engine.visit(&DirPath::new(dir), *files, patterns))
        .collect()
}

/// `(dir, srcs)` pairs, for compact assertions.
pub fn summarize(units: &[PackageUnit]) -> Vec<(String, Vec<String>)> {
    units
        .iter()
        .map(|u| (u.dir().as_str().to_string(), u.srcs()))
        .collect()
}

//! Property tests for claim-once aggregation over random trees.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use modfiles::{AggregationEngine, DirPath, ExcludePatterns, Member};

/// Random directory trees: every path plus all of its ancestors, each marked
/// with whether it holds a file of its own.
fn tree() -> impl Strategy<Value = BTreeMap<String, bool>> {
    let path = proptest::collection::vec("[abc]", 1..=4).prop_map(|s| s.join("/"));
    proptest::collection::vec((path, any::<bool>()), 1..24).prop_map(|leaves| {
        let mut dirs = BTreeMap::new();
        dirs.insert(String::new(), false);
        for (path, has_file) in leaves {
            let segments: Vec<&str> = path.split('/').collect();
            for depth in 1..segments.len() {
                dirs.entry(segments[..depth].join("/")).or_insert(false);
            }
            let entry = dirs.entry(path.clone()).or_insert(false);
            *entry |= has_file;
        }
        dirs
    })
}

fn depth(dir: &str) -> usize {
    if dir.is_empty() {
        0
    } else {
        dir.split('/').count()
    }
}

/// Deepest directories first: a valid post-order for the engine.
fn post_order(dirs: &BTreeMap<String, bool>) -> Vec<(&str, bool)> {
    let mut order: Vec<(&str, bool)> = dirs.iter().map(|(d, f)| (d.as_str(), *f)).collect();
    order.sort_by_key(|(dir, _)| (Reverse(depth(dir)), *dir));
    order
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every unit is claimed at most once, by its nearest emitting
    /// ancestor, and the units nobody claimed are exactly the pending ones.
    #[test]
    fn property_units_are_claimed_once_by_nearest_ancestor(dirs in tree()) {
        let mut engine = AggregationEngine::default();
        let patterns = ExcludePatterns::default();

        let mut emitted: Vec<String> = Vec::new();
        let mut claims: BTreeMap<String, String> = BTreeMap::new();
        for (dir, has_file) in post_order(&dirs) {
            let files: Vec<&str> = if has_file { vec!["f.go"] } else { Vec::new() };
            let Some(unit) = engine.visit(&DirPath::new(dir), &files, &patterns) else {
                continue;
            };
            for member in unit.members() {
                if let Member::Unit(child) = member {
                    let previous = claims.insert(child.dir.as_str().to_string(), dir.to_string());
                    prop_assert!(previous.is_none(), "{} claimed twice", child.dir);
                }
            }
            emitted.push(dir.to_string());
        }

        let emitted_set: BTreeSet<&str> = emitted.iter().map(String::as_str).collect();
        for unit in &emitted {
            let unit_path = DirPath::new(unit);
            let nearest = emitted
                .iter()
                .filter(|other| DirPath::new(other.as_str()).is_ancestor_of(&unit_path))
                .max_by_key(|other| depth(other));
            prop_assert_eq!(claims.get(unit), nearest);
        }

        let pending: BTreeSet<&str> = engine.pending().iter().map(DirPath::as_str).collect();
        let unclaimed: BTreeSet<&str> = emitted_set
            .iter()
            .copied()
            .filter(|d| !claims.contains_key(*d))
            .collect();
        prop_assert_eq!(pending, unclaimed);
    }

    /// PROPERTY: a directory emits a unit exactly when it has a file or some
    /// descendant emitted one.
    #[test]
    fn property_emission_follows_content(dirs in tree()) {
        let mut engine = AggregationEngine::default();
        let patterns = ExcludePatterns::default();

        for (dir, has_file) in post_order(&dirs) {
            let files: Vec<&str> = if has_file { vec!["f.go"] } else { Vec::new() };
            let path = DirPath::new(dir);
            let expected = has_file
                || dirs
                    .iter()
                    .any(|(other, f)| *f && path.is_ancestor_of(&DirPath::new(other.as_str())));
            let unit = engine.visit(&path, &files, &patterns);
            prop_assert_eq!(unit.is_some(), expected, "dir {:?}", dir);
        }
    }
}

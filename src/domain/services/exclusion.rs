//! Exclusion-pattern resolution and file filtering
//!
//! A directory's effective patterns are the configured baseline followed by
//! the `module_files_exclude` directives of that directory's own build file.
//! Patterns are never inherited by subdirectories.
//!
//! Patterns apply to file names only. A pattern the `glob` crate cannot parse
//! matches nothing: filtering fails open rather than aborting the walk.

use glob::{MatchOptions, Pattern};

use crate::domain::value_objects::OrderedSet;

/// Patterns ignored in every directory unless the configuration says otherwise
pub const DEFAULT_BASELINE: &[&str] = &[".*"];

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// One exclusion pattern; `compiled` is `None` when the source is malformed.
#[derive(Debug, Clone)]
struct ExcludePattern {
    source: String,
    compiled: Option<Pattern>,
}

impl ExcludePattern {
    fn new(source: String) -> Self {
        let compiled = match Pattern::new(&source) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                tracing::warn!(pattern = %source, error = %err, "ignoring malformed exclude pattern");
                None
            }
        };
        Self { source, compiled }
    }

    fn matches(&self, name: &str) -> bool {
        self.compiled
            .as_ref()
            .is_some_and(|pattern| pattern.matches_with(name, MATCH_OPTIONS))
    }
}

/// Ordered, duplicate-free list of exclusion patterns for one directory.
#[derive(Debug, Clone, Default)]
pub struct ExcludePatterns {
    patterns: Vec<ExcludePattern>,
}

impl ExcludePatterns {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: OrderedSet<String> = patterns.into_iter().map(Into::into).collect();
        Self {
            patterns: unique.into_iter().map(ExcludePattern::new).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Pattern sources in resolution order, malformed ones included.
    pub fn sources(&self) -> Vec<&str> {
        self.patterns.iter().map(|p| p.source.as_str()).collect()
    }

    /// Whether any pattern matches `name`.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(name))
    }
}

/// Merge the baseline with a directory's local directives.
///
/// Directives are appended after the baseline; a pattern that appears twice
/// keeps its first position.
pub fn resolve_patterns<B, D>(baseline: &[B], directives: &[D]) -> ExcludePatterns
where
    B: AsRef<str>,
    D: AsRef<str>,
{
    ExcludePatterns::new(
        baseline
            .iter()
            .map(|p| p.as_ref())
            .chain(directives.iter().map(|p| p.as_ref())),
    )
}

/// Subsequence of `files` whose names match none of `patterns`.
pub fn filter_files<S: AsRef<str>>(files: &[S], patterns: &ExcludePatterns) -> Vec<String> {
    files
        .iter()
        .map(|f| f.as_ref())
        .filter(|name| patterns.is_empty() || !patterns.is_excluded(name))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(list: &[&str]) -> ExcludePatterns {
        ExcludePatterns::new(list.iter().copied())
    }

    #[test]
    fn no_patterns_returns_all_files() {
        let files = ["a.go", "b.go", "c.txt"];
        assert_eq!(filter_files(&files, &patterns(&[])), files);
    }

    #[test]
    fn single_pattern_excludes_matching_files() {
        let files = ["a.go", "b.go", "c.txt"];
        assert_eq!(filter_files(&files, &patterns(&["*.txt"])), ["a.go", "b.go"]);
    }

    #[test]
    fn multiple_patterns_exclude_all_matches() {
        let files = ["a.go", "b.go", "c.txt", "d.md"];
        assert_eq!(
            filter_files(&files, &patterns(&["*.txt", "*.md"])),
            ["a.go", "b.go"]
        );
    }

    #[test]
    fn pattern_matching_nothing_keeps_everything() {
        let files = ["a.go", "b.go"];
        assert_eq!(filter_files(&files, &patterns(&["*.txt"])), ["a.go", "b.go"]);
    }

    #[test]
    fn all_files_excluded() {
        let files = ["a.go", "b.go"];
        assert!(filter_files(&files, &patterns(&["*.go"])).is_empty());
    }

    #[test]
    fn filtering_preserves_input_order() {
        let files = ["z.go", "notes.txt", "a.go", "m.go"];
        assert_eq!(
            filter_files(&files, &patterns(&["*.txt"])),
            ["z.go", "a.go", "m.go"]
        );
    }

    #[test]
    fn question_mark_and_character_classes() {
        let files = ["a1.go", "a22.go", "b1.go", "c1.go"];
        assert_eq!(filter_files(&files, &patterns(&["a?.go"])), ["a22.go", "b1.go", "c1.go"]);
        assert_eq!(filter_files(&files, &patterns(&["[ab]1.go"])), ["a22.go", "c1.go"]);
        assert_eq!(filter_files(&files, &patterns(&["[!a]*"])), ["a1.go", "a22.go"]);
    }

    #[test]
    fn malformed_pattern_fails_open() {
        let files = ["[", "a.go", "b.txt"];
        let set = patterns(&["[", "*.txt"]);
        assert_eq!(set.len(), 2);
        assert_eq!(filter_files(&files, &set), ["[", "a.go"]);
    }

    #[test]
    fn default_baseline_excludes_hidden_files() {
        let files = [".DS_Store", ".gitignore", "BUILD.bazel", "go.mod"];
        let set = resolve_patterns(DEFAULT_BASELINE, &[] as &[&str]);
        assert_eq!(filter_files(&files, &set), ["BUILD.bazel", "go.mod"]);
    }

    #[test]
    fn resolve_appends_directives_after_baseline() {
        let set = resolve_patterns(&[".*", "*.orig"], &["*.txt", ".*"]);
        assert_eq!(set.sources(), vec![".*", "*.orig", "*.txt"]);
    }

    #[test]
    fn resolve_with_empty_inputs_is_empty() {
        let set = resolve_patterns(&[] as &[&str], &[] as &[&str]);
        assert!(set.is_empty());
    }
}

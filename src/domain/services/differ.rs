//! Build file diffs
//!
//! Shows what a dry run would change in a build file.

use similar::{ChangeTag, TextDiff};

/// Lines of unchanged context around each hunk
const CONTEXT_RADIUS: usize = 3;

/// Line-level difference between two versions of one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDiff {
    /// Number of lines added
    pub additions: usize,
    /// Number of lines deleted
    pub deletions: usize,
    /// `git diff`-style unified text; empty when nothing changed
    pub unified: String,
}

impl FileDiff {
    pub fn has_changes(&self) -> bool {
        self.additions > 0 || self.deletions > 0
    }

    /// Short count summary, e.g. "+5, -3"
    pub fn summary(&self) -> String {
        format!("+{}, -{}", self.additions, self.deletions)
    }
}

/// Diff `old` against `new`, labelling both sides with `path`.
pub fn diff_file(path: &str, old: &str, new: &str) -> FileDiff {
    let text_diff = TextDiff::from_lines(old, new);

    let mut diff = FileDiff::default();
    for change in text_diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Delete => diff.deletions += 1,
            ChangeTag::Insert => diff.additions += 1,
            ChangeTag::Equal => {}
        }
    }

    if diff.has_changes() {
        let old_header = format!("a/{}", path);
        let new_header = format!("b/{}", path);
        diff.unified = text_diff
            .unified_diff()
            .context_radius(CONTEXT_RADIUS)
            .header(&old_header, &new_header)
            .to_string();
    }
    diff
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_text_has_no_changes() {
        let diff = diff_file("BUILD.bazel", "a\nb\n", "a\nb\n");
        assert!(!diff.has_changes());
        assert!(diff.unified.is_empty());
    }

    #[test]
    fn counts_added_and_removed_lines() {
        let diff = diff_file("BUILD.bazel", "a\nb\nc\n", "a\nx\ny\nc\n");
        assert_eq!(diff.additions, 2);
        assert_eq!(diff.deletions, 1);
        assert_eq!(diff.summary(), "+2, -1");
    }

    #[test]
    fn unified_text_has_headers_and_hunks() {
        let diff = diff_file("pkg/BUILD.bazel", "", "filegroup()\n");
        assert!(diff.unified.starts_with("--- a/pkg/BUILD.bazel\n+++ b/pkg/BUILD.bazel\n"));
        assert!(diff.unified.contains("@@"));
        assert!(diff.unified.contains("+filegroup()\n"));
    }
}

/// Remove `prefix` from the start of `path`, then at most one separator.
///
/// An empty or non-matching prefix leaves `path` as is. Matching is textual,
/// so `/pa` strips from `/path/x` too.
pub fn strip_path_prefix<'a>(path: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return path;
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest
            .strip_prefix(|c: char| c == '/' || c == std::path::MAIN_SEPARATOR)
            .unwrap_or(rest),
        None => path,
    }
}

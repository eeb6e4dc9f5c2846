//! Pattern-match utility shared by every record builder

use regex::Regex;
use std::collections::HashSet;

/// Apply a single-capture-group pattern to `text` and return the distinct
/// captured values in order of first appearance.
///
/// Later duplicates are dropped, never reordered. No match yields an empty
/// vector; callers pick their own default.
pub fn collect(text: &str, pattern: &Regex) -> Vec<String> {
    let mut seen = HashSet::new();

    pattern
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|value| seen.insert(*value))
        .map(str::to_owned)
        .collect()
}

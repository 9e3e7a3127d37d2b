// Pure text transforms for the name list.

use std::collections::HashMap;

/// Parse raw multi-line input into a name list.
///
/// Splits on newlines, trims surrounding whitespace from each line, and
/// discards empty lines. Insertion order is preserved and duplicates are
/// kept; they are valid entries, flagged only for display.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Count how often each name occurs in the list.
pub fn duplicate_counts(names: &[String]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for name in names {
        *counts.entry(name.clone()).or_insert(0) += 1;
    }
    counts
}

/// Whether the list contains at least one duplicated name.
pub fn has_duplicates(names: &[String]) -> bool {
    duplicate_counts(names).values().any(|&count| count > 1)
}

/// Deduplicate by value, keeping the first occurrence of each name in its
/// original position.
pub fn remove_duplicates(names: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names
        .iter()
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect()
}

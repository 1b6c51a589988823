//! Papers tag content: a comma-separated list of paper IDs.

/// Keep the entries that are non-empty numeric strings, trimmed, in original
/// order. Duplicates are preserved; display policy belongs to the host page.
pub fn parse_ids(content: &str) -> Vec<String> {
    content
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}

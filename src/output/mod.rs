// Output formatting: terminal tables, JSON and Graphviz renderings.

pub mod dot;
pub mod terminal;

use crate::similarity::traits::MatchResult;

/// Render matches as pretty JSON: `[{"pair": [a, b], "similarity": s}, ...]`.
pub fn to_json(matches: &[MatchResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(matches)
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Identities are often full names with accented letters, so this counts
/// characters rather than slicing bytes.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

// Source text normalization: strip comments and blank lines.
//
// Two submissions that differ only in comments or spacing between statements
// should score the same as if neither had them. Normalization removes that
// cosmetic noise before anything is vectorized.
//
// Block comments are removed first (non-greedy, across line breaks). An
// unterminated `/*` swallows everything up to the end of the input. Then any
// line that is blank or holds nothing but a `//` comment is dropped.

use std::sync::LazyLock;

use regex::Regex;

/// A `/* ... */` span, or an unterminated `/*` running to end of input.
static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)/\*.*?(?:\*/|$)").unwrap_or_else(|_| panic!("Invalid block comment regex"))
});

/// Normalize raw source text into its canonical comparison form.
///
/// Pure and infallible: any input (including an empty string) produces a
/// string, possibly empty. Applying it twice gives the same result as once.
pub fn normalize(raw_text: &str) -> String {
    let stripped = strip_block_comments(raw_text);

    stripped
        .split('\n')
        .filter(|line| !is_blank_or_line_comment(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Remove block comments until none remain.
///
/// Removing one span can splice a `/` and a `*` back together, so a single
/// pass is not enough to reach a fixpoint. Every pass removes at least the
/// two opener characters, so the loop terminates.
fn strip_block_comments(text: &str) -> String {
    let mut text = text.to_string();
    while BLOCK_COMMENT.is_match(&text) {
        text = BLOCK_COMMENT.replace_all(&text, "").into_owned();
    }
    text
}

/// True when the line is whitespace only, or whitespace followed by `//`.
fn is_blank_or_line_comment(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with("//")
}

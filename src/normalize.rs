//! Indentation normalization
//!
//! The scanner's patterns are anchored at column zero, so source blocks
//! that arrive indented (template literals, test fixtures, embedded
//! snippets) are dedented before scanning.

/// Remove the common leading whitespace from every line of `text`.
///
/// The minimum indentation across all non-blank lines is computed, and
/// that many leading bytes are removed from every line. Blank lines and
/// lines shorter than the common indent clamp to empty instead of
/// underflowing. Relative indentation between non-blank lines is
/// preserved, and the operation is idempotent.
pub fn dedent(text: &str) -> String {
    let indent = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(usize::MAX);

    text.split('\n')
        .map(|line| line.get(indent..).unwrap_or(""))
        .collect::<Vec<_>>()
        .join("\n")
}

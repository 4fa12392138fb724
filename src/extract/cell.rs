// src/extract/cell.rs

use once_cell::sync::Lazy;
use regex::Regex;

/// `<br>`, `<br/>`, `<br />`, `< BR / >` and friends.
static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<\s*br\s*/?\s*>").expect("Invalid line-break pattern"));

/// Split a leader cell's inner markup into one segment per person.
///
/// Segments come back in cell order, the most senior title first. A cell
/// without any line break is a single segment; empty pieces are kept.
pub fn split_leader_cell(inner_html: &str) -> Vec<&str> {
    LINE_BREAK.split(inner_html).collect()
}

//! Lexical rules shared by schema lines and data records
//!
//! An SJON line is a comma list enclosed in curly braces:
//!
//! ```text
//! {String,String,Integer}
//! # a comment
//! {Team One, Team Two, 3}
//! ```
//!
//! The record body ends at the FIRST closing brace, so a `}` inside a value
//! truncates the record. Splitting follows the historical reader: trailing
//! empty values are dropped.

/// Lines starting with this character are comments.
pub const COMMENT_MARKER: char = '#';

/// Opening record delimiter
pub const RECORD_OPEN: char = '{';

/// Closing record delimiter
pub const RECORD_CLOSE: char = '}';

/// Value separator inside a record body
pub const VALUE_SEPARATOR: char = ',';

/// Returns true if the line is a comment line.
pub fn is_comment(line: &str) -> bool {
    line.starts_with(COMMENT_MARKER)
}

/// Returns the text between the first `{` and the first `}`.
///
/// A line without `{` is read from its start. Returns `None` when there is no
/// `}` at all, or when the first `}` comes before the body start.
pub fn record_body(line: &str) -> Option<&str> {
    let start = line.find(RECORD_OPEN).map_or(0, |pos| pos + RECORD_OPEN.len_utf8());
    let end = line.find(RECORD_CLOSE)?;
    if end < start {
        return None;
    }
    Some(&line[start..end])
}

/// Strips leading and trailing ASCII control characters and spaces.
///
/// Non-breaking and other Unicode spaces are part of the value.
pub fn trim_value(value: &str) -> &str {
    value.trim_matches(|c: char| c <= ' ')
}

/// Splits a record body into its raw, untrimmed values.
///
/// A body without separators is a single value, even when empty. Otherwise
/// trailing empty values are removed, so `"a,b,"` has two values and `","`
/// has none.
pub fn split_values(body: &str) -> Vec<&str> {
    if !body.contains(VALUE_SEPARATOR) {
        return vec![body];
    }

    let mut values: Vec<&str> = body.split(VALUE_SEPARATOR).collect();
    while values.last().is_some_and(|v| v.is_empty()) {
        values.pop();
    }
    values
}

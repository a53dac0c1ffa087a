//! Qualified-name splitting
//!
//! A qualified module name like `com.foo.Bar` encodes an implicit group path
//! (`["com", "foo"]`) plus a short presentable name (`Bar`). This module is
//! the single place that interprets the separator. Splitting is literal: no
//! trimming, no case folding, and empty segments produced by consecutive
//! separators are preserved.

/// Separator between the segments of a qualified module name
pub const NAME_SEPARATOR: char = '.';

/// Split a qualified name into its group path and short name.
///
/// All but the last separator-delimited segment become the path; the last
/// segment is the short name. Total over every input: a name with no
/// separator yields an empty path, and the empty string yields an empty
/// path plus an empty name.
pub fn split_qualified_name(name: &str) -> (Vec<String>, String) {
    let mut segments: Vec<String> = name.split(NAME_SEPARATOR).map(str::to_string).collect();
    // split always yields at least one element
    let short = segments.pop().unwrap_or_default();
    (segments, short)
}

/// The text after the last separator, or the whole name when there is none.
pub fn short_name(name: &str) -> &str {
    name.rsplit(NAME_SEPARATOR).next().unwrap_or(name)
}

/// All separator-delimited segments of a name, short name included.
pub fn name_segments(name: &str) -> Vec<String> {
    name.split(NAME_SEPARATOR).map(str::to_string).collect()
}

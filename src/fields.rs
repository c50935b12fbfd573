//! Field splitting and joining for delimited path and pattern strings.
//!
//! Paths are slash-delimited, patterns comma-delimited. Both normalize the
//! same way: strip the leading and trailing runs of the delimiter, then
//! split the remainder on it.

/// Default token that matches any single field value at its position.
pub const WILDCARD: &str = "*";

/// Default delimiter between fields of a pattern line.
pub const PATTERN_DELIMITER: char = ',';

/// Default delimiter between fields of a path line.
pub const PATH_DELIMITER: char = '/';

/// Split a delimited string into its ordered field sequence.
///
/// Leading and trailing runs of the delimiter are stripped first, so
/// `/a/b/c/` and `a/b/c` produce the same fields. Fields are not validated
/// for emptiness; well-formed input never contains empty fields.
pub fn split_fields(input: &str, delimiter: char) -> Vec<String> {
	input
		.trim_matches(delimiter)
		.split(delimiter)
		.map(|field| field.to_string())
		.collect()
}

/// Join a field sequence back into its delimited string form.
pub fn join_fields(fields: &[String], delimiter: char) -> String {
	fields.join(&delimiter.to_string())
}

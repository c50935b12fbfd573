//! Pattern matching for pathmatch.
//!
//! This module handles:
//! - Compiling pattern lines into field sequences with wildcard positions
//! - Selecting the exact match or the wildcard candidates for a path
//! - Resolving a candidate set to the single best match

pub mod resolver;
pub mod selector;

pub use resolver::best_match;
pub use selector::{CompiledPattern, Selection, compile_patterns, select};

use crate::fields::split_fields;
use crate::profile::MatchProfile;

/// Outcome of matching one path against the pattern list.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
	/// The winning pattern, rendered with the pattern delimiter.
	Matched(String),

	/// No pattern of matching field count covered the path.
	NoMatch,
}

/// Resolve one path line against the compiled pattern list.
///
/// The path is split on the profile's path delimiter; the winning pattern
/// is always rendered with the pattern delimiter, whatever the path looked
/// like on input. A lone candidate is taken directly; several go through
/// the resolver.
pub fn find_match(
	path_line: &str,
	patterns: &[CompiledPattern],
	profile: &MatchProfile,
) -> MatchOutcome {
	let path_fields = split_fields(path_line, profile.path_delimiter);

	match select(&path_fields, patterns) {
		Selection::Exact(pattern) => {
			MatchOutcome::Matched(pattern.render(profile.pattern_delimiter))
		}
		Selection::Candidates(candidates) => match candidates.as_slice() {
			[] => MatchOutcome::NoMatch,
			[single] => MatchOutcome::Matched(single.render(profile.pattern_delimiter)),
			_ => match best_match(&candidates) {
				Some(winner) => MatchOutcome::Matched(winner.render(profile.pattern_delimiter)),
				None => MatchOutcome::NoMatch,
			},
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn patterns(lines: &[&str]) -> Vec<CompiledPattern> {
		let lines: Vec<String> = lines.iter().map(|line| line.to_string()).collect();
		compile_patterns(&lines, &MatchProfile::default())
	}

	fn matched(text: &str) -> MatchOutcome {
		MatchOutcome::Matched(text.to_string())
	}

	#[test]
	fn test_exact_match_wins_over_wildcards() {
		let patterns = patterns(&["x,y,z", "a,*,c", "a,b,c"]);
		let outcome = find_match("a/b/c", &patterns, &MatchProfile::default());
		assert_eq!(outcome, matched("a,b,c"));
	}

	#[test]
	fn test_single_candidate_emitted_directly() {
		let patterns = patterns(&["a,*,c"]);
		let outcome = find_match("a/b/c", &patterns, &MatchProfile::default());
		assert_eq!(outcome, matched("a,*,c"));
	}

	#[test]
	fn test_tie_break_between_candidates() {
		let patterns = patterns(&["*,b,c", "a,*,c"]);
		let outcome = find_match("a/b/c", &patterns, &MatchProfile::default());
		assert_eq!(outcome, matched("a,*,c"));
	}

	#[test]
	fn test_no_match() {
		let patterns = patterns(&["a,b", "x,y,z"]);
		let outcome = find_match("a/b/c", &patterns, &MatchProfile::default());
		assert_eq!(outcome, MatchOutcome::NoMatch);
	}

	#[test]
	fn test_output_uses_pattern_delimiter() {
		let patterns = patterns(&["a,*,c"]);
		let outcome = find_match("/a/b/c/", &patterns, &MatchProfile::default());
		// Rendered with commas even though the path came in with slashes.
		assert_eq!(outcome, matched("a,*,c"));
	}

	#[test]
	fn test_repeated_resolution_is_stable() {
		let patterns = patterns(&["*,b,c", "a,*,c", "a,b,c"]);
		let profile = MatchProfile::default();
		let first = find_match("a/b/c", &patterns, &profile);
		let second = find_match("a/b/c", &patterns, &profile);
		assert_eq!(first, second);
	}
}

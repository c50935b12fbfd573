use crate::fields::{join_fields, split_fields};
use crate::profile::MatchProfile;

/// A pattern compiled for repeated matching against path fields.
///
/// Wildcard positions are recorded once at compile time; the scan over the
/// pattern list per path then only compares fields.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledPattern {
	/// The pattern's fields, in order.
	pub fields: Vec<String>,

	/// Zero-based positions of wildcard fields.
	pub wildcard_positions: Vec<usize>,
}

impl CompiledPattern {
	/// Compile a raw pattern line under the given profile.
	pub fn compile(line: &str, profile: &MatchProfile) -> Self {
		let fields = split_fields(line, profile.pattern_delimiter);
		let wildcard_positions = fields
			.iter()
			.enumerate()
			.filter(|(_, field)| **field == profile.wildcard)
			.map(|(position, _)| position)
			.collect();

		CompiledPattern {
			fields,
			wildcard_positions,
		}
	}

	/// Number of wildcard fields in this pattern.
	pub fn wildcard_count(&self) -> usize {
		self.wildcard_positions.len()
	}

	/// Sum of the zero-based wildcard positions, the tie-break metric.
	pub fn position_sum(&self) -> usize {
		self.wildcard_positions.iter().sum()
	}

	/// Check whether this pattern equals the path field for field.
	pub fn is_exact_match(&self, path_fields: &[String]) -> bool {
		self.fields == path_fields
	}

	/// Check whether this pattern is a wildcard candidate for the path:
	/// same field count, at least one wildcard, and every position either
	/// equal or covered by a wildcard. The coverage test is the counting
	/// identity: matched fields + wildcard fields == total fields.
	pub fn is_candidate(&self, path_fields: &[String]) -> bool {
		if self.fields.len() != path_fields.len() || self.wildcard_positions.is_empty() {
			return false;
		}

		let matched_fields = path_fields
			.iter()
			.zip(&self.fields)
			.filter(|(path_field, pattern_field)| path_field == pattern_field)
			.count();

		matched_fields + self.wildcard_count() == path_fields.len()
	}

	/// Render the pattern back into its delimited string form.
	pub fn render(&self, delimiter: char) -> String {
		join_fields(&self.fields, delimiter)
	}
}

/// Compile all pattern lines, preserving input order and duplicates.
pub fn compile_patterns(lines: &[String], profile: &MatchProfile) -> Vec<CompiledPattern> {
	lines
		.iter()
		.map(|line| CompiledPattern::compile(line, profile))
		.collect()
}

/// Result of scanning the pattern list for one path.
#[derive(Debug, PartialEq)]
pub enum Selection<'a> {
	/// A pattern equal to the path field for field. Scanning stopped here.
	Exact(&'a CompiledPattern),

	/// All wildcard candidates, in input order. May be empty.
	Candidates(Vec<&'a CompiledPattern>),
}

/// Scan the pattern list in input order for the given path fields.
///
/// An exact match wins immediately: the scan stops and any candidates
/// collected on earlier iterations are discarded. Candidates never
/// short-circuit, since a later exact match must still override them.
pub fn select<'a>(path_fields: &[String], patterns: &'a [CompiledPattern]) -> Selection<'a> {
	let mut candidates = Vec::new();

	for pattern in patterns {
		if pattern.is_exact_match(path_fields) {
			return Selection::Exact(pattern);
		}

		if pattern.is_candidate(path_fields) {
			candidates.push(pattern);
		}
	}

	Selection::Candidates(candidates)
}

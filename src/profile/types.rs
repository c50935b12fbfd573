use crate::error::PathmatchError;
use crate::fields;
use serde::Deserialize;

/// Matching profile from a `.pathmatch.toml` file.
///
/// Every field has a built-in default, so an empty file (or no file at all)
/// yields the stock comma/slash/`*` behavior.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MatchProfile {
	/// Token that matches any single field value at its position.
	#[serde(default = "default_wildcard")]
	pub wildcard: String,

	/// Delimiter between fields of a pattern line.
	#[serde(default = "default_pattern_delimiter")]
	pub pattern_delimiter: char,

	/// Delimiter between fields of a path line.
	#[serde(default = "default_path_delimiter")]
	pub path_delimiter: char,

	/// Text emitted for a path no pattern covers.
	#[serde(default = "default_no_match_text")]
	pub no_match_text: String,
}

fn default_wildcard() -> String {
	fields::WILDCARD.to_string()
}

fn default_pattern_delimiter() -> char {
	fields::PATTERN_DELIMITER
}

fn default_path_delimiter() -> char {
	fields::PATH_DELIMITER
}

fn default_no_match_text() -> String {
	"NO MATCH".to_string()
}

impl Default for MatchProfile {
	fn default() -> Self {
		MatchProfile {
			wildcard: default_wildcard(),
			pattern_delimiter: default_pattern_delimiter(),
			path_delimiter: default_path_delimiter(),
			no_match_text: default_no_match_text(),
		}
	}
}

impl MatchProfile {
	/// Validate that the profile values can coexist.
	///
	/// The wildcard must be a non-empty token that survives field splitting
	/// intact, and delimiters must be single ASCII characters.
	pub fn validate(&self) -> Result<(), PathmatchError> {
		if self.wildcard.is_empty() {
			return Err(PathmatchError::InvalidProfileValue {
				field: "wildcard".to_string(),
				value: self.wildcard.clone(),
			});
		}

		if self.wildcard.contains(self.pattern_delimiter)
			|| self.wildcard.contains(self.path_delimiter)
		{
			return Err(PathmatchError::InvalidProfileValue {
				field: "wildcard".to_string(),
				value: self.wildcard.clone(),
			});
		}

		if !self.pattern_delimiter.is_ascii() {
			return Err(PathmatchError::InvalidProfileValue {
				field: "pattern-delimiter".to_string(),
				value: self.pattern_delimiter.to_string(),
			});
		}

		if !self.path_delimiter.is_ascii() {
			return Err(PathmatchError::InvalidProfileValue {
				field: "path-delimiter".to_string(),
				value: self.path_delimiter.to_string(),
			});
		}

		Ok(())
	}
}

use crate::error::{PathmatchError, Result};
use crate::profile::types::MatchProfile;
use std::path::Path;

/// Parse a profile file from the given path.
pub fn parse_profile_file(path: &Path) -> Result<MatchProfile> {
	let content =
		std::fs::read_to_string(path).map_err(|source| PathmatchError::ProfileReadError {
			path: path.to_path_buf(),
			source,
		})?;

	parse_profile_str(&content, path)
}

/// Parse a profile from a string (useful for testing).
pub fn parse_profile_str(content: &str, path: &Path) -> Result<MatchProfile> {
	let profile: MatchProfile =
		toml::from_str(content).map_err(|source| PathmatchError::ProfileParseError {
			path: path.to_path_buf(),
			source,
		})?;

	// Validate the parsed profile
	profile.validate()?;

	Ok(profile)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	#[test]
	fn test_parse_empty_profile_uses_defaults() {
		let content = "";
		let path = PathBuf::from("test.toml");
		let profile = parse_profile_str(content, &path).unwrap();

		assert_eq!(profile, MatchProfile::default());
	}

	#[test]
	fn test_parse_full_profile() {
		let content = r#"
wildcard = "?"
pattern-delimiter = ";"
path-delimiter = "."
no-match-text = "none"
"#;
		let path = PathBuf::from("test.toml");
		let profile = parse_profile_str(content, &path).unwrap();

		assert_eq!(profile.wildcard, "?");
		assert_eq!(profile.pattern_delimiter, ';');
		assert_eq!(profile.path_delimiter, '.');
		assert_eq!(profile.no_match_text, "none");
	}

	#[test]
	fn test_parse_partial_profile_keeps_defaults() {
		let content = r#"
no-match-text = "no pattern matched"
"#;
		let path = PathBuf::from("test.toml");
		let profile = parse_profile_str(content, &path).unwrap();

		assert_eq!(profile.wildcard, "*");
		assert_eq!(profile.pattern_delimiter, ',');
		assert_eq!(profile.no_match_text, "no pattern matched");
	}

	#[test]
	fn test_parse_invalid_toml() {
		let content = "wildcard = [[[";
		let path = PathBuf::from("test.toml");
		let result = parse_profile_str(content, &path);

		assert!(matches!(
			result,
			Err(PathmatchError::ProfileParseError { .. })
		));
	}

	#[test]
	fn test_parse_multi_char_delimiter_rejected() {
		let content = r#"
pattern-delimiter = "::"
"#;
		let path = PathBuf::from("test.toml");
		let result = parse_profile_str(content, &path);

		// A char field only accepts a single character.
		assert!(matches!(
			result,
			Err(PathmatchError::ProfileParseError { .. })
		));
	}

	#[test]
	fn test_parse_rejects_invalid_wildcard() {
		let content = r#"
wildcard = ""
"#;
		let path = PathBuf::from("test.toml");
		let result = parse_profile_str(content, &path);

		assert!(matches!(
			result,
			Err(PathmatchError::InvalidProfileValue { .. })
		));
	}

	#[test]
	fn test_parse_missing_file() {
		let result = parse_profile_file(Path::new("/nonexistent/pathmatch.toml"));
		assert!(matches!(
			result,
			Err(PathmatchError::ProfileReadError { .. })
		));
	}
}

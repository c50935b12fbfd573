use std::path::PathBuf;

/// Library-level structured errors for pathmatch.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum PathmatchError {
	#[error("Failed to read input")]
	InputRead {
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write output")]
	OutputWrite {
		#[source]
		source: std::io::Error,
	},

	#[error("Missing {section} count header")]
	MissingCount { section: String },

	#[error("Invalid {section} count: {line:?}")]
	InvalidCount {
		section: String,
		line: String,
		#[source]
		source: std::num::ParseIntError,
	},

	#[error("Failed to read profile file: {path}")]
	ProfileReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse profile file: {path}")]
	ProfileParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid profile value for {field}: {value:?}")]
	InvalidProfileValue { field: String, value: String },

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using PathmatchError.
pub type Result<T> = std::result::Result<T, PathmatchError>;

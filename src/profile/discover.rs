use crate::error::{PathmatchError, Result};
use crate::profile::parser::parse_profile_file;
use crate::profile::types::MatchProfile;
use std::path::{Path, PathBuf};

/// File name looked up during profile discovery.
pub const PROFILE_FILE_NAME: &str = ".pathmatch.toml";

/// Where an effective profile came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileSource {
	/// Loaded from a profile file at this path.
	File(PathBuf),

	/// No profile file found; built-in defaults.
	BuiltIn,
}

/// A profile together with its source, for display and debugging.
#[derive(Debug, Clone)]
pub struct LoadedProfile {
	/// The effective profile.
	pub profile: MatchProfile,

	/// Where the profile was loaded from.
	pub source: ProfileSource,
}

/// Discover the effective profile for a run starting in `start_dir`.
///
/// The lookup order is:
/// 1. `.pathmatch.toml` in `start_dir`, then each parent directory
///    (nearest file wins).
/// 2. `~/.pathmatch.toml`.
/// 3. Built-in defaults.
///
/// A file that exists but fails to parse or validate is an error; an absent
/// file is not.
pub fn discover_profile(start_dir: &Path) -> Result<LoadedProfile> {
	if let Some(path) = find_profile_above(start_dir) {
		return load_profile_file(&path);
	}

	// Fall back to the user profile. A missing home directory just means
	// there is no user profile to find.
	if let Some(home_dir) = dirs::home_dir() {
		let user_path = home_dir.join(PROFILE_FILE_NAME);
		if user_path.exists() {
			return load_profile_file(&user_path);
		}
	}

	Ok(LoadedProfile {
		profile: MatchProfile::default(),
		source: ProfileSource::BuiltIn,
	})
}

/// Load a profile from an explicit file path.
pub fn load_profile_file(path: &Path) -> Result<LoadedProfile> {
	let profile = parse_profile_file(path)?;
	Ok(LoadedProfile {
		profile,
		source: ProfileSource::File(path.to_path_buf()),
	})
}

/// Find the nearest profile file in `start_dir` or any of its parents.
fn find_profile_above(start_dir: &Path) -> Option<PathBuf> {
	let mut current_dir = start_dir.to_path_buf();

	loop {
		let profile_path = current_dir.join(PROFILE_FILE_NAME);
		if profile_path.exists() {
			return Some(profile_path);
		}

		// Move to parent directory
		if let Some(parent) = current_dir.parent() {
			current_dir = parent.to_path_buf();
		} else {
			return None;
		}
	}
}

/// Get the path to the user's profile file.
pub fn user_profile_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(PathmatchError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(PROFILE_FILE_NAME))
}

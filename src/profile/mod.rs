//! Matching profile loading for pathmatch.
//!
//! This module handles:
//! - TOML profile file parsing
//! - Directory-walk profile discovery
//! - Built-in default profile values

pub mod discover;
pub mod parser;
pub mod types;

pub use discover::{
	LoadedProfile, PROFILE_FILE_NAME, ProfileSource, discover_profile, load_profile_file,
	user_profile_path,
};
pub use parser::{parse_profile_file, parse_profile_str};
pub use types::MatchProfile;

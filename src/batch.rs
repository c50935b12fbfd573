//! Batch driver: read the pattern block, then resolve each path line.
//!
//! The pattern list is loaded once and stays immutable for the whole run.
//! Paths are consumed one line at a time and each result is written before
//! the next path is read, so output order always equals input order.

use crate::error::{PathmatchError, Result};
use crate::input::{InputLines, PATH_SECTION, PATTERN_SECTION};
use crate::matcher::{MatchOutcome, compile_patterns, find_match};
use crate::profile::MatchProfile;
use std::io::{BufRead, Write};

/// Run the matcher over one input stream, one result line per path.
pub fn process<R: BufRead, W: Write>(
	reader: R,
	writer: &mut W,
	profile: &MatchProfile,
) -> Result<()> {
	let mut input = InputLines::new(reader);

	let pattern_count = input.read_count(PATTERN_SECTION)?;
	let pattern_lines = input.read_block(pattern_count)?;
	let patterns = compile_patterns(&pattern_lines, profile);

	let path_count = input.read_count(PATH_SECTION)?;
	for _ in 0..path_count {
		let Some(path_line) = input.next_line()? else {
			break;
		};

		let result = match find_match(&path_line, &patterns, profile) {
			MatchOutcome::Matched(rendered) => rendered,
			MatchOutcome::NoMatch => profile.no_match_text.clone(),
		};

		writeln!(writer, "{result}").map_err(|source| PathmatchError::OutputWrite { source })?;
	}

	Ok(())
}

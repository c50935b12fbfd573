//! Counted block reading for the two-phase input format.
//!
//! The input is line-oriented: an integer count header, then up to that many
//! pattern lines, then a second count header and up to that many path lines.
//! Counts are trusted as upper bounds only; a stream that ends early simply
//! yields fewer lines. A header that is missing or not a non-negative
//! integer is fatal.

use crate::error::{PathmatchError, Result};
use std::io::BufRead;

/// Section label for the pattern block, used in count-header errors.
pub const PATTERN_SECTION: &str = "pattern";

/// Section label for the path block, used in count-header errors.
pub const PATH_SECTION: &str = "path";

/// Line reader with count-header parsing and bounded block reads.
#[derive(Debug)]
pub struct InputLines<R> {
	lines: std::io::Lines<R>,
}

impl<R: BufRead> InputLines<R> {
	pub fn new(reader: R) -> Self {
		InputLines {
			lines: reader.lines(),
		}
	}

	/// Read the next line, or `None` at end of input.
	pub fn next_line(&mut self) -> Result<Option<String>> {
		match self.lines.next() {
			Some(Ok(line)) => Ok(Some(line)),
			Some(Err(source)) => Err(PathmatchError::InputRead { source }),
			None => Ok(None),
		}
	}

	/// Read and parse the count header for the given section.
	pub fn read_count(&mut self, section: &str) -> Result<usize> {
		let line = self
			.next_line()?
			.ok_or_else(|| PathmatchError::MissingCount {
				section: section.to_string(),
			})?;

		line.trim()
			.parse::<usize>()
			.map_err(|source| PathmatchError::InvalidCount {
				section: section.to_string(),
				line,
				source,
			})
	}

	/// Read up to `count` lines, stopping early at end of input.
	pub fn read_block(&mut self, count: usize) -> Result<Vec<String>> {
		let mut block = Vec::with_capacity(count);
		for _ in 0..count {
			match self.next_line()? {
				Some(line) => block.push(line),
				None => break,
			}
		}
		Ok(block)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	fn input(text: &str) -> InputLines<Cursor<&str>> {
		InputLines::new(Cursor::new(text))
	}

	#[test]
	fn test_read_count_parses_header() {
		let mut lines = input("3\n");
		assert_eq!(lines.read_count(PATTERN_SECTION).unwrap(), 3);
	}

	#[test]
	fn test_read_count_tolerates_surrounding_whitespace() {
		let mut lines = input("  7  \n");
		assert_eq!(lines.read_count(PATTERN_SECTION).unwrap(), 7);
	}

	#[test]
	fn test_read_count_missing_header() {
		let mut lines = input("");
		match lines.read_count(PATH_SECTION).unwrap_err() {
			PathmatchError::MissingCount { section } => assert_eq!(section, "path"),
			other => panic!("Expected MissingCount, got {other:?}"),
		}
	}

	#[test]
	fn test_read_count_rejects_non_integer() {
		let mut lines = input("three\n");
		match lines.read_count(PATTERN_SECTION).unwrap_err() {
			PathmatchError::InvalidCount { section, line, .. } => {
				assert_eq!(section, "pattern");
				assert_eq!(line, "three");
			}
			other => panic!("Expected InvalidCount, got {other:?}"),
		}
	}

	#[test]
	fn test_read_count_rejects_negative() {
		let mut lines = input("-1\n");
		assert!(matches!(
			lines.read_count(PATTERN_SECTION),
			Err(PathmatchError::InvalidCount { .. })
		));
	}

	#[test]
	fn test_read_block_takes_declared_count() {
		let mut lines = input("a\nb\nc\nd\n");
		let block = lines.read_block(3).unwrap();
		assert_eq!(block, vec!["a", "b", "c"]);
		// The fourth line is still available for the next block.
		assert_eq!(lines.next_line().unwrap(), Some("d".to_string()));
	}

	#[test]
	fn test_read_block_stops_at_end_of_input() {
		let mut lines = input("a\nb\n");
		let block = lines.read_block(5).unwrap();
		assert_eq!(block, vec!["a", "b"]);
	}

	#[test]
	fn test_read_block_zero_count() {
		let mut lines = input("a\n");
		assert!(lines.read_block(0).unwrap().is_empty());
		assert_eq!(lines.next_line().unwrap(), Some("a".to_string()));
	}
}

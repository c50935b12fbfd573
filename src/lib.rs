//! Pathmatch - CLI tool for matching slash-delimited paths against
//! comma-delimited wildcard patterns.
//!
//! This library provides the core functionality for pathmatch, including:
//! - Field splitting and joining for delimited strings
//! - Pattern compilation, candidate selection, and best-match resolution
//! - Counted two-phase input reading with lenient short-input behavior
//! - Matching profile parsing and discovery
//!
//! # Example
//!
//! ```
//! use pathmatch_cli::batch::process;
//! use pathmatch_cli::profile::MatchProfile;
//! use std::io::Cursor;
//!
//! let input = "2\na,*,c\n*,b,c\n1\n/a/b/c/\n";
//! let mut output = Vec::new();
//! process(Cursor::new(input), &mut output, &MatchProfile::default()).unwrap();
//!
//! assert_eq!(output, b"a,*,c\n");
//! ```

pub mod batch;
pub mod error;
pub mod fields;
pub mod input;
pub mod matcher;
pub mod profile;

pub use error::{PathmatchError, Result};

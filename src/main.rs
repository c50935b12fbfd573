use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use pathmatch_cli::batch::process;
use pathmatch_cli::profile::{
	LoadedProfile, ProfileSource, discover_profile, load_profile_file, user_profile_path,
};

#[derive(Parser)]
#[command(name = "pathmatch")]
#[command(
	author,
	version,
	about = "Match slash-delimited paths against comma-delimited wildcard patterns"
)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Read the pattern and path blocks from FILE instead of standard input
	#[arg(value_name = "FILE")]
	input: Option<PathBuf>,

	/// Use an explicit profile file instead of the discovered one
	#[arg(long, value_name = "FILE")]
	profile: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
	/// Profile management commands
	Profile {
		#[command(subcommand)]
		action: ProfileAction,
	},
}

#[derive(Subcommand)]
enum ProfileAction {
	/// Display the effective profile and where it came from
	Show,
	/// Check the discovered profile file for errors without matching anything
	Validate,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	// Handle subcommands
	if let Some(command) = cli.command {
		return match command {
			Commands::Profile { action } => match action {
				ProfileAction::Show => handle_profile_show(),
				ProfileAction::Validate => handle_profile_validate(),
			},
		};
	}

	handle_match(cli.input.as_deref(), cli.profile.as_deref())
}

fn handle_match(input: Option<&Path>, profile_path: Option<&Path>) -> Result<ExitCode> {
	let loaded = load_effective_profile(profile_path)?;

	let stdout = io::stdout();
	let mut out = stdout.lock();

	match input {
		Some(path) => {
			let file =
				File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
			process(BufReader::new(file), &mut out, &loaded.profile)
				.with_context(|| format!("Failed to process {}", path.display()))?;
		}
		None => {
			let stdin = io::stdin();
			process(stdin.lock(), &mut out, &loaded.profile)
				.context("Failed to process standard input")?;
		}
	}

	out.flush().context("Failed to flush output")?;
	Ok(ExitCode::SUCCESS)
}

fn load_effective_profile(profile_path: Option<&Path>) -> Result<LoadedProfile> {
	if let Some(path) = profile_path {
		return load_profile_file(path)
			.with_context(|| format!("Failed to load profile {}", path.display()));
	}

	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	discover_profile(&cwd).context("Failed to discover profile")
}

fn handle_profile_show() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let loaded = discover_profile(&cwd).context("Failed to discover profile")?;

	println!("Effective profile:");
	println!("  wildcard: {}", loaded.profile.wildcard);
	println!("  pattern-delimiter: {}", loaded.profile.pattern_delimiter);
	println!("  path-delimiter: {}", loaded.profile.path_delimiter);
	println!("  no-match-text: {}", loaded.profile.no_match_text);

	match loaded.source {
		ProfileSource::File(ref path) => println!("Source: {}", path.display()),
		ProfileSource::BuiltIn => println!("Source: built-in defaults"),
	}
	println!();

	// Show user profile path
	if let Ok(user_path) = user_profile_path() {
		println!("User profile path: {}", user_path.display());
		if user_path.exists() {
			println!("  (exists)");
		} else {
			println!("  (not found)");
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_profile_validate() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	match discover_profile(&cwd) {
		Ok(loaded) => {
			match loaded.source {
				ProfileSource::File(ref path) => {
					println!("Profile file is valid: {}", path.display());
				}
				ProfileSource::BuiltIn => {
					println!("No profile file found; built-in defaults apply.");
				}
			}
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Profile error: {e}");
			Ok(ExitCode::FAILURE)
		}
	}
}

use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use stanza_cli::Commands;
use stanza_cli::StanzaCli;
use stanza_core::AnyEmptyResult;
use stanza_core::AnyResult;
use stanza_core::ProfileSet;
use stanza_core::SourceKind;
use stanza_core::StanzaError;
use stanza_core::loader;
use tracing_subscriber::EnvFilter;

fn main() {
	let args = StanzaCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();

	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.init();

	// Install miette's handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Profiles) => run_profiles(&args),
		Some(Commands::Get { profile, key }) => run_get(&args, profile, key),
		Some(Commands::Dump) => run_dump(&args),
		None => {
			eprintln!("No subcommand specified. Run `stanza --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Render stanza errors through miette for diagnostic codes and help
		// text; anything else gets a plain prefix.
		match e.downcast::<StanzaError>() {
			Ok(err) => {
				let report: miette::Report = (*err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				if use_color {
					eprintln!("{} {e}", "error:".red());
				} else {
					eprintln!("error: {e}");
				}
			}
		}
		process::exit(2);
	}
}

fn run_profiles(args: &StanzaCli) -> AnyEmptyResult {
	let set = load_profile_set(args)?;

	let mut names: Vec<&str> = set.profile_names().collect();
	names.sort_unstable();
	for name in names {
		println!("{name}");
	}

	Ok(())
}

fn run_get(args: &StanzaCli, profile: &str, key: &str) -> AnyEmptyResult {
	let set = load_profile_set(args)?;

	let section = set
		.profile(profile)
		.ok_or_else(|| StanzaError::MissingProfile(profile.to_string()))?;
	let value = section
		.property(key)
		.ok_or_else(|| StanzaError::MissingProperty {
			profile: profile.to_string(),
			key: key.to_string(),
		})?;

	println!("{value}");
	Ok(())
}

fn run_dump(args: &StanzaCli) -> AnyEmptyResult {
	let set = load_profile_set(args)?;
	println!("{}", serde_json::to_string_pretty(&set)?);

	Ok(())
}

/// Build the merged set from the explicitly given paths, falling back to the
/// default locations. An explicit path must exist; a default location that
/// does not exist contributes nothing.
fn load_profile_set(args: &StanzaCli) -> AnyResult<ProfileSet> {
	let mut sources = Vec::new();

	let locations = [
		(
			args.config.as_ref(),
			loader::config_file_location(),
			SourceKind::Configuration,
		),
		(
			args.credentials.as_ref(),
			loader::credentials_file_location(),
			SourceKind::Credentials,
		),
	];

	for (explicit, default, kind) in locations {
		match explicit {
			Some(path) => sources.push(loader::read_source(path, kind)?),
			None => {
				let Some(path) = default else { continue };
				if path.is_file() {
					sources.push(loader::read_source(&path, kind)?);
				}
			}
		}
	}

	Ok(ProfileSet::aggregate(sources))
}

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Inspect merged profile configuration from stanza files.",
	long_about = "stanza parses profile-style configuration files (a configuration file and an \
	              optional credentials file), merges them with the credentials file taking \
	              precedence, and lets you inspect the result.\n\nFile locations are resolved \
	              from --config/--credentials, then the STANZA_CONFIG_FILE and \
	              STANZA_CREDENTIALS_FILE environment variables, then ~/.stanza/config and \
	              ~/.stanza/credentials."
)]
pub struct StanzaCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the configuration file. A file given here must exist.
	#[arg(long, global = true)]
	pub config: Option<PathBuf>,

	/// Path to the credentials file. A file given here must exist.
	#[arg(long, global = true)]
	pub credentials: Option<PathBuf>,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// List the names of all merged profiles, sorted.
	Profiles,
	/// Print the value of one profile property.
	///
	/// Exits with a non-zero status when the profile or the property does not
	/// exist in the merged configuration.
	Get {
		/// The profile name to look up.
		profile: String,
		/// The property key within that profile.
		key: String,
	},
	/// Print the entire merged model as pretty JSON.
	Dump,
}

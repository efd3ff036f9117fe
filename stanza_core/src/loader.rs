//! Filesystem glue: locating and reading the well-known stanza files.
//!
//! The parse/merge core only ever sees text; everything filesystem-shaped
//! lives here. Two files are recognized: a configuration file and a
//! credentials file, each overridable through an environment variable and
//! otherwise found under the home directory.

use std::ffi::OsString;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;

use crate::ParsedSource;
use crate::SourceKind;
use crate::StanzaResult;
use crate::parser::parse_source;

/// Environment variable overriding the configuration file location.
pub const CONFIG_FILE_ENV: &str = "STANZA_CONFIG_FILE";
/// Environment variable overriding the credentials file location.
pub const CREDENTIALS_FILE_ENV: &str = "STANZA_CREDENTIALS_FILE";

const CONFIG_FILE_NAME: &str = "config";
const CREDENTIALS_FILE_NAME: &str = "credentials";

/// Where the configuration file is expected: `$STANZA_CONFIG_FILE` if set,
/// else `$HOME/.stanza/config`. `None` when neither is available.
pub fn config_file_location() -> Option<PathBuf> {
	resolve_location(
		std::env::var_os(CONFIG_FILE_ENV),
		dirs::home_dir(),
		CONFIG_FILE_NAME,
	)
}

/// Where the credentials file is expected: `$STANZA_CREDENTIALS_FILE` if
/// set, else `$HOME/.stanza/credentials`. `None` when neither is available.
pub fn credentials_file_location() -> Option<PathBuf> {
	resolve_location(
		std::env::var_os(CREDENTIALS_FILE_ENV),
		dirs::home_dir(),
		CREDENTIALS_FILE_NAME,
	)
}

/// Environment override wins over the home-directory default; an empty
/// override is treated as unset.
pub(crate) fn resolve_location(
	env_value: Option<OsString>,
	home: Option<PathBuf>,
	file_name: &str,
) -> Option<PathBuf> {
	if let Some(value) = env_value {
		if !value.is_empty() {
			return Some(PathBuf::from(value));
		}
	}

	home.map(|home| home.join(".stanza").join(file_name))
}

/// Read one file to text and parse it as a source of the given kind.
pub fn read_source(path: &Path, kind: SourceKind) -> StanzaResult<ParsedSource> {
	let text = std::fs::read_to_string(path)?;
	parse_source(&text, kind)
}

/// Load whichever of the two default files exist, in configuration-then-
/// credentials order so the credentials file takes merge precedence. A
/// missing file contributes nothing; an unreadable or malformed file is an
/// error.
pub fn default_sources() -> StanzaResult<Vec<ParsedSource>> {
	let locations = [
		(config_file_location(), SourceKind::Configuration),
		(credentials_file_location(), SourceKind::Credentials),
	];

	let mut sources = Vec::new();
	for (location, kind) in locations {
		let Some(path) = location else {
			continue;
		};
		if !path.is_file() {
			debug!("skipping {:?} source: `{}` does not exist", kind, path.display());
			continue;
		}
		sources.push(read_source(&path, kind)?);
	}

	Ok(sources)
}

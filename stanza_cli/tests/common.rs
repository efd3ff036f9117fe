use assert_cmd::Command;

/// A `stanza` command with color disabled and the default file locations
/// pointed at paths that never exist, so the host environment cannot leak
/// into test results.
pub fn stanza_cmd() -> Command {
	let mut cmd = Command::cargo_bin("stanza").unwrap_or_else(|e| panic!("cargo bin: {e}"));
	cmd.env("NO_COLOR", "1");
	cmd.env("STANZA_CONFIG_FILE", "/nonexistent/stanza/config");
	cmd.env("STANZA_CREDENTIALS_FILE", "/nonexistent/stanza/credentials");
	cmd
}

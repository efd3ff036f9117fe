mod common;

use serde_json::Value;
use stanza_core::AnyEmptyResult;

#[test]
fn dump_emits_the_merged_model_as_json() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let config = tmp.path().join("config");
	std::fs::write(
		&config,
		"[profile foo]\nregion = eu-west-1\n[session ci]\ntoken_url = https://example.com\n",
	)?;

	let mut cmd = common::stanza_cmd();
	let assert = cmd
		.arg("dump")
		.arg("--config")
		.arg(&config)
		.assert()
		.success();

	let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
	let json: Value = serde_json::from_str(&stdout)?;

	assert_eq!(json["profiles"]["foo"]["properties"]["region"], "eu-west-1");
	assert_eq!(
		json["sections"]["session"]["ci"]["properties"]["token_url"],
		"https://example.com"
	);

	Ok(())
}

#[test]
fn dump_fails_on_malformed_input() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let config = tmp.path().join("config");
	std::fs::write(&config, "[profile foo\nregion = eu-west-1\n")?;

	let mut cmd = common::stanza_cmd();
	let _ = cmd
		.arg("dump")
		.arg("--config")
		.arg(&config)
		.assert()
		.failure()
		.code(2)
		.stderr(predicates::str::contains("must end with ']'"));

	Ok(())
}

use std::fs;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, is_empty};
use tempfile::TempDir;

fn cmd() -> Command {
	Command::new(assert_cmd::cargo::cargo_bin!("act2hex"))
}

fn rgb_act() -> Vec<u8> {
	let mut data = vec![255, 0, 0, 0, 255, 0, 0, 0, 255];
	data.resize(768, 0);
	data
}

#[test]
fn prints_one_line_per_color() {
	let temp = TempDir::new().unwrap();
	let input = temp.path().join("palette.act");
	fs::write(&input, rgb_act()).unwrap();

	let output = cmd().arg(&input).output().unwrap();
	assert!(output.status.success());

	let stdout = String::from_utf8(output.stdout).unwrap();
	let lines = stdout.lines().collect::<Vec<&str>>();
	assert_eq!(lines.len(), 256);
	assert_eq!(lines[..4], ["#FF0000", "#00FF00", "#0000FF", "#000000"]);
	assert!(stdout.ends_with("#000000\n"));
}

#[test]
fn positional_and_flag_limits() {
	let temp = TempDir::new().unwrap();
	let input = temp.path().join("palette.act");
	fs::write(&input, rgb_act()).unwrap();

	cmd().arg(&input).arg("3")
		.assert()
		.success()
		.stdout("#FF0000\n#00FF00\n#0000FF\n");

	cmd().arg(&input).args(["-n", "2"])
		.assert()
		.success()
		.stdout("#FF0000\n#00FF00\n");

	cmd().arg(&input).arg("0")
		.assert()
		.success()
		.stdout(is_empty());
}

#[test]
fn reads_stdin_and_ignores_trailer() {
	let mut data = rgb_act();
	data.extend_from_slice(&[0x01, 0x00, 0xFF, 0xFF]);

	cmd().args(["-", "1"])
		.write_stdin(data)
		.assert()
		.success()
		.stdout("#FF0000\n");
}

#[test]
fn prints_json() {
	cmd().args(["-", "--json", "--limit", "2"])
		.write_stdin(rgb_act())
		.assert()
		.success()
		.stdout("[\n  \"#FF0000\",\n  \"#00FF00\"\n]\n");
}

#[test]
fn debug_output_goes_to_stderr() {
	cmd().args(["-", "1", "--debug"])
		.write_stdin(rgb_act())
		.assert()
		.success()
		.stdout("#FF0000\n")
		.stderr(contains("Read 768 bytes").and(contains("Printed 1 colors")));
}

#[test]
fn rejects_small_files() {
	let temp = TempDir::new().unwrap();
	let input = temp.path().join("small.act");
	fs::write(&input, [0_u8; 767]).unwrap();

	cmd().arg(&input)
		.assert()
		.code(1)
		.stdout(is_empty())
		.stderr(contains("execution failed: File too small (767 bytes)"));
}

#[test]
fn missing_input_fails() {
	let temp = TempDir::new().unwrap();

	cmd().arg(temp.path().join("missing.act"))
		.assert()
		.code(1)
		.stderr(contains("execution failed: Couldn't read"));
}

#[test]
fn rejects_invalid_limits() {
	let temp = TempDir::new().unwrap();
	let input = temp.path().join("palette.act");
	fs::write(&input, rgb_act()).unwrap();

	cmd().arg(&input).arg("many")
		.assert()
		.code(2)
		.stdout(is_empty());

	cmd().arg(&input).arg("-5")
		.assert()
		.code(2)
		.stdout(is_empty());

	cmd().arg(&input).arg("3").args(["-n", "3"])
		.assert()
		.code(2);
}

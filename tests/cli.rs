use assert_cmd::cargo::cargo_bin;
use regex::Regex;
use std::path::Path;
use tempfile::TempDir;

const RATINGS: &str = "Rank\tPollster\tSimple Average Error\n\
	1\tA\t0.1\n\
	2\tB\t0.2\n\
	3\tC\t0.3\n\
	4\tD\t0.4\n\
	5\tE\t0.5\n\
	6\tF\t0.6\n";

fn write(dir: &TempDir, name: &str, content: &str) -> String {
	let path = dir.path().join(name);
	std::fs::write(&path, content).unwrap();
	path_str(&path)
}

fn path_str(path: &Path) -> String {
	path.to_str().unwrap().to_string()
}

fn command() -> assert_cmd::Command {
	assert_cmd::Command::new(cargo_bin(env!("CARGO_PKG_NAME")))
}

#[test]
fn cli_version_works() {
	let crate_name = env!("CARGO_PKG_NAME");
	let output = command().arg("--version").output().unwrap();

	assert!(output.status.success(), "command returned with non-success exit code");
	let version = String::from_utf8_lossy(&output.stdout).trim().to_owned();

	assert_eq!(version, format!("{} {}", crate_name, env!("CARGO_PKG_VERSION")));
}

#[test]
fn weigh_single_poll_works() -> anyhow::Result<()> {
	let dir = tempfile::tempdir()?;
	let ratings = write(&dir, "ratings.tsv", RATINGS);

	let output = command()
		.args(["weigh", "--ratings", ratings.as_str(), "--tiers", "2:0.6,3:0.4", "--poll", "F"])
		.output()?;
	assert!(output.status.success());

	let stdout = String::from_utf8(output.stdout)?;
	let re = Regex::new(r"^Poll\tF\nBucket\t2\nWeight\t0\.1333+\d*\n$")?;
	assert!(re.is_match(&stdout), "unexpected output: {stdout:?}");
	Ok(())
}

#[test]
fn weigh_unknown_poll_is_not_a_failure() -> anyhow::Result<()> {
	let dir = tempfile::tempdir()?;
	let ratings = write(&dir, "ratings.tsv", RATINGS);

	command()
		.args(["weigh", "--ratings", ratings.as_str(), "--poll", "Nobody"])
		.assert()
		.success()
		.stdout("Poll\tNobody\nBucket\tunavailable\nWeight\tunavailable\n");
	Ok(())
}

#[test]
fn weigh_strict_overflow_fails() -> anyhow::Result<()> {
	let dir = tempfile::tempdir()?;
	let ratings = write(&dir, "ratings.tsv", RATINGS);

	let output = command()
		.args(["weigh", "--ratings", ratings.as_str(), "--tiers", "2:0.6,3:0.4", "--overflow", "reject"])
		.output()?;
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("ExceedsCapacity"));
	Ok(())
}

#[test]
fn weigh_json_table_works() -> anyhow::Result<()> {
	let dir = tempfile::tempdir()?;
	let ratings = write(&dir, "ratings.tsv", RATINGS);

	let output = command()
		.args(["weigh", "--ratings", ratings.as_str(), "--tiers", "2:0.6,3:0.4", "--format", "json"])
		.output()?;
	assert!(output.status.success());

	let table: serde_json::Value = serde_json::from_slice(&output.stdout)?;
	let rows = table.as_array().expect("a JSON array");
	assert_eq!(rows.len(), 6);
	assert_eq!(rows[0]["key"], "A");
	assert_eq!(rows[0]["tier_number"], 1);
	assert_eq!(rows[5]["key"], "F");
	assert_eq!(rows[5]["tier_number"], 2);
	Ok(())
}

#[test]
fn weigh_missing_ratings_file_fails() {
	command()
		.args(["weigh", "--ratings", "/definitely/not/here.tsv"])
		.assert()
		.failure();
}

#[test]
fn approval_works() -> anyhow::Result<()> {
	let dir = tempfile::tempdir()?;
	let approvals = write(&dir, "approvals.csv", "State,Score\nAlabama,38.5\nArizona,44.1\n");

	command()
		.args(["approval", "--approvals", approvals.as_str(), "--code", "AZ"])
		.assert()
		.success()
		.stdout("{\"rating\":\"44.1\"}\n");

	command()
		.args(["approval", "--approvals", approvals.as_str(), "--code", "AK"])
		.assert()
		.success()
		.stdout("{\"rating\":\"TBD\"}\n");
	Ok(())
}

#[test]
fn state_code_works() {
	command().args(["state-code", "New Hampshire"]).assert().success().stdout("NH\n");
	command().args(["state-code", "Narnia"]).assert().failure();
}

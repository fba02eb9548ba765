//! Weigh command implementation: rank the pollsters and print their buckets.

use crate::{
	allocator::{Allocation, allocate_with},
	commands::types::WeighConfig,
	error::Error,
	opt::OutputFormat,
	prelude::LOG_TARGET,
	ratings::{RatingColumns, read_ratings},
	report::{PollReport, render_table},
	schedule::TierSchedule,
};

/// Run the weigh command and print its output to stdout.
pub async fn weigh_cmd(config: WeighConfig) -> Result<(), Error> {
	let output = run_weigh(&config).await?;
	println!("{output}");
	Ok(())
}

/// Load the inputs named by `config`, allocate and render the result.
pub async fn run_weigh(config: &WeighConfig) -> Result<String, Error> {
	let schedule = resolve_schedule(config).await?;
	if !schedule.is_balanced() {
		log::warn!(
			target: LOG_TARGET,
			"Tier budgets sum to {}, not 1; weights will not add up to one",
			schedule.total_budget()
		);
	}
	log::debug!(target: LOG_TARGET, "Using tier schedule {schedule}, rendering as {}", config.format);

	let columns =
		RatingColumns { key: config.key_column.clone(), metric: config.metric_column.clone() };
	let records = read_ratings(&config.ratings, &columns).await?;
	let allocation = allocate_with(&records, &schedule, config.overflow)?;

	render(&allocation, config.poll.as_deref(), config.format)
}

async fn resolve_schedule(config: &WeighConfig) -> Result<TierSchedule, Error> {
	match (&config.tiers, &config.tiers_file) {
		(Some(schedule), _) => Ok(schedule.clone()),
		(None, Some(path)) => TierSchedule::read(path).await,
		(None, None) => Ok(TierSchedule::pollster_default()),
	}
}

fn render(allocation: &Allocation, poll: Option<&str>, format: OutputFormat) -> Result<String, Error> {
	let Some(poll) = poll else {
		return match format {
			OutputFormat::Text => Ok(render_table(allocation).trim_end().to_string()),
			OutputFormat::Json => Ok(serde_json::to_string_pretty(allocation)?),
		};
	};

	let report = PollReport::lookup(allocation, poll);
	if !report.is_found() {
		log::warn!(target: LOG_TARGET, "Pollster `{poll}` is not in the ratings");
	}

	match format {
		OutputFormat::Text => Ok(report.to_string()),
		OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{allocator::OverflowPolicy, error::InvalidInputError};
	use clap::Parser;

	const RATINGS: &str = "Pollster\tSimple Average Error\nA\t0.1\nB\t0.2\nC\t0.3\nD\t0.4\nE\t0.5\nF\t0.6\n";

	fn config(dir: &tempfile::TempDir, extra: &[&str]) -> WeighConfig {
		let path = dir.path().join("ratings.tsv");
		std::fs::write(&path, RATINGS).unwrap();
		let path = path.to_str().unwrap().to_string();

		let mut args = vec!["weigh", "--ratings", path.as_str()];
		args.extend_from_slice(extra);
		WeighConfig::try_parse_from(args).unwrap()
	}

	#[tokio::test]
	async fn single_poll_report_works() {
		let dir = tempfile::tempdir().unwrap();
		let cfg = config(&dir, &["--tiers", "2:0.6,3:0.4", "--poll", "B"]);
		assert_eq!(run_weigh(&cfg).await.unwrap(), "Poll\tB\nBucket\t1\nWeight\t0.3");
	}

	#[tokio::test]
	async fn unknown_poll_degrades() {
		let dir = tempfile::tempdir().unwrap();
		let cfg = config(&dir, &["--tiers", "2:0.6,3:0.4", "--poll", "Nobody"]);
		assert_eq!(
			run_weigh(&cfg).await.unwrap(),
			"Poll\tNobody\nBucket\tunavailable\nWeight\tunavailable"
		);
	}

	#[tokio::test]
	async fn strict_overflow_fails() {
		let dir = tempfile::tempdir().unwrap();
		let cfg = config(&dir, &["--tiers", "2:0.6,3:0.4", "--overflow", "reject"]);
		assert_eq!(cfg.overflow, OverflowPolicy::Reject);
		assert!(matches!(
			run_weigh(&cfg).await,
			Err(Error::InvalidInput(InvalidInputError::ExceedsCapacity { records: 6, capacity: 5 }))
		));
	}

	#[tokio::test]
	async fn tiers_file_works() {
		let dir = tempfile::tempdir().unwrap();
		let tiers = dir.path().join("tiers.json");
		std::fs::write(&tiers, r#"[{"capacity": 6, "weight_budget": 1.0}]"#).unwrap();
		let tiers = tiers.to_str().unwrap().to_string();

		let cfg = config(&dir, &["--tiers-file", tiers.as_str(), "--poll", "F", "--format", "json"]);
		let json: serde_json::Value = serde_json::from_str(&run_weigh(&cfg).await.unwrap()).unwrap();
		assert_eq!(json["tier_number"], 1);
		assert_eq!(json["poll"], "F");
	}

	#[tokio::test]
	async fn full_table_uses_default_schedule() {
		let dir = tempfile::tempdir().unwrap();
		let cfg = config(&dir, &[]);
		let out = run_weigh(&cfg).await.unwrap();
		let lines: Vec<&str> = out.lines().collect();
		assert_eq!(lines.len(), 7);
		assert_eq!(lines[1], "1\t1\t0.006999999999999999\tA");
	}
}

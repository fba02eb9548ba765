use crate::{
	allocator::OverflowPolicy,
	opt::OutputFormat,
	prelude::{DEFAULT_APPROVALS_FILE, DEFAULT_KEY_COLUMN, DEFAULT_METRIC_COLUMN, DEFAULT_RATINGS_FILE},
	schedule::TierSchedule,
};

#[derive(Debug, Clone, PartialEq, clap::Parser)]
pub struct WeighConfig {
	/// Tab-separated pollster ratings with a header row.
	///
	/// Can also be provided via the `RATINGS_FILE` environment variable.
	#[clap(long, default_value = DEFAULT_RATINGS_FILE, env = "RATINGS_FILE")]
	pub ratings: String,

	/// Report on a single pollster instead of printing the whole table.
	#[clap(long)]
	pub poll: Option<String>,

	/// Tier schedule as `<capacity>:<weight_budget>` pairs, e.g. `50:0.35,50:0.25`.
	/// The built-in six-tier pollster schedule is used if neither this nor `--tiers-file` is set.
	#[clap(long, conflicts_with = "tiers_file")]
	pub tiers: Option<TierSchedule>,

	/// JSON file holding the tier schedule.
	#[clap(long)]
	pub tiers_file: Option<String>,

	/// What to do with pollsters beyond the capacity of the schedule.
	#[clap(long, value_enum, default_value_t = OverflowPolicy::AbsorbIntoLast)]
	pub overflow: OverflowPolicy,

	/// Header of the column naming the pollster.
	#[clap(long, default_value = DEFAULT_KEY_COLUMN)]
	pub key_column: String,

	/// Header of the column holding the error metric (lower is better).
	#[clap(long, default_value = DEFAULT_METRIC_COLUMN)]
	pub metric_column: String,

	#[clap(long, value_enum, default_value_t = OutputFormat::Text)]
	pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, clap::Parser)]
pub struct ApprovalConfig {
	/// Comma-separated approval scores with `State` and `Score` columns.
	///
	/// Can also be provided via the `APPROVALS_FILE` environment variable.
	#[clap(long, default_value = DEFAULT_APPROVALS_FILE, env = "APPROVALS_FILE")]
	pub approvals: String,

	/// Two-letter postal code of the state.
	#[clap(long)]
	pub code: String,
}

#[derive(Debug, Clone, PartialEq, clap::Parser)]
pub struct StateCodeConfig {
	/// Full state name, e.g. `New Hampshire`.
	pub name: String,
}

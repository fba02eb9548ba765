// Copyright 2021-2022 Parity Technologies (UK) Ltd.
// This file is part of Polkadot.

// Polkadot is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// Polkadot is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with Polkadot.  If not, see <http://www.gnu.org/licenses/>.

//! The tier schedule: an ordered list of bucket sizes, each with the aggregate weight it hands
//! out.
//!
//! A schedule is always passed to the allocator explicitly. [`TierSchedule::pollster_default`]
//! is only the table the ratings have historically been weighted with.

use crate::error::{ConfigurationError, Error};
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path, str::FromStr};

/// Tolerance used when checking that the budgets of a schedule sum to one.
pub const BALANCE_TOLERANCE: f64 = 1e-9;

/// One row of a tier schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierSpec {
	/// Number of records this tier holds.
	pub capacity: u32,
	/// Aggregate weight mass of the tier, in (0, 1].
	pub weight_budget: f64,
}

impl TierSpec {
	pub const fn new(capacity: u32, weight_budget: f64) -> Self {
		Self { capacity, weight_budget }
	}

	/// The share each member of the tier receives. `None` for a tier without capacity.
	pub fn per_record_weight(&self) -> Option<f64> {
		(self.capacity > 0).then(|| self.weight_budget / f64::from(self.capacity))
	}
}

impl fmt::Display for TierSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.capacity, self.weight_budget)
	}
}

impl FromStr for TierSpec {
	type Err = ConfigurationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let parse_err = || ConfigurationError::Parse(s.to_string());
		let (capacity, budget) = s.trim().split_once(':').ok_or_else(parse_err)?;
		let capacity = capacity.trim().parse::<u32>().map_err(|_| parse_err())?;
		let weight_budget = budget.trim().parse::<f64>().map_err(|_| parse_err())?;
		Ok(Self { capacity, weight_budget })
	}
}

/// A validated, ordered tier schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TierSpec>", into = "Vec<TierSpec>")]
pub struct TierSchedule(Vec<TierSpec>);

impl TierSchedule {
	/// Build a schedule, rejecting empty tables, tables without any capacity and budgets outside
	/// of (0, 1].
	pub fn new(tiers: Vec<TierSpec>) -> Result<Self, ConfigurationError> {
		if tiers.is_empty() {
			return Err(ConfigurationError::EmptySchedule);
		}
		if tiers.iter().all(|t| t.capacity == 0) {
			return Err(ConfigurationError::NoCapacity);
		}
		for (idx, tier) in tiers.iter().enumerate() {
			let budget = tier.weight_budget;
			if !budget.is_finite() || budget <= 0.0 || budget > 1.0 {
				return Err(ConfigurationError::InvalidBudget { tier: idx + 1, budget });
			}
		}
		Ok(Self(tiers))
	}

	/// The six-tier table used for the pollster ratings.
	pub fn pollster_default() -> Self {
		Self(vec![
			TierSpec::new(50, 0.35),
			TierSpec::new(50, 0.25),
			TierSpec::new(50, 0.20),
			TierSpec::new(50, 0.10),
			TierSpec::new(50, 0.075),
			TierSpec::new(87, 0.025),
		])
	}

	/// Load a schedule from a JSON file of `{"capacity": .., "weight_budget": ..}` rows.
	pub async fn read(path: impl AsRef<Path>) -> Result<Self, Error> {
		let content = tokio::fs::read_to_string(path.as_ref()).await?;
		Ok(serde_json::from_str(&content)?)
	}

	pub fn tiers(&self) -> &[TierSpec] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Always false for a validated schedule.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn total_capacity(&self) -> u64 {
		self.0.iter().map(|t| u64::from(t.capacity)).sum()
	}

	pub fn total_budget(&self) -> f64 {
		self.0.iter().map(|t| t.weight_budget).sum()
	}

	/// Whether the budgets add up to one.
	pub fn is_balanced(&self) -> bool {
		(self.total_budget() - 1.0).abs() <= BALANCE_TOLERANCE
	}

	/// Index of the last tier able to hold records. Overflow is absorbed here.
	pub(crate) fn last_open_index(&self) -> usize {
		self.0.iter().rposition(|t| t.capacity > 0).unwrap_or(0)
	}
}

impl Default for TierSchedule {
	fn default() -> Self {
		Self::pollster_default()
	}
}

impl TryFrom<Vec<TierSpec>> for TierSchedule {
	type Error = ConfigurationError;

	fn try_from(tiers: Vec<TierSpec>) -> Result<Self, Self::Error> {
		Self::new(tiers)
	}
}

impl From<TierSchedule> for Vec<TierSpec> {
	fn from(schedule: TierSchedule) -> Self {
		schedule.0
	}
}

impl fmt::Display for TierSchedule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let rows: Vec<String> = self.0.iter().map(ToString::to_string).collect();
		write!(f, "{}", rows.join(","))
	}
}

/// Parses the compact `<capacity>:<budget>,...` form used on the command line.
impl FromStr for TierSchedule {
	type Err = ConfigurationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let tiers = s
			.split(',')
			.filter(|part| !part.trim().is_empty())
			.map(TierSpec::from_str)
			.collect::<Result<Vec<_>, _>>()?;
		Self::new(tiers)
	}
}

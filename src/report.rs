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

//! Rendering allocation results for people and scripts.

use crate::{
	allocator::{Allocation, WeightedResult},
	prelude::UNAVAILABLE,
};
use serde::Serialize;
use std::fmt;

/// The bucket and weight of a single pollster, if it was rated at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollReport {
	pub poll: String,
	#[serde(flatten)]
	pub result: Option<WeightedResult>,
}

impl PollReport {
	pub fn found(poll: impl Into<String>, result: &WeightedResult) -> Self {
		Self { poll: poll.into(), result: Some(*result) }
	}

	pub fn missing(poll: impl Into<String>) -> Self {
		Self { poll: poll.into(), result: None }
	}

	/// Report on `poll`, degrading to "unavailable" for unknown pollsters.
	pub fn lookup(allocation: &Allocation, poll: &str) -> Self {
		match allocation.get(poll) {
			Some(result) => Self::found(poll, result),
			None => Self::missing(poll),
		}
	}

	pub fn is_found(&self) -> bool {
		self.result.is_some()
	}
}

impl fmt::Display for PollReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.result {
			Some(r) => write!(
				f,
				"Poll\t{}\nBucket\t{}\nWeight\t{}",
				self.poll, r.tier_number, r.per_record_weight
			),
			None => write!(f, "Poll\t{}\nBucket\t{UNAVAILABLE}\nWeight\t{UNAVAILABLE}", self.poll),
		}
	}
}

/// One line per pollster: rank, bucket, weight and name, best first.
pub fn render_table(allocation: &Allocation) -> String {
	let mut out = String::from("Rank\tBucket\tWeight\tPoll\n");
	for record in allocation.iter() {
		out.push_str(&format!(
			"{}\t{}\t{}\t{}\n",
			record.rank, record.result.tier_number, record.result.per_record_weight, record.key
		));
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		allocator::{ScoreRecord, allocate},
		schedule::TierSchedule,
	};

	fn allocation() -> Allocation {
		let schedule: TierSchedule = "1:0.5,2:0.5".parse().unwrap();
		let records = vec![ScoreRecord::new("Beta", 2.0), ScoreRecord::new("Alpha", 1.0)];
		allocate(&records, &schedule).unwrap()
	}

	#[test]
	fn found_report_renders() {
		let report = PollReport::lookup(&allocation(), "Beta");
		assert!(report.is_found());
		assert_eq!(report.to_string(), "Poll\tBeta\nBucket\t2\nWeight\t0.25");
	}

	#[test]
	fn missing_report_degrades() {
		let report = PollReport::lookup(&allocation(), "Gamma");
		assert!(!report.is_found());
		assert_eq!(report.to_string(), "Poll\tGamma\nBucket\tunavailable\nWeight\tunavailable");
		assert_eq!(serde_json::to_value(&report).unwrap(), serde_json::json!({"poll": "Gamma"}));
	}

	#[test]
	fn found_report_serializes_flat() {
		let report = PollReport::lookup(&allocation(), "Alpha");
		assert_eq!(
			serde_json::to_value(&report).unwrap(),
			serde_json::json!({"poll": "Alpha", "tier_number": 1, "per_record_weight": 0.5})
		);
	}

	#[test]
	fn render_table_works() {
		assert_eq!(
			render_table(&allocation()),
			"Rank\tBucket\tWeight\tPoll\n1\t1\t0.5\tAlpha\n2\t2\t0.25\tBeta\n"
		);
	}
}

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

//! Tiered weight allocation.
//!
//! Records are ranked by their error metric (lowest first) and dealt into consecutive buckets of
//! the schedule. Every member of a bucket gets the same flat share `weight_budget / capacity`, so
//! the weight is a step function of the rank.
//!
//! Once the declared tiers are exhausted, the remaining records stay in the last tier at that
//! tier's per-record weight, unless [`OverflowPolicy::Reject`] is requested.

use crate::{
	error::{ConfigurationError, Error, InvalidInputError},
	prelude::LOG_TARGET,
	schedule::{TierSchedule, TierSpec},
};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// One pollster's entry. Lower `error_metric` is better.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
	pub key: String,
	pub error_metric: f64,
}

impl ScoreRecord {
	pub fn new(key: impl Into<String>, error_metric: f64) -> Self {
		Self { key: key.into(), error_metric }
	}
}

/// The tier a record fell into and its individual weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightedResult {
	/// 1-based index of the tier in the schedule.
	pub tier_number: u32,
	pub per_record_weight: f64,
}

/// What to do with records beyond the total capacity of the schedule.
#[derive(clap::ValueEnum, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
	/// Keep assigning to the last tier, at its per-record weight.
	#[default]
	AbsorbIntoLast,
	/// Fail with [`InvalidInputError::ExceedsCapacity`].
	Reject,
}

/// A single ranked row of an [`Allocation`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocatedRecord {
	/// 1-based position in the accuracy ordering.
	pub rank: usize,
	pub key: String,
	pub error_metric: f64,
	#[serde(flatten)]
	pub result: WeightedResult,
}

/// The outcome of [`allocate`]: every input record, keyed by its `key`, in rank order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Allocation {
	ranked: Vec<AllocatedRecord>,
	#[serde(skip)]
	index: HashMap<String, usize>,
}

impl Allocation {
	/// Look up a record. `None` means the key was not part of the input.
	pub fn get(&self, key: &str) -> Option<&WeightedResult> {
		self.index.get(key).map(|&idx| &self.ranked[idx].result)
	}

	pub fn len(&self) -> usize {
		self.ranked.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ranked.is_empty()
	}

	/// All records, best first.
	pub fn iter(&self) -> impl Iterator<Item = &AllocatedRecord> {
		self.ranked.iter()
	}

	/// Members of the given 1-based tier, best first.
	pub fn tier_members(&self, tier_number: u32) -> impl Iterator<Item = &AllocatedRecord> {
		self.ranked.iter().filter(move |r| r.result.tier_number == tier_number)
	}

	/// Sum of the individual weights handed out in the given tier.
	pub fn tier_weight(&self, tier_number: u32) -> f64 {
		self.tier_members(tier_number).map(|r| r.result.per_record_weight).sum()
	}

	/// Sum of all individual weights.
	pub fn total_weight(&self) -> f64 {
		self.ranked.iter().map(|r| r.result.per_record_weight).sum()
	}

	pub fn into_map(self) -> HashMap<String, WeightedResult> {
		self.ranked.into_iter().map(|r| (r.key, r.result)).collect()
	}
}

/// Allocate `records` into the tiers of `schedule`, absorbing overflow into the last tier.
pub fn allocate(records: &[ScoreRecord], schedule: &TierSchedule) -> Result<Allocation, Error> {
	allocate_with(records, schedule, OverflowPolicy::default())
}

/// Allocate `records` into the tiers of `schedule` with an explicit overflow policy.
///
/// Either the whole allocation is produced or nothing is.
pub fn allocate_with(
	records: &[ScoreRecord],
	schedule: &TierSchedule,
	policy: OverflowPolicy,
) -> Result<Allocation, Error> {
	validate_records(records)?;

	let capacity = schedule.total_capacity();
	let overflow = (records.len() as u64).saturating_sub(capacity);
	if overflow > 0 {
		match policy {
			OverflowPolicy::Reject =>
				return Err(InvalidInputError::ExceedsCapacity { records: records.len(), capacity }
					.into()),
			OverflowPolicy::AbsorbIntoLast => log::warn!(
				target: LOG_TARGET,
				"{overflow} records exceed the schedule capacity of {capacity}, assigning them to the last tier"
			),
		}
	}

	// `sort_by` is stable, ties keep their input order.
	let mut sorted: Vec<&ScoreRecord> = records.iter().collect();
	sorted.sort_by(|a, b| a.error_metric.total_cmp(&b.error_metric));

	let tiers = schedule.tiers();
	let last = schedule.last_open_index();
	let mut tier_index = next_open_tier(tiers, 0, last);
	let mut slot_count = 0u32;

	let mut ranked = Vec::with_capacity(sorted.len());
	let mut index = HashMap::with_capacity(sorted.len());

	for (pos, record) in sorted.into_iter().enumerate() {
		if slot_count >= tiers[tier_index].capacity && tier_index < last {
			tier_index = next_open_tier(tiers, tier_index + 1, last);
			slot_count = 0;
		}

		let per_record_weight =
			tiers[tier_index].per_record_weight().ok_or(ConfigurationError::NoCapacity)?;
		let result = WeightedResult { tier_number: tier_index as u32 + 1, per_record_weight };
		index.insert(record.key.clone(), pos);
		ranked.push(AllocatedRecord {
			rank: pos + 1,
			key: record.key.clone(),
			error_metric: record.error_metric,
			result,
		});

		slot_count += 1;
	}

	log::debug!(
		target: LOG_TARGET,
		"allocated {} records over {} tiers, reaching tier {}",
		ranked.len(),
		tiers.len(),
		tier_index + 1
	);

	Ok(Allocation { ranked, index })
}

fn validate_records(records: &[ScoreRecord]) -> Result<(), InvalidInputError> {
	if records.is_empty() {
		return Err(InvalidInputError::EmptyRecords);
	}

	let mut seen = HashSet::with_capacity(records.len());
	for record in records {
		if !record.error_metric.is_finite() {
			return Err(InvalidInputError::NonFiniteMetric { key: record.key.clone() });
		}
		if !seen.insert(record.key.as_str()) {
			return Err(InvalidInputError::DuplicateKey(record.key.clone()));
		}
	}

	Ok(())
}

/// First tier at or after `from` that can hold records, never past `last`.
fn next_open_tier(tiers: &[TierSpec], from: usize, last: usize) -> usize {
	tiers[from..=last]
		.iter()
		.position(|t| t.capacity > 0)
		.map_or(last, |offset| from + offset)
}

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

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("Failed to parse log directive: `{0}´")]
	LogParse(#[from] tracing_subscriber::filter::ParseError),
	#[error("I/O error: `{0}`")]
	Io(#[from] std::io::Error),
	#[error("JSON error: `{0}`")]
	Json(#[from] serde_json::Error),
	#[error("Invalid tier schedule: {0}")]
	Configuration(#[from] ConfigurationError),
	#[error("Invalid input: {0}")]
	InvalidInput(#[from] InvalidInputError),
	#[error("Unknown state: `{0}`")]
	UnknownState(String),
}

/// The tier schedule itself is malformed.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
	#[error("the schedule has no tiers")]
	EmptySchedule,
	#[error("no tier has a positive capacity")]
	NoCapacity,
	#[error("tier {tier} has weight budget {budget}, expected a value in (0, 1]")]
	InvalidBudget { tier: usize, budget: f64 },
	#[error("cannot parse tier `{0}`, expected `<capacity>:<weight_budget>`")]
	Parse(String),
}

/// The record set handed to the allocator (or the file it came from) is unusable.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InvalidInputError {
	#[error("no records to allocate")]
	EmptyRecords,
	#[error("duplicate key `{0}`")]
	DuplicateKey(String),
	#[error("record `{key}` has a non-finite error metric")]
	NonFiniteMetric { key: String },
	#[error("{records} records exceed the schedule capacity of {capacity}")]
	ExceedsCapacity { records: usize, capacity: u64 },
	#[error("line {line}: {reason}")]
	Malformed { line: usize, reason: String },
}

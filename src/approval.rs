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

//! Cached approval scores per state, keyed by postal code.

use crate::{
	delimited::{column, field, line, reader},
	error::{Error, InvalidInputError},
	prelude::LOG_TARGET,
	states::state_to_code,
};
use serde::{Serialize, Serializer};
use std::{collections::HashMap, path::Path};

/// Header of the state name column.
pub const STATE_COLUMN: &str = "State";
/// Header of the score column.
pub const SCORE_COLUMN: &str = "Score";

/// The approval rating of a state, as reported to consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rating {
	/// The cached score, verbatim.
	Score(String),
	/// No score is known for the state yet.
	Tbd,
}

impl Serialize for Rating {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Score(score) => serializer.serialize_str(score),
			Self::Tbd => serializer.serialize_str("TBD"),
		}
	}
}

/// The JSON body `{"rating": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingResponse {
	pub rating: Rating,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApprovalTable {
	scores: HashMap<&'static str, String>,
}

impl ApprovalTable {
	/// Parse a comma-separated file with `State` and `Score` columns.
	///
	/// Rows naming an unknown state are skipped. A later row for the same state wins.
	pub fn parse(content: &str) -> Result<Self, Error> {
		let mut rdr = reader(content, b',');
		let headers = rdr.headers().map_err(InvalidInputError::from)?.clone();
		let state_idx = column(&headers, STATE_COLUMN)?;
		let score_idx = column(&headers, SCORE_COLUMN)?;

		let mut scores = HashMap::new();
		for result in rdr.records() {
			let record = result.map_err(InvalidInputError::from)?;
			let state = field(&record, state_idx)?;
			let score = field(&record, score_idx)?;
			match state_to_code(state) {
				Some(code) => {
					scores.insert(code, score.to_string());
				},
				None => log::trace!(
					target: LOG_TARGET,
					"line {}: skipping unknown state `{state}`",
					line(&record)
				),
			}
		}

		Ok(Self { scores })
	}

	pub async fn read(path: impl AsRef<Path>) -> Result<Self, Error> {
		let path = path.as_ref();
		log::debug!(target: LOG_TARGET, "Reading approvals from {}", path.display());
		let content = tokio::fs::read_to_string(path).await?;
		Self::parse(&content)
	}

	/// The rating for a postal code. Unknown codes are [`Rating::Tbd`], never an error.
	pub fn rating(&self, code: &str) -> Rating {
		self.scores.get(code).map_or(Rating::Tbd, |score| Rating::Score(score.clone()))
	}

	pub fn response(&self, code: &str) -> RatingResponse {
		RatingResponse { rating: self.rating(code) }
	}

	pub fn len(&self) -> usize {
		self.scores.len()
	}

	pub fn is_empty(&self) -> bool {
		self.scores.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const APPROVALS: &str = "State,Score\nAlabama,38.5\nArizona,\"44\"\nAtlantis,99\nAlabama,39.0\n";

	#[test]
	fn rating_works() {
		let table = ApprovalTable::parse(APPROVALS).unwrap();
		assert_eq!(table.len(), 2);
		assert_eq!(table.rating("AL"), Rating::Score("39.0".into()));
		assert_eq!(table.rating("AZ"), Rating::Score("44".into()));
		assert_eq!(table.rating("AK"), Rating::Tbd);
		assert_eq!(table.rating("nonsense"), Rating::Tbd);
	}

	#[test]
	fn response_renders_as_json() {
		let table = ApprovalTable::parse(APPROVALS).unwrap();
		assert_eq!(serde_json::to_string(&table.response("AZ")).unwrap(), r#"{"rating":"44"}"#);
		assert_eq!(serde_json::to_string(&table.response("TX")).unwrap(), r#"{"rating":"TBD"}"#);
	}

	#[test]
	fn quoted_comma_does_not_shift_columns() {
		let table = ApprovalTable::parse("Note,State,Score\n\"a, b\",Alabama,40\n").unwrap();
		assert_eq!(table.rating("AL"), Rating::Score("40".into()));
	}

	#[test]
	fn missing_columns_are_rejected() {
		assert!(matches!(ApprovalTable::parse("Name,Value\nAlabama,1\n"), Err(Error::InvalidInput(_))));
	}
}

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

//! Loading pollster ratings from a tab-separated file.

use crate::{
	allocator::ScoreRecord,
	delimited::{column, field, line, reader},
	error::{Error, InvalidInputError},
	prelude::{DEFAULT_KEY_COLUMN, DEFAULT_METRIC_COLUMN, LOG_TARGET},
};
use std::path::Path;

/// Header names of the columns a [`ScoreRecord`] is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingColumns {
	pub key: String,
	pub metric: String,
}

impl Default for RatingColumns {
	fn default() -> Self {
		Self { key: DEFAULT_KEY_COLUMN.to_string(), metric: DEFAULT_METRIC_COLUMN.to_string() }
	}
}

/// Parse tab-separated ratings. The first non-blank line is the header.
pub fn parse_ratings(content: &str, columns: &RatingColumns) -> Result<Vec<ScoreRecord>, Error> {
	let mut rdr = reader(content, b'\t');
	let headers = rdr.headers().map_err(InvalidInputError::from)?.clone();
	let key_idx = column(&headers, &columns.key)?;
	let metric_idx = column(&headers, &columns.metric)?;

	let mut records = Vec::new();
	for result in rdr.records() {
		let record = result.map_err(InvalidInputError::from)?;
		let key = field(&record, key_idx)?;
		let metric = field(&record, metric_idx)?;
		let error_metric = metric.parse::<f64>().map_err(|e| InvalidInputError::Malformed {
			line: line(&record),
			reason: format!("cannot parse `{metric}` as `{}`: {e}", columns.metric),
		})?;
		records.push(ScoreRecord::new(key, error_metric));
	}

	Ok(records)
}

/// Read and parse a ratings file.
pub async fn read_ratings(
	path: impl AsRef<Path>,
	columns: &RatingColumns,
) -> Result<Vec<ScoreRecord>, Error> {
	let path = path.as_ref();
	log::debug!(target: LOG_TARGET, "Reading ratings from {}", path.display());

	let content = tokio::fs::read_to_string(path).await?;
	let records = parse_ratings(&content, columns)?;

	log::info!(target: LOG_TARGET, "Loaded {} ratings from {}", records.len(), path.display());
	Ok(records)
}

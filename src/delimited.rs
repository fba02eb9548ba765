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

//! Helpers shared by the `csv` backed readers of ratings and approvals.

use crate::error::InvalidInputError;
use csv::{ReaderBuilder, StringRecord, Trim};

/// A reader over `content` with a header row, trimmed fields and rows of any length.
pub(crate) fn reader(content: &str, delimiter: u8) -> csv::Reader<&[u8]> {
	ReaderBuilder::new()
		.delimiter(delimiter)
		.has_headers(true)
		.flexible(true)
		.trim(Trim::All)
		.from_reader(content.as_bytes())
}

/// Position of the column named `name` in the header row.
pub(crate) fn column(headers: &StringRecord, name: &str) -> Result<usize, InvalidInputError> {
	headers.iter().position(|h| h == name).ok_or_else(|| InvalidInputError::Malformed {
		line: 1,
		reason: format!("missing column `{name}`"),
	})
}

/// 1-based line a record started on.
pub(crate) fn line(record: &StringRecord) -> usize {
	record.position().map_or(0, |p| p.line() as usize)
}

/// Fetch field `idx` of a record, or report the short row.
pub(crate) fn field(record: &StringRecord, idx: usize) -> Result<&str, InvalidInputError> {
	record.get(idx).ok_or_else(|| InvalidInputError::Malformed {
		line: line(record),
		reason: format!("expected at least {} fields, found {}", idx + 1, record.len()),
	})
}

impl From<csv::Error> for InvalidInputError {
	fn from(err: csv::Error) -> Self {
		let line = err.position().map_or(0, |p| p.line() as usize);
		InvalidInputError::Malformed { line, reason: err.to_string() }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn quoted_delimiters_stay_in_their_field() {
		let mut rdr = reader("a\tb\n\n1\t\"two\tthree\"\n", b'\t');
		let headers = rdr.headers().unwrap().clone();
		assert_eq!(column(&headers, "b"), Ok(1));

		let records: Vec<StringRecord> = rdr.records().collect::<Result<_, _>>().unwrap();
		assert_eq!(records.len(), 1);
		assert_eq!(field(&records[0], 1), Ok("two\tthree"));
		assert_eq!(line(&records[0]), 3);
	}

	#[test]
	fn missing_column_and_short_row_are_reported() {
		let mut rdr = reader("a,b\nonly\n", b',');
		let headers = rdr.headers().unwrap().clone();
		assert!(column(&headers, "c").is_err());

		let record = rdr.records().next().unwrap().unwrap();
		assert_eq!(
			field(&record, 1),
			Err(InvalidInputError::Malformed {
				line: 2,
				reason: "expected at least 2 fields, found 1".into()
			})
		);
	}
}

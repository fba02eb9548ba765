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

//! Constants shared by the library and the binary.

/// The logging target.
pub const LOG_TARGET: &str = "pollster-weights";

/// Default location of the tab-separated pollster ratings.
pub const DEFAULT_RATINGS_FILE: &str = "data/pollster-ratings.tsv";
/// Default location of the cached per-state approval scores.
pub const DEFAULT_APPROVALS_FILE: &str = "data/approvals.csv";

/// Header of the ratings column holding the pollster name.
pub const DEFAULT_KEY_COLUMN: &str = "Pollster";
/// Header of the ratings column holding the accuracy metric.
pub const DEFAULT_METRIC_COLUMN: &str = "Simple Average Error";

/// Placeholder rendered for anything that could not be looked up.
pub const UNAVAILABLE: &str = "unavailable";

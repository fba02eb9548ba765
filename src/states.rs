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

//! US state names and their postal codes.

const STATES: &[(&str, &str)] = &[
	("Alabama", "AL"),
	("Alaska", "AK"),
	("Arizona", "AZ"),
	("Arkansas", "AR"),
	("California", "CA"),
	("Colorado", "CO"),
	("Connecticut", "CT"),
	("Delaware", "DE"),
	("District of Columbia", "DC"),
	("Florida", "FL"),
	("Georgia", "GA"),
	("Hawaii", "HI"),
	("Idaho", "ID"),
	("Illinois", "IL"),
	("Indiana", "IN"),
	("Iowa", "IA"),
	("Kansas", "KS"),
	("Kentucky", "KY"),
	("Louisiana", "LA"),
	("Maine", "ME"),
	("Maryland", "MD"),
	("Massachusetts", "MA"),
	("Michigan", "MI"),
	("Minnesota", "MN"),
	("Mississippi", "MS"),
	("Missouri", "MO"),
	("Montana", "MT"),
	("Nebraska", "NE"),
	("Nevada", "NV"),
	("New Hampshire", "NH"),
	("New Jersey", "NJ"),
	("New Mexico", "NM"),
	("New York", "NY"),
	("North Carolina", "NC"),
	("North Dakota", "ND"),
	("Ohio", "OH"),
	("Oklahoma", "OK"),
	("Oregon", "OR"),
	("Pennsylvania", "PA"),
	("Rhode Island", "RI"),
	("South Carolina", "SC"),
	("South Dakota", "SD"),
	("Tennessee", "TN"),
	("Texas", "TX"),
	("Utah", "UT"),
	("Vermont", "VT"),
	("Virginia", "VA"),
	("Washington", "WA"),
	("West Virginia", "WV"),
	("Wisconsin", "WI"),
	("Wyoming", "WY"),
];

/// Postal code of a state, matched on the exact name. `None` if the name is unknown.
pub fn state_to_code(name: &str) -> Option<&'static str> {
	STATES.iter().find(|(state, _)| *state == name).map(|(_, code)| *code)
}

/// Whether `code` is one of the known postal codes.
pub fn is_state_code(code: &str) -> bool {
	STATES.iter().any(|(_, c)| *c == code)
}

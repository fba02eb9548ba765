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

//! # Pollster Weights.
//!
//! Ranks pollsters by their historical error and assigns each one to a weighting bucket, then
//! reports the bucket and the individual weight of a pollster. Also answers the cached per-state
//! approval lookups used alongside the weights.
//! See `help` for more information.
#![cfg_attr(docsrs, feature(doc_cfg))]

use clap::Parser;
use pollster_weights::{
	commands::{self, types},
	error::Error,
	prelude::LOG_TARGET,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Parser)]
#[cfg_attr(test, derive(PartialEq))]
#[clap(author, version, about)]
pub struct Opt {
	#[clap(subcommand)]
	pub command: Command,

	/// Sets a custom logging filter. Syntax is `<target>=<level>`, e.g.
	/// -lpollster-weights=debug.
	///
	/// Log levels (least to most verbose) are error, warn, info, debug, and trace.
	/// By default, all targets log `info`. The global log level can be set with `-l<level>`.
	#[clap(long, short, default_value = "info", global = true)]
	pub log: String,
}

#[derive(Debug, Clone, Parser)]
#[cfg_attr(test, derive(PartialEq))]
pub enum Command {
	/// Rank the pollsters and print their buckets and weights.
	Weigh(types::WeighConfig),
	/// Print the cached approval rating of a state as JSON.
	Approval(types::ApprovalConfig),
	/// Print the postal code of a state.
	StateCode(types::StateCodeConfig),
}

#[tokio::main]
async fn main() -> Result<(), Error> {
	let Opt { command, log } = Opt::parse();
	let filter = EnvFilter::from_default_env().add_directive(log.parse()?);
	// Logs go to stderr, stdout carries the command output.
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

	let res = match command {
		Command::Weigh(cfg) => commands::weigh_cmd(cfg).await,
		Command::Approval(cfg) => commands::approval_cmd(cfg).await,
		Command::StateCode(cfg) => commands::state_code_cmd(cfg),
	};

	log::debug!(target: LOG_TARGET, "execution finished. outcome = {res:?}");
	res
}

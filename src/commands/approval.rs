//! Approval command implementation: look up the cached approval rating of a state.

use crate::{
	approval::{ApprovalTable, RatingResponse},
	commands::types::{ApprovalConfig, StateCodeConfig},
	error::Error,
	prelude::LOG_TARGET,
	states::{is_state_code, state_to_code},
};

pub async fn approval_cmd(config: ApprovalConfig) -> Result<(), Error> {
	let response = run_approval(&config).await?;
	println!("{}", serde_json::to_string(&response)?);
	Ok(())
}

pub async fn run_approval(config: &ApprovalConfig) -> Result<RatingResponse, Error> {
	let code = config.code.trim().to_ascii_uppercase();
	if !is_state_code(&code) {
		log::warn!(target: LOG_TARGET, "`{code}` is not a known state code");
	}

	let table = ApprovalTable::read(&config.approvals).await?;
	log::debug!(target: LOG_TARGET, "Loaded approvals for {} states", table.len());

	Ok(table.response(&code))
}

pub fn state_code_cmd(config: StateCodeConfig) -> Result<(), Error> {
	let code = state_to_code(&config.name).ok_or_else(|| Error::UnknownState(config.name.clone()))?;
	println!("{code}");
	Ok(())
}

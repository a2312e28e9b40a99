//! Implementation of the `sprint-digest standup` command.

use anyhow::Result;

use crate::cli::output::{output, RunOutput};
use crate::cli::types::StandupArgs;
use crate::domain::models::{Config, ReportKind, RunOutcome};

pub async fn execute(_args: &StandupArgs, config: &Config, json_mode: bool) -> Result<RunOutcome> {
    let outcome = super::run_report(config, ReportKind::Standup).await?;
    output(&RunOutput(outcome.clone()), json_mode);
    Ok(outcome)
}

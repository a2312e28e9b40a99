//! Implementation of the `sprint-digest weekly` command.

use anyhow::Result;
use chrono::Weekday;

use crate::cli::output::{output, RunOutput};
use crate::cli::types::WeeklyArgs;
use crate::domain::models::{Config, ReportKind, RunOutcome};

/// Run the weekly report when `today` is the configured report day.
///
/// On any other day nothing is validated or sent.
pub async fn execute(
    args: &WeeklyArgs,
    config: &Config,
    today: Weekday,
    json_mode: bool,
) -> Result<RunOutcome> {
    let outcome = if today == args.on {
        super::run_report(config, ReportKind::Weekly).await?
    } else {
        tracing::info!(today = %today, target = %args.on, "Not the weekly report day, skipping");
        RunOutcome::SkippedWeekday {
            today,
            target: args.on,
        }
    };

    output(&RunOutput(outcome.clone()), json_mode);
    Ok(outcome)
}

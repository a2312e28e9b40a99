//! Output formatting utilities for the CLI.

use serde::Serialize;

use crate::domain::models::{ReportKind, RunOutcome};

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value;
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

/// Result of a `standup` or `weekly` run.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct RunOutput(pub RunOutcome);

impl CommandOutput for RunOutput {
    fn to_human(&self) -> String {
        match &self.0 {
            RunOutcome::Delivered {
                sprint,
                kind,
                records,
                inserted,
                updated,
            } => {
                let report = match kind {
                    ReportKind::Standup => "Stand-up",
                    ReportKind::Weekly => "Weekly",
                };
                format!(
                    "{report} digest for {sprint} posted to Slack ({records} records; {inserted} inserted, {updated} updated)"
                )
            }
            RunOutcome::NoActiveSprint => "No active sprint found".to_string(),
            RunOutcome::SkippedWeekday { today, target } => {
                format!("Today is {today}, weekly report runs on {target}; nothing to do")
            }
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_delivered_human() {
        let out = RunOutput(RunOutcome::Delivered {
            sprint: "Sprint 12".to_string(),
            kind: ReportKind::Weekly,
            records: 4,
            inserted: 1,
            updated: 3,
        });
        assert_eq!(
            out.to_human(),
            "Weekly digest for Sprint 12 posted to Slack (4 records; 1 inserted, 3 updated)"
        );
    }

    #[test]
    fn test_skipped_json() {
        let out = RunOutput(RunOutcome::SkippedWeekday {
            today: Weekday::Tue,
            target: Weekday::Fri,
        });
        assert_eq!(
            out.to_json(),
            serde_json::json!({"outcome": "skipped_weekday", "today": "Tue", "target": "Fri"})
        );
    }
}

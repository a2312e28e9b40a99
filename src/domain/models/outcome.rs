//! How a run ended when it did not fail.

use chrono::Weekday;
use serde::Serialize;

/// Which digest variant a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Standup,
    Weekly,
}

/// Normal terminations of a run.
///
/// `NoActiveSprint` and `SkippedWeekday` are not errors: the process logs
/// them and exits 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RunOutcome {
    Delivered {
        sprint: String,
        kind: ReportKind,
        /// Records included in the digest.
        records: usize,
        inserted: usize,
        updated: usize,
    },
    NoActiveSprint,
    SkippedWeekday {
        today: Weekday,
        target: Weekday,
    },
}

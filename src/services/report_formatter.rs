//! Slack digest text.

use std::collections::HashSet;

use crate::domain::models::FormattedRecord;

/// Status labels grouped into the two weekly report sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyBuckets {
    pub on_going: HashSet<String>,
    pub completed: HashSet<String>,
}

impl WeeklyBuckets {
    pub fn new<I, J, S, T>(on_going: I, completed: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            on_going: on_going.into_iter().map(Into::into).collect(),
            completed: completed.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for WeeklyBuckets {
    fn default() -> Self {
        Self::new(
            ["Open", "In Progress", "Code Review", "Reopened"],
            ["Ready for QA", "Closed"],
        )
    }
}

/// Renders formatted records as Slack mrkdwn.
#[derive(Debug, Clone, Default)]
pub struct ReportFormatter {
    buckets: WeeklyBuckets,
}

impl ReportFormatter {
    pub const fn new(buckets: WeeklyBuckets) -> Self {
        Self { buckets }
    }

    /// One bullet: link to the ticket, title, status label in backticks.
    pub fn format_line(record: &FormattedRecord) -> String {
        format!(
            "- <{}|{}> {} `{}`",
            record.url,
            record.ticket_id,
            record.title,
            record.status.display()
        )
    }

    /// Daily stand-up digest: one line per record, no header.
    pub fn format_standup(&self, records: &[FormattedRecord]) -> String {
        records
            .iter()
            .map(Self::format_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Weekly digest split into "On Going" and "Completed" sections.
    ///
    /// Empty sections are left out. Records whose status falls in neither
    /// bucket are dropped. The trailing "Summary:" header is always present.
    pub fn format_weekly(&self, records: &[FormattedRecord]) -> String {
        let mut on_going = Vec::new();
        let mut completed = Vec::new();

        for record in records {
            let label = record.status.display();
            if self.buckets.on_going.contains(label) {
                on_going.push(Self::format_line(record));
            } else if self.buckets.completed.contains(label) {
                completed.push(Self::format_line(record));
            } else {
                tracing::debug!(ticket_id = %record.ticket_id, status = label, "Status not in any weekly section");
            }
        }

        let mut lines = Vec::new();
        if !on_going.is_empty() {
            lines.push("On Going:".to_string());
            lines.extend(on_going);
        }
        if !completed.is_empty() {
            lines.push("\nCompleted:".to_string());
            lines.extend(completed);
        }
        lines.push("\nSummary:".to_string());

        lines.join("\n")
    }
}

//! Mapped ticket statuses.
//!
//! Jira status names are translated into ranked labels so that sorting the
//! stored form lexicographically yields workflow order.

use std::fmt;

/// A ticket status after mapping.
///
/// Two projections are exposed: [`MappedStatus::ranked`] is what gets stored
/// in Notion and sorted on (`"3. In Progress"`), [`MappedStatus::display`] is
/// what humans read (`"In Progress"`). Statuses missing from the
/// [`StatusMapping`] carry no rank and both projections equal the raw name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MappedStatus {
    rank: Option<u8>,
    label: String,
}

impl MappedStatus {
    pub fn new(rank: Option<u8>, label: impl Into<String>) -> Self {
        Self {
            rank,
            label: label.into(),
        }
    }

    /// Parse the stored form back into a typed status.
    ///
    /// A leading `"<digits>. "` prefix becomes the rank; anything else is
    /// kept verbatim as an unranked label.
    pub fn parse(stored: &str) -> Self {
        if let Some((prefix, rest)) = stored.split_once(". ") {
            if let Ok(rank) = prefix.parse::<u8>() {
                return Self::new(Some(rank), rest);
            }
        }
        Self::new(None, stored)
    }

    pub const fn rank(&self) -> Option<u8> {
        self.rank
    }

    /// Stored and sortable form, e.g. `"4. Code Review"`.
    pub fn ranked(&self) -> String {
        match self.rank {
            Some(rank) => format!("{rank}. {}", self.label),
            None => self.label.clone(),
        }
    }

    /// Human-readable form without the ordinal prefix.
    pub fn display(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for MappedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ranked())
    }
}

/// One row of the status table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRank {
    /// Jira status name, matched exactly.
    pub name: String,
    pub rank: u8,
}

impl StatusRank {
    pub fn new(name: impl Into<String>, rank: u8) -> Self {
        Self {
            name: name.into(),
            rank,
        }
    }
}

/// Ordered translation table from Jira status names to ranked statuses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMapping {
    entries: Vec<StatusRank>,
}

impl StatusMapping {
    pub const fn new(entries: Vec<StatusRank>) -> Self {
        Self { entries }
    }

    /// Map a Jira status name. Unmapped names pass through unranked.
    pub fn map(&self, status_name: &str) -> MappedStatus {
        self.entries
            .iter()
            .find(|entry| entry.name == status_name)
            .map_or_else(
                || MappedStatus::new(None, status_name),
                |entry| MappedStatus::new(Some(entry.rank), entry.name.as_str()),
            )
    }

    pub fn entries(&self) -> &[StatusRank] {
        &self.entries
    }
}

impl Default for StatusMapping {
    fn default() -> Self {
        Self::new(vec![
            StatusRank::new("Open", 1),
            StatusRank::new("In Progress", 3),
            StatusRank::new("Code Review", 4),
            StatusRank::new("Ready for QA", 5),
            StatusRank::new("Reopened", 6),
            StatusRank::new("Closed", 7),
        ])
    }
}

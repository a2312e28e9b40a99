//! Notion records tracking a ticket within a sprint.

use super::status::MappedStatus;

/// A page in the primary Notion database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Notion page id.
    pub id: String,
    pub title: String,
    /// Jira issue key.
    pub ticket_id: String,
    pub status: MappedStatus,
    pub sprint: String,
    /// Page ids in the tags database.
    pub tag_ids: Vec<String>,
}

/// Payload for creating a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub title: String,
    pub ticket_id: String,
    /// Jira browse URL, linked from the ticket id cell.
    pub url: String,
    pub status: MappedStatus,
    pub sprint: String,
    pub tag_id: Option<String>,
}

/// Payload for updating a record in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordUpdate {
    pub status: MappedStatus,
    /// Full replacement tag list; `None` leaves the relation untouched.
    pub tag_ids: Option<Vec<String>>,
}

/// A record projected for the digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedRecord {
    pub ticket_id: String,
    pub title: String,
    pub status: MappedStatus,
    pub url: String,
}

//! Jira API response models.
//!
//! These structs map to the Jira REST API v3 JSON payloads. They are used
//! internally by the Jira adapter and are not part of the domain model.

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::models::{ParentRef, SprintMembership, Ticket};

/// Response wrapper for the search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct JiraSearchResponse {
    #[serde(default)]
    pub issues: Vec<JiraIssue>,
}

/// An issue as returned by search or by `/issue/{key}`.
#[derive(Debug, Clone, Deserialize)]
pub struct JiraIssue {
    /// Issue key, e.g. "SHOP-142".
    pub key: String,
    pub fields: JiraFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraFields {
    #[serde(default)]
    pub summary: String,
    pub status: JiraNamed,
    #[serde(rename = "issuetype", default)]
    pub issue_type: JiraNamed,
    #[serde(default)]
    pub parent: Option<JiraParent>,
    /// Everything else, including custom fields such as the sprint field.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Any Jira object identified by a `name` (status, issue type).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JiraNamed {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraParent {
    pub key: String,
    #[serde(default)]
    pub fields: Option<JiraParentFields>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraParentFields {
    #[serde(default)]
    pub summary: String,
}

/// One entry of the sprint custom field.
#[derive(Debug, Clone, Deserialize)]
pub struct JiraSprint {
    pub name: String,
    pub state: String,
}

impl JiraIssue {
    /// Read the sprint memberships stored under `sprint_field`.
    ///
    /// A missing or `null` field means the issue is in no sprint.
    pub fn sprints(&self, sprint_field: &str) -> Result<Vec<JiraSprint>, serde_json::Error> {
        match self.fields.extra.get(sprint_field) {
            None | Some(serde_json::Value::Null) => Ok(Vec::new()),
            Some(value) => serde_json::from_value(value.clone()),
        }
    }

    /// Convert into a domain [`Ticket`].
    pub fn into_ticket(self, sprint_field: &str) -> Result<Ticket, serde_json::Error> {
        let sprints = self
            .sprints(sprint_field)?
            .into_iter()
            .map(|sprint| SprintMembership::new(sprint.name, sprint.state))
            .collect();

        let parent = self.fields.parent.map(|parent| ParentRef {
            key: parent.key,
            summary: parent.fields.map(|f| f.summary).unwrap_or_default(),
        });

        Ok(Ticket {
            key: self.key,
            summary: self.fields.summary,
            status: self.fields.status.name,
            issue_type: self.fields.issue_type.name,
            parent,
            sprints,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPRINT_FIELD: &str = "customfield_10008";

    #[test]
    fn test_search_response_to_tickets() {
        let json = r#"{
            "startAt": 0,
            "maxResults": 50,
            "issues": [
                {
                    "id": "10001",
                    "key": "SHOP-142",
                    "fields": {
                        "summary": "Add saved cards",
                        "status": { "name": "In Progress", "id": "3" },
                        "issuetype": { "name": "Story" },
                        "parent": {
                            "key": "SHOP-100",
                            "fields": { "summary": "Checkout Redesign" }
                        },
                        "customfield_10008": [
                            { "id": 41, "name": "Sprint 11", "state": "closed", "boardId": 7 },
                            { "id": 42, "name": "Sprint 12", "state": "active", "boardId": 7 }
                        ]
                    }
                }
            ]
        }"#;
        let resp: JiraSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.issues.len(), 1);

        let ticket = resp.issues[0].clone().into_ticket(SPRINT_FIELD).unwrap();
        assert_eq!(ticket.key, "SHOP-142");
        assert_eq!(ticket.summary, "Add saved cards");
        assert_eq!(ticket.status, "In Progress");
        assert_eq!(ticket.issue_type, "Story");
        assert_eq!(ticket.parent.as_ref().unwrap().summary, "Checkout Redesign");
        assert_eq!(ticket.sprints.len(), 2);
        assert!(ticket.is_active_in("Sprint 12"));
    }

    #[test]
    fn test_null_sprint_field_means_no_sprints() {
        let json = r#"{
            "key": "SHOP-7",
            "fields": {
                "summary": "Typo",
                "status": { "name": "Open" },
                "issuetype": { "name": "Bug" },
                "customfield_10008": null
            }
        }"#;
        let issue: JiraIssue = serde_json::from_str(json).unwrap();
        let ticket = issue.into_ticket(SPRINT_FIELD).unwrap();
        assert!(ticket.sprints.is_empty());
        assert!(ticket.parent.is_none());
    }

    #[test]
    fn test_sprint_field_is_configurable() {
        let json = r#"{
            "key": "OPS-1",
            "fields": {
                "status": { "name": "Open" },
                "customfield_10020": [{ "name": "Ops 3", "state": "active" }]
            }
        }"#;
        let issue: JiraIssue = serde_json::from_str(json).unwrap();
        assert!(issue.sprints(SPRINT_FIELD).unwrap().is_empty());

        let ticket = issue.into_ticket("customfield_10020").unwrap();
        assert_eq!(ticket.sprints[0].name, "Ops 3");
        assert_eq!(ticket.issue_type, "");
    }

    #[test]
    fn test_malformed_sprint_field_is_an_error() {
        let json = r#"{
            "key": "OPS-2",
            "fields": {
                "status": { "name": "Open" },
                "customfield_10008": "Sprint 12"
            }
        }"#;
        let issue: JiraIssue = serde_json::from_str(json).unwrap();
        assert!(issue.into_ticket(SPRINT_FIELD).is_err());
    }
}

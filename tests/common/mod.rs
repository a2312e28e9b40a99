//! Common test utilities for integration tests
//!
//! Provides shared fixtures, helpers, and test utilities used across
//! multiple integration test files.

#![allow(dead_code)]

use serde_json::{json, Value};
use sprint_digest::domain::models::Config;

pub const SPRINT: &str = "Sprint 12";
pub const RECORDS_DB: &str = "db-records";
pub const TAGS_DB: &str = "db-tags";

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
/// Call this at the beginning of tests that need logging.
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// A complete config pointing every service at `server`.
pub fn config_for(server: &mockito::Server) -> Config {
    let mut config = Config::default();
    config.jira.base_url = server.url();
    config.jira.query_url = format!("{}/rest/api/3/search?jql=filter=11407", server.url());
    config.jira.user_name = "bot@acme.io".to_string();
    config.jira.api_token = "jira-token".to_string();
    config.notion.base_url = server.url();
    config.notion.token = "secret_notion".to_string();
    config.notion.database_id = RECORDS_DB.to_string();
    config.notion.tags_database_id = TAGS_DB.to_string();
    config.slack.webhook_url = format!("{}/services/T0/B0/hook", server.url());
    config.http.timeout_secs = 5;
    config
}

/// A Jira issue payload with the default sprint field.
pub fn jira_issue(key: &str, summary: &str, status: &str, issue_type: &str, sprint_state: &str) -> Value {
    json!({
        "key": key,
        "fields": {
            "summary": summary,
            "status": { "name": status },
            "issuetype": { "name": issue_type },
            "customfield_10008": [{ "name": SPRINT, "state": sprint_state }]
        }
    })
}

/// A records-database page payload.
pub fn record_page(id: &str, ticket_id: &str, title: &str, status: &str, tag_ids: &[&str]) -> Value {
    json!({
        "object": "page",
        "id": id,
        "properties": {
            "Title": { "type": "title", "title": [{ "plain_text": title }] },
            "Jira Id": { "type": "rich_text", "rich_text": [{ "plain_text": ticket_id }] },
            "Status": { "type": "select", "select": { "name": status } },
            "Sprint": { "type": "select", "select": { "name": SPRINT } },
            "Tags": {
                "type": "relation",
                "relation": tag_ids.iter().map(|id| json!({ "id": id })).collect::<Vec<_>>()
            }
        }
    })
}

/// A tags-database page payload.
pub fn tag_page(id: &str, name: &str) -> Value {
    json!({
        "object": "page",
        "id": id,
        "properties": {
            "Name": { "type": "title", "title": [{ "plain_text": name }] }
        }
    })
}

pub fn query_result(pages: Vec<Value>) -> String {
    json!({ "object": "list", "results": pages, "has_more": false }).to_string()
}

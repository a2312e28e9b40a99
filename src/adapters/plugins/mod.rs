//! Native adapter plugins.
//!
//! One sub-module per external system. Each provides a typed HTTP client and
//! the implementation of the matching domain port.

pub mod http;
pub mod jira;
pub mod notion;
pub mod slack;

use std::sync::Arc;
use std::time::Duration;

use crate::domain::errors::DomainResult;
use crate::domain::models::Config;
use crate::domain::ports::{Notifier, RecordStore, TicketSource};

use self::jira::client::JiraClient;
use self::jira::source::JiraTicketSource;
use self::notion::client::NotionClient;
use self::notion::store::NotionRecordStore;
use self::slack::client::SlackWebhookClient;

/// The three adapters a run talks to.
pub struct Connectors {
    pub tickets: Arc<dyn TicketSource>,
    pub records: Arc<dyn RecordStore>,
    pub notifier: Arc<dyn Notifier>,
}

/// Build the Jira, Notion and Slack adapters from `config`.
///
/// No request is sent here. Callers are expected to have validated the
/// required settings first.
pub fn connect(config: &Config) -> DomainResult<Connectors> {
    let timeout = Duration::from_secs(config.http.timeout_secs);

    let jira = Arc::new(JiraClient::new(&config.jira, timeout)?);
    let notion = Arc::new(NotionClient::new(&config.notion, timeout)?);

    Ok(Connectors {
        tickets: Arc::new(JiraTicketSource::new(jira, config.jira.sprint_field.as_str())),
        records: Arc::new(NotionRecordStore::new(
            notion,
            config.notion.database_id.as_str(),
            config.notion.tags_database_id.as_str(),
        )),
        notifier: Arc::new(SlackWebhookClient::new(&config.slack, timeout)?),
    })
}

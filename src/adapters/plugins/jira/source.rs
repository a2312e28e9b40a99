//! Jira ticket source.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::{DomainError, DomainResult, Service};
use crate::domain::models::Ticket;
use crate::domain::ports::TicketSource;

use super::client::JiraClient;
use super::models::JiraIssue;

/// [`TicketSource`] backed by Jira.
#[derive(Debug)]
pub struct JiraTicketSource {
    client: Arc<JiraClient>,
    /// Custom field holding sprint memberships.
    sprint_field: String,
}

impl JiraTicketSource {
    pub fn new(client: Arc<JiraClient>, sprint_field: impl Into<String>) -> Self {
        Self {
            client,
            sprint_field: sprint_field.into(),
        }
    }

    fn to_ticket(&self, issue: JiraIssue) -> DomainResult<Ticket> {
        let key = issue.key.clone();
        issue
            .into_ticket(&self.sprint_field)
            .map_err(|e| DomainError::Decode {
                service: Service::Jira,
                message: format!("{key}: invalid {}: {e}", self.sprint_field),
            })
    }
}

#[async_trait]
impl TicketSource for JiraTicketSource {
    async fn fetch_tickets(&self) -> DomainResult<Vec<Ticket>> {
        tracing::info!("Fetching tickets from Jira");

        let response = self.client.search().await?;
        let tickets = response
            .issues
            .into_iter()
            .map(|issue| self.to_ticket(issue))
            .collect::<DomainResult<Vec<_>>>()?;

        tracing::info!(count = tickets.len(), "Jira tickets fetched");
        Ok(tickets)
    }

    async fn fetch_ticket(&self, key: &str) -> DomainResult<Ticket> {
        tracing::debug!(ticket_id = key, "Fetching Jira ticket");
        let issue = self.client.get_issue(key).await?;
        self.to_ticket(issue)
    }
}

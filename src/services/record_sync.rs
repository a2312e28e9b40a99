//! Record synchronization between Jira and Notion.
//!
//! Additions and refreshes are separate passes: [`RecordSyncService::upsert_all_from_tickets`]
//! only creates records that are missing, and
//! [`RecordSyncService::refresh_statuses_for_sprint`] re-reads every record's
//! ticket to bring status and tags up to date.

use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::models::{
    FormattedRecord, MappedStatus, NewRecord, RecordUpdate, StatusMapping, TagRules, Ticket,
};
use crate::domain::ports::{RecordStore, TicketSource};
use crate::services::tag_resolver::TagResolver;

/// Keeps the Notion records of a sprint in step with Jira.
pub struct RecordSyncService {
    tickets: Arc<dyn TicketSource>,
    store: Arc<dyn RecordStore>,
    tags: TagResolver,
    statuses: StatusMapping,
    /// Jira site root used for browse links.
    jira_base_url: String,
}

impl RecordSyncService {
    pub fn new(
        tickets: Arc<dyn TicketSource>,
        store: Arc<dyn RecordStore>,
        statuses: StatusMapping,
        tag_rules: TagRules,
        jira_base_url: impl Into<String>,
    ) -> Self {
        Self {
            tags: TagResolver::new(tag_rules, Arc::clone(&store)),
            tickets,
            store,
            statuses,
            jira_base_url: jira_base_url.into(),
        }
    }

    pub fn browse_url(&self, ticket_id: &str) -> String {
        format!(
            "{}/browse/{}",
            self.jira_base_url.trim_end_matches('/'),
            ticket_id
        )
    }

    /// Whether a record exists for `ticket_id` in `sprint`.
    pub async fn exists(&self, ticket_id: &str, sprint: &str) -> DomainResult<bool> {
        Ok(self.store.find_record(ticket_id, sprint).await?.is_some())
    }

    /// Create a record. A non-empty `tag` is resolved and attached.
    pub async fn insert(
        &self,
        title: &str,
        ticket_id: &str,
        status: &MappedStatus,
        sprint: &str,
        tag: &str,
    ) -> DomainResult<String> {
        let tag_id = if tag.is_empty() {
            None
        } else {
            Some(self.tags.resolve_tag_id(tag).await?)
        };

        let record = NewRecord {
            title: title.to_string(),
            ticket_id: ticket_id.to_string(),
            url: self.browse_url(ticket_id),
            status: status.clone(),
            sprint: sprint.to_string(),
            tag_id,
        };
        let record_id = self.store.create_record(&record).await?;

        tracing::info!(ticket_id, title, record_id = %record_id, tag, "Inserted to Notion");
        Ok(record_id)
    }

    /// Set a record's status and merge `tag` into its tag list.
    ///
    /// Existing tags are never removed; the relation is only rewritten when
    /// the tag is not already attached.
    pub async fn update(
        &self,
        ticket_id: &str,
        record_id: &str,
        status: &MappedStatus,
        tag: &str,
    ) -> DomainResult<()> {
        let tag_ids = if tag.is_empty() {
            None
        } else {
            let tag_id = self.tags.resolve_tag_id(tag).await?;
            let mut current = self.store.get_record(record_id).await?.tag_ids;
            if current.contains(&tag_id) {
                None
            } else {
                current.push(tag_id);
                Some(current)
            }
        };

        let update = RecordUpdate {
            status: status.clone(),
            tag_ids,
        };
        self.store.update_record(record_id, &update).await?;

        tracing::info!(ticket_id, record_id, status = %status, "Updated Notion page");
        Ok(())
    }

    /// Insert a record for every ticket active in `sprint` that has none yet.
    ///
    /// Returns the number of records created.
    pub async fn upsert_all_from_tickets(&self, tickets: &[Ticket], sprint: &str) -> DomainResult<usize> {
        let mut inserted = 0;
        for ticket in tickets.iter().filter(|t| t.is_active_in(sprint)) {
            let status = self.statuses.map(&ticket.status);
            let tag = self.tags.tag_for(ticket);

            if self.exists(&ticket.key, sprint).await? {
                tracing::debug!(ticket_id = %ticket.key, sprint, "Record already exists");
                continue;
            }

            self.insert(&ticket.summary, &ticket.key, &status, sprint, &tag)
                .await?;
            inserted += 1;
        }
        Ok(inserted)
    }

    /// Re-read the ticket behind every record of `sprint` and update the
    /// record's status and tags.
    ///
    /// Returns the number of records updated.
    pub async fn refresh_statuses_for_sprint(&self, sprint: &str) -> DomainResult<usize> {
        let records = self.store.list_records(sprint).await?;
        for record in &records {
            let ticket = self.tickets.fetch_ticket(&record.ticket_id).await?;
            let status = self.statuses.map(&ticket.status);
            let tag = self.tags.tag_for(&ticket);
            self.update(&record.ticket_id, &record.id, &status, &tag)
                .await?;
        }
        Ok(records.len())
    }

    /// Records of `sprint` projected for the digest, in workflow order.
    ///
    /// The sort is stable, so records with the same status keep their
    /// retrieval order.
    pub async fn fetch_formatted_records(&self, sprint: &str) -> DomainResult<Vec<FormattedRecord>> {
        let mut formatted: Vec<FormattedRecord> = self
            .store
            .list_records(sprint)
            .await?
            .into_iter()
            .map(|record| FormattedRecord {
                url: self.browse_url(&record.ticket_id),
                ticket_id: record.ticket_id,
                title: record.title,
                status: record.status,
            })
            .collect();

        formatted.sort_by(|a, b| a.status.ranked().cmp(&b.status.ranked()));
        Ok(formatted)
    }
}

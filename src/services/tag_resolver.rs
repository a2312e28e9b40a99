//! Tag resolution.
//!
//! Derives a tag label from a ticket and maps labels to tag record ids,
//! creating tag records on first use.

use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::models::{TagRules, Ticket};
use crate::domain::ports::RecordStore;

/// Resolves ticket tags against the tags database.
pub struct TagResolver {
    rules: TagRules,
    store: Arc<dyn RecordStore>,
}

impl TagResolver {
    pub fn new(rules: TagRules, store: Arc<dyn RecordStore>) -> Self {
        Self { rules, store }
    }

    /// Tag label for `ticket`; empty when the ticket gets no tag.
    pub fn tag_for(&self, ticket: &Ticket) -> String {
        self.rules.tag_for(ticket)
    }

    /// Id of the tag named `name`, creating the tag if it does not exist.
    ///
    /// This is a plain lookup followed by a create. The pair is not atomic:
    /// two runs overlapping on the same new name can both create it.
    pub async fn resolve_tag_id(&self, name: &str) -> DomainResult<String> {
        if let Some(tag) = self.store.find_tag(name).await? {
            tracing::debug!(tag = name, tag_id = %tag.id, "Tag found");
            return Ok(tag.id);
        }

        let tag = self.store.create_tag(name).await?;
        tracing::info!(tag = name, tag_id = %tag.id, "Created tag");
        Ok(tag.id)
    }
}

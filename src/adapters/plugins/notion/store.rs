//! Notion record store.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::{DomainError, DomainResult, Service};
use crate::domain::models::{NewRecord, Record, RecordUpdate, Tag};
use crate::domain::ports::RecordStore;

use super::client::NotionClient;
use super::models::{
    create_record_body, create_tag_body, properties, update_record_body, NotionFilter, NotionPage,
};

/// [`RecordStore`] backed by two Notion databases.
#[derive(Debug)]
pub struct NotionRecordStore {
    client: Arc<NotionClient>,
    database_id: String,
    tags_database_id: String,
}

impl NotionRecordStore {
    pub fn new(
        client: Arc<NotionClient>,
        database_id: impl Into<String>,
        tags_database_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            database_id: database_id.into(),
            tags_database_id: tags_database_id.into(),
        }
    }

    /// Convert query results to records, dropping pages without a ticket id.
    fn to_records(pages: Vec<NotionPage>) -> Vec<Record> {
        pages
            .into_iter()
            .filter_map(|page| {
                let page_id = page.id.clone();
                let record = page.into_record();
                if record.is_none() {
                    tracing::warn!(record_id = %page_id, "Skipping Notion page without a Jira Id");
                }
                record
            })
            .collect()
    }
}

#[async_trait]
impl RecordStore for NotionRecordStore {
    async fn find_record(&self, ticket_id: &str, sprint: &str) -> DomainResult<Option<Record>> {
        let filter = NotionFilter::And(vec![
            NotionFilter::select(properties::SPRINT, sprint),
            NotionFilter::rich_text(properties::JIRA_ID, ticket_id),
        ]);
        let response = self.client.query_database(&self.database_id, &filter).await?;
        Ok(Self::to_records(response.results).into_iter().next())
    }

    async fn create_record(&self, record: &NewRecord) -> DomainResult<String> {
        let body = create_record_body(&self.database_id, record);
        let page = self.client.create_page(&body).await?;
        Ok(page.id)
    }

    async fn get_record(&self, record_id: &str) -> DomainResult<Record> {
        let page = self.client.get_page(record_id).await?;
        page.into_record().ok_or_else(|| DomainError::Decode {
            service: Service::Notion,
            message: format!("page {record_id} has no {}", properties::JIRA_ID),
        })
    }

    async fn update_record(&self, record_id: &str, update: &RecordUpdate) -> DomainResult<()> {
        let body = update_record_body(update);
        self.client.update_page(record_id, &body).await?;
        Ok(())
    }

    async fn list_records(&self, sprint: &str) -> DomainResult<Vec<Record>> {
        let filter = NotionFilter::select(properties::SPRINT, sprint);
        let response = self.client.query_database(&self.database_id, &filter).await?;
        Ok(Self::to_records(response.results))
    }

    async fn find_tag(&self, name: &str) -> DomainResult<Option<Tag>> {
        let filter = NotionFilter::title(properties::TAG_NAME, name);
        let response = self
            .client
            .query_database(&self.tags_database_id, &filter)
            .await?;
        Ok(response.results.into_iter().next().map(NotionPage::into_tag))
    }

    async fn create_tag(&self, name: &str) -> DomainResult<Tag> {
        let body = create_tag_body(&self.tags_database_id, name);
        let page = self.client.create_page(&body).await?;
        Ok(Tag {
            id: page.id,
            name: name.to_string(),
        })
    }
}

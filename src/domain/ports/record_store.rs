//! Record store port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{NewRecord, Record, RecordUpdate, Tag};

/// Port for the workspace database holding sprint records and tags.
///
/// The store enforces no uniqueness of its own: callers check before they
/// insert, and nothing stops two overlapping runs from racing.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Find the record for `ticket_id` within `sprint`.
    async fn find_record(&self, ticket_id: &str, sprint: &str) -> DomainResult<Option<Record>>;

    /// Create a record and return its id.
    async fn create_record(&self, record: &NewRecord) -> DomainResult<String>;

    async fn get_record(&self, record_id: &str) -> DomainResult<Record>;

    async fn update_record(&self, record_id: &str, update: &RecordUpdate) -> DomainResult<()>;

    /// All records of `sprint`, in retrieval order.
    async fn list_records(&self, sprint: &str) -> DomainResult<Vec<Record>>;

    /// Look a tag up by exact name.
    async fn find_tag(&self, name: &str) -> DomainResult<Option<Tag>>;

    async fn create_tag(&self, name: &str) -> DomainResult<Tag>;
}

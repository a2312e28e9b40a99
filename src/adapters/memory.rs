//! In-memory port implementations for testing.
//!
//! Every fake counts the calls it receives so tests can assert that a code
//! path performed no I/O at all.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::errors::{DomainError, DomainResult, Service};
use crate::domain::models::{NewRecord, Record, RecordUpdate, Tag, Ticket};
use crate::domain::ports::{Notifier, RecordStore, TicketSource};

fn not_found(service: Service, what: &str) -> DomainError {
    DomainError::Api {
        service,
        status: 404,
        body: format!("{what} not found"),
    }
}

/// Ticket source serving a fixed, mutable ticket list.
#[derive(Debug, Default)]
pub struct InMemoryTicketSource {
    tickets: Mutex<Vec<Ticket>>,
    calls: AtomicUsize,
}

impl InMemoryTicketSource {
    pub fn new(tickets: Vec<Ticket>) -> Self {
        Self {
            tickets: Mutex::new(tickets),
            calls: AtomicUsize::new(0),
        }
    }

    /// Insert `ticket`, replacing any ticket with the same key.
    pub async fn upsert_ticket(&self, ticket: Ticket) {
        let mut tickets = self.tickets.lock().await;
        match tickets.iter_mut().find(|t| t.key == ticket.key) {
            Some(existing) => *existing = ticket,
            None => tickets.push(ticket),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TicketSource for InMemoryTicketSource {
    async fn fetch_tickets(&self) -> DomainResult<Vec<Ticket>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.tickets.lock().await.clone())
    }

    async fn fetch_ticket(&self, key: &str) -> DomainResult<Ticket> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.tickets
            .lock()
            .await
            .iter()
            .find(|t| t.key == key)
            .cloned()
            .ok_or_else(|| not_found(Service::Jira, key))
    }
}

/// Record store keeping records and tags in vectors.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: Mutex<Vec<Record>>,
    tags: Mutex<Vec<Tag>>,
    next_id: AtomicUsize,
    tags_created: AtomicUsize,
    calls: AtomicUsize,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self, prefix: &str) -> String {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{prefix}-{n}")
    }

    /// Add a record directly, bypassing call counting.
    pub async fn seed_record(&self, record: Record) {
        self.records.lock().await.push(record);
    }

    pub async fn records(&self) -> Vec<Record> {
        self.records.lock().await.clone()
    }

    pub async fn tags(&self) -> Vec<Tag> {
        self.tags.lock().await.clone()
    }

    pub fn tags_created(&self) -> usize {
        self.tags_created.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn count(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn find_record(&self, ticket_id: &str, sprint: &str) -> DomainResult<Option<Record>> {
        self.count();
        Ok(self
            .records
            .lock()
            .await
            .iter()
            .find(|r| r.ticket_id == ticket_id && r.sprint == sprint)
            .cloned())
    }

    async fn create_record(&self, record: &NewRecord) -> DomainResult<String> {
        self.count();
        let id = self.next_id("record");
        self.records.lock().await.push(Record {
            id: id.clone(),
            title: record.title.clone(),
            ticket_id: record.ticket_id.clone(),
            status: record.status.clone(),
            sprint: record.sprint.clone(),
            tag_ids: record.tag_id.iter().cloned().collect(),
        });
        Ok(id)
    }

    async fn get_record(&self, record_id: &str) -> DomainResult<Record> {
        self.count();
        self.records
            .lock()
            .await
            .iter()
            .find(|r| r.id == record_id)
            .cloned()
            .ok_or_else(|| not_found(Service::Notion, record_id))
    }

    async fn update_record(&self, record_id: &str, update: &RecordUpdate) -> DomainResult<()> {
        self.count();
        let mut records = self.records.lock().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(|| not_found(Service::Notion, record_id))?;
        record.status = update.status.clone();
        if let Some(tag_ids) = &update.tag_ids {
            record.tag_ids.clone_from(tag_ids);
        }
        Ok(())
    }

    async fn list_records(&self, sprint: &str) -> DomainResult<Vec<Record>> {
        self.count();
        Ok(self
            .records
            .lock()
            .await
            .iter()
            .filter(|r| r.sprint == sprint)
            .cloned()
            .collect())
    }

    async fn find_tag(&self, name: &str) -> DomainResult<Option<Tag>> {
        self.count();
        Ok(self.tags.lock().await.iter().find(|t| t.name == name).cloned())
    }

    async fn create_tag(&self, name: &str) -> DomainResult<Tag> {
        self.count();
        self.tags_created.fetch_add(1, Ordering::SeqCst);
        let tag = Tag {
            id: self.next_id("tag"),
            name: name.to_string(),
        };
        self.tags.lock().await.push(tag.clone());
        Ok(tag)
    }
}

/// Notifier that records every message instead of sending it.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn messages(&self) -> Vec<String> {
        self.messages.lock().await.clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn post(&self, text: &str) -> DomainResult<()> {
        self.messages.lock().await.push(text.to_string());
        Ok(())
    }
}

//! Ticket source port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::Ticket;

/// Port for reading tickets from the issue tracker.
///
/// Both calls hit the network exactly once and are never retried; any
/// transport failure or non-2xx response comes back as an error.
#[async_trait]
pub trait TicketSource: Send + Sync {
    /// Fetch the pre-filtered ticket list. Only the first page is read.
    async fn fetch_tickets(&self) -> DomainResult<Vec<Ticket>>;

    /// Fetch one ticket by key.
    async fn fetch_ticket(&self, key: &str) -> DomainResult<Ticket>;
}

//! Notifier port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;

/// Port for delivering the finished digest.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Post `text` as a single message.
    async fn post(&self, text: &str) -> DomainResult<()>;
}

//! Port trait definitions (Hexagonal Architecture)
//!
//! The sync talks to the outside world only through these traits:
//! - TicketSource: the issue tracker (Jira)
//! - RecordStore: the workspace database (Notion)
//! - Notifier: the team channel (Slack webhook)

pub mod notifier;
pub mod record_store;
pub mod ticket_source;

pub use notifier::Notifier;
pub use record_store::RecordStore;
pub use ticket_source::TicketSource;
